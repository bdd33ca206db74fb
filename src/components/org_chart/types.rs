use std::fmt;

use serde::{Deserialize, Deserializer};

/// One position in the organization hierarchy, as served by `/api/orgchart`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgNode {
	#[serde(deserialize_with = "id_string")]
	pub id: String,
	#[serde(default, deserialize_with = "parent_id")]
	pub parent_id: Option<String>,
	pub label: String,
	#[serde(default)]
	pub department: Option<String>,
	#[serde(default)]
	pub location: Option<String>,
	#[serde(default)]
	pub salary: Option<Salary>,
	#[serde(default)]
	pub combo_code: Option<String>,
	#[serde(default, deserialize_with = "null_as_false")]
	pub vacant: bool,
}

impl OrgNode {
	pub fn is_root(&self) -> bool {
		self.parent_id.is_none()
	}
}

/// Compensation as the API sends it: either a JSON number or free text.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Salary {
	Number(serde_json::Number),
	Text(String),
}

impl fmt::Display for Salary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Salary::Number(n) => match n.as_f64() {
				// whole floats print without the ".0", the way JS stringifies numbers
				Some(v) if n.is_f64() && v.is_finite() && v.fract() == 0.0 && v.abs() < 1e21 => {
					if v == 0.0 {
						f.write_str("0")
					} else {
						write!(f, "{v:.0}")
					}
				}
				_ => write!(f, "{n}"),
			},
			Salary::Text(s) => f.write_str(s),
		}
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
	Text(String),
	Int(i64),
	Uint(u64),
}

impl From<RawId> for String {
	fn from(raw: RawId) -> Self {
		match raw {
			RawId::Text(s) => s,
			RawId::Int(i) => i.to_string(),
			RawId::Uint(u) => u.to_string(),
		}
	}
}

fn id_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
	RawId::deserialize(de).map(String::from)
}

fn null_as_false<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
	Ok(Option::<bool>::deserialize(de)?.unwrap_or(false))
}

// null, missing and "" all mark the root
fn parent_id<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
	let raw = Option::<RawId>::deserialize(de)?;
	Ok(raw.map(String::from).filter(|s| !s.is_empty()))
}
