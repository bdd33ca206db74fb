use std::collections::HashMap;

use thiserror::Error;

use super::types::OrgNode;

/// Why a node collection could not be turned into a single-rooted tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
	#[error("org chart has no nodes")]
	Empty,
	#[error("duplicate node id `{0}`")]
	DuplicateId(String),
	#[error("org chart has no root node")]
	NoRoot,
	#[error("org chart has more than one root: {}", .0.join(", "))]
	MultipleRoots(Vec<String>),
	#[error("node `{id}` references missing parent `{parent_id}`")]
	MissingParent { id: String, parent_id: String },
	#[error("nodes not reachable from the root: {}", .0.join(", "))]
	Unreachable(Vec<String>),
}

/// A validated hierarchy. Nodes keep their input order; `children` indexes into `nodes`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrgTree {
	nodes: Vec<OrgNode>,
	children: Vec<Vec<usize>>,
	root: usize,
}

impl OrgTree {
	pub fn build(nodes: Vec<OrgNode>) -> Result<Self, TreeError> {
		if nodes.is_empty() {
			return Err(TreeError::Empty);
		}

		let mut index = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			if index.insert(node.id.as_str(), i).is_some() {
				return Err(TreeError::DuplicateId(node.id.clone()));
			}
		}

		let mut children = vec![Vec::new(); nodes.len()];
		let mut roots = Vec::new();
		for (i, node) in nodes.iter().enumerate() {
			match &node.parent_id {
				None => roots.push(i),
				Some(parent_id) => match index.get(parent_id.as_str()) {
					Some(&parent) => children[parent].push(i),
					None => {
						return Err(TreeError::MissingParent {
							id: node.id.clone(),
							parent_id: parent_id.clone(),
						});
					}
				},
			}
		}

		let root = match roots.as_slice() {
			[] => return Err(TreeError::NoRoot),
			[root] => *root,
			many => {
				return Err(TreeError::MultipleRoots(
					many.iter().map(|&i| nodes[i].id.clone()).collect(),
				));
			}
		};

		// Anything left unvisited sits on a parent cycle detached from the root.
		let mut seen = vec![false; nodes.len()];
		let mut stack = vec![root];
		while let Some(i) = stack.pop() {
			seen[i] = true;
			stack.extend(children[i].iter().copied());
		}
		let unreachable: Vec<String> = seen
			.iter()
			.enumerate()
			.filter(|&(_, seen)| !seen)
			.map(|(i, _)| nodes[i].id.clone())
			.collect();
		if !unreachable.is_empty() {
			return Err(TreeError::Unreachable(unreachable));
		}

		Ok(Self {
			nodes,
			children,
			root,
		})
	}

	pub fn root(&self) -> usize {
		self.root
	}

	pub fn node(&self, idx: usize) -> &OrgNode {
		&self.nodes[idx]
	}

	pub fn children(&self, idx: usize) -> &[usize] {
		&self.children[idx]
	}

	pub fn is_leaf(&self, idx: usize) -> bool {
		self.children[idx].is_empty()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;

	pub(crate) fn node(id: &str, parent: Option<&str>) -> OrgNode {
		OrgNode {
			id: id.into(),
			parent_id: parent.map(Into::into),
			label: format!("Position {id}"),
			department: None,
			location: None,
			salary: None,
			combo_code: None,
			vacant: false,
		}
	}

	#[test]
	fn builds_single_rooted_tree() {
		let tree = OrgTree::build(vec![
			node("1", None),
			node("2", Some("1")),
			node("3", Some("1")),
			node("4", Some("2")),
		])
		.unwrap();

		assert_eq!(tree.len(), 4);
		assert_eq!(tree.root(), 0);
		assert_eq!(tree.children(0), &[1, 2]);
		assert_eq!(tree.children(1), &[3]);
		assert!(tree.is_leaf(2));
	}

	#[test]
	fn parent_may_follow_child_in_input() {
		let tree = OrgTree::build(vec![node("2", Some("1")), node("1", None)]).unwrap();
		assert_eq!(tree.root(), 1);
		assert_eq!(tree.children(1), &[0]);
	}

	#[test]
	fn rejects_empty() {
		assert_eq!(OrgTree::build(vec![]), Err(TreeError::Empty));
	}

	#[test]
	fn rejects_duplicate_ids() {
		let err = OrgTree::build(vec![node("1", None), node("1", None)]).unwrap_err();
		assert_eq!(err, TreeError::DuplicateId("1".into()));
	}

	#[test]
	fn rejects_multiple_roots() {
		let err = OrgTree::build(vec![node("1", None), node("2", None)]).unwrap_err();
		assert_eq!(err, TreeError::MultipleRoots(vec!["1".into(), "2".into()]));
	}

	#[test]
	fn rejects_missing_parent() {
		let err = OrgTree::build(vec![node("1", None), node("2", Some("9"))]).unwrap_err();
		assert_eq!(
			err,
			TreeError::MissingParent {
				id: "2".into(),
				parent_id: "9".into()
			}
		);
	}

	#[test]
	fn rejects_rootless_cycle() {
		let err = OrgTree::build(vec![node("1", Some("2")), node("2", Some("1"))]).unwrap_err();
		assert_eq!(err, TreeError::NoRoot);
	}

	#[test]
	fn rejects_cycle_detached_from_root() {
		let err = OrgTree::build(vec![
			node("1", None),
			node("2", Some("3")),
			node("3", Some("2")),
		])
		.unwrap_err();
		assert_eq!(err, TreeError::Unreachable(vec!["2".into(), "3".into()]));
	}
}
