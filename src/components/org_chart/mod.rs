mod card;
mod component;
mod handle;
mod layout;
mod state;
mod tree;
mod types;

pub use component::OrgChart;
#[cfg(test)]
pub use layout::{ChartLayout, ChartOptions};
pub use tree::{OrgTree, TreeError};
pub use types::OrgNode;
