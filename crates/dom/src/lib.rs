pub mod dom_utils;
pub mod fragment;
pub mod snapshot;

mod entities;
mod types;

pub use crate::fragment::{parse_document, parse_fragment};
pub use crate::snapshot::DomSnapshot;
pub use crate::types::{Id, Node, NodeId};
