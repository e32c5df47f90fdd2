pub mod error;
pub mod list;
pub mod node;
pub mod query;
pub mod tree;

pub use error::{QuadTreeError, QuadTreeResult};
pub use list::ResultList;
pub use node::{Entry, NodeRef, QuadNode};
pub use tree::{InsertOutcome, QuadTree};
