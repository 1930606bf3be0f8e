pub mod error;
pub mod traits;
pub mod list;
pub mod tree;
pub mod structure;

pub use error::{Result, UnionFindError};
pub use list::ListUnionFind;
pub use structure::{Structure, StructureKind};
pub use traits::DisjointSets;
pub use tree::{Linking, TreeConfig, TreeUnionFind};
