/// Runtime selection between the list-based and tree-based structures.
use crate::error::Result;
use crate::list::ListUnionFind;
use crate::traits::DisjointSets;
use crate::tree::{Linking, TreeConfig, TreeUnionFind};

/// The structure variants that can be built by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StructureKind {
    #[cfg_attr(feature = "serde", serde(rename = "list"))]
    List,
    #[cfg_attr(feature = "serde", serde(rename = "tree-size"))]
    TreeBySize,
    #[cfg_attr(feature = "serde", serde(rename = "tree-rank"))]
    TreeByRank,
}

impl StructureKind {
    pub fn all() -> &'static [StructureKind] {
        &[
            StructureKind::List,
            StructureKind::TreeBySize,
            StructureKind::TreeByRank,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StructureKind::List => "list",
            StructureKind::TreeBySize => "tree-size",
            StructureKind::TreeByRank => "tree-rank",
        }
    }

    pub fn from_name(name: &str) -> Option<StructureKind> {
        StructureKind::all()
            .iter()
            .find(|k| k.name() == name)
            .copied()
    }

    /// Structure family: `"list"` or `"tree"`.
    pub fn structure(&self) -> &'static str {
        match self {
            StructureKind::List => "list",
            StructureKind::TreeBySize | StructureKind::TreeByRank => "tree",
        }
    }

    pub fn use_rank(&self) -> bool {
        matches!(self, StructureKind::TreeByRank)
    }

    pub fn path_compression(&self) -> bool {
        !matches!(self, StructureKind::List)
    }

    /// Inverse of ([`structure`](Self::structure), [`use_rank`](Self::use_rank)).
    pub fn from_parts(structure: &str, use_rank: bool) -> Option<StructureKind> {
        match (structure, use_rank) {
            ("list", _) => Some(StructureKind::List),
            ("tree", false) => Some(StructureKind::TreeBySize),
            ("tree", true) => Some(StructureKind::TreeByRank),
            _ => None,
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            StructureKind::List => "ListUF",
            StructureKind::TreeBySize => "TreeUF (union-by-size)",
            StructureKind::TreeByRank => "TreeUF (union-by-rank)",
        }
    }

    /// Build `n` singleton sets of this kind.
    pub fn build(&self, n: usize) -> Structure {
        match self {
            StructureKind::List => Structure::List(ListUnionFind::new(n)),
            StructureKind::TreeBySize => Structure::Tree(TreeUnionFind::new(n)),
            StructureKind::TreeByRank => Structure::Tree(TreeUnionFind::with_config(
                n,
                TreeConfig {
                    linking: Linking::Rank,
                    path_compression: true,
                },
            )),
        }
    }
}

/// Either structure behind one concrete type.
#[derive(Debug, Clone)]
pub enum Structure {
    List(ListUnionFind),
    Tree(TreeUnionFind),
}

impl Structure {
    pub fn kind(&self) -> StructureKind {
        match self {
            Structure::List(_) => StructureKind::List,
            Structure::Tree(t) => match t.config().linking {
                Linking::Size => StructureKind::TreeBySize,
                Linking::Rank => StructureKind::TreeByRank,
            },
        }
    }

    fn inner(&self) -> &dyn DisjointSets {
        match self {
            Structure::List(s) => s,
            Structure::Tree(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn DisjointSets {
        match self {
            Structure::List(s) => s,
            Structure::Tree(s) => s,
        }
    }
}

impl DisjointSets for Structure {
    fn len(&self) -> usize {
        self.inner().len()
    }

    fn find(&mut self, x: usize) -> Result<usize> {
        self.inner_mut().find(x)
    }

    fn union(&mut self, x: usize, y: usize) -> Result<usize> {
        self.inner_mut().union(x, y)
    }

    fn pointer_updates(&self) -> u64 {
        self.inner().pointer_updates()
    }

    fn reset_pointer_updates(&mut self) {
        self.inner_mut().reset_pointer_updates()
    }

    fn set_size(&mut self, x: usize) -> Result<usize> {
        self.inner_mut().set_size(x)
    }

    fn num_sets(&self) -> usize {
        self.inner().num_sets()
    }

    fn max_set_size(&self) -> usize {
        self.inner().max_set_size()
    }
}
