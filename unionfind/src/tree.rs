use crate::error::{check_index, Result};
use crate::traits::DisjointSets;

/// How two roots are linked by `union`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Linking {
    /// Attach the root of the tree with fewer elements under the other.
    #[default]
    Size,
    /// Attach the root of lower rank under the other.
    Rank,
}

/// Heuristics used by a [`TreeUnionFind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    pub linking: Linking,
    /// Re-point every node on the search path straight at the root.
    pub path_compression: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            linking: Linking::Size,
            path_compression: true,
        }
    }
}

/// Disjoint-set forest with weighted union and full path compression.
///
/// Only parent writes that actually change a parent are counted as pointer
/// updates: compression stops at the first node that already points at the
/// root, so a second `find` on the same element costs nothing.
#[derive(Debug, Clone)]
pub struct TreeUnionFind {
    parent: Vec<usize>,
    /// Element count, valid at roots only.
    size: Vec<usize>,
    /// Upper bound on tree height, valid at roots only. Empty under size linking.
    rank: Vec<u8>,
    config: TreeConfig,
    pointer_updates: u64,
}

impl TreeUnionFind {
    /// Create `n` singleton trees using union-by-size with path compression.
    pub fn new(n: usize) -> Self {
        Self::with_config(n, TreeConfig::default())
    }

    /// Create `n` singleton trees. Each initial parent write is counted.
    pub fn with_config(n: usize, config: TreeConfig) -> Self {
        let rank = match config.linking {
            Linking::Rank => vec![0; n],
            Linking::Size => Vec::new(),
        };
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            rank,
            config,
            pointer_updates: n as u64,
        }
    }

    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Root of `x` without compressing the path.
    fn root(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Find on an index that is already known to be in range.
    fn find_unchecked(&mut self, mut x: usize) -> usize {
        let root = self.root(x);
        if !self.config.path_compression {
            return root;
        }
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            self.pointer_updates += 1;
            x = next;
        }
        root
    }

    /// Number of parent links between `x` and its root. Does not compress.
    pub fn depth(&self, mut x: usize) -> Result<usize> {
        check_index(x, self.parent.len())?;
        let mut depth = 0;
        while self.parent[x] != x {
            x = self.parent[x];
            depth += 1;
        }
        Ok(depth)
    }

    /// Greatest depth over all elements. Walks every path, so keep it out of
    /// timed regions.
    pub fn max_depth(&self) -> usize {
        (0..self.parent.len())
            .filter_map(|i| self.depth(i).ok())
            .max()
            .unwrap_or(0)
    }
}

impl DisjointSets for TreeUnionFind {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn find(&mut self, x: usize) -> Result<usize> {
        check_index(x, self.parent.len())?;
        Ok(self.find_unchecked(x))
    }

    fn union(&mut self, x: usize, y: usize) -> Result<usize> {
        let n = self.parent.len();
        check_index(x, n)?;
        check_index(y, n)?;

        // Already joined: no compression, no writes.
        let root = self.root(x);
        if root == self.root(y) {
            return Ok(root);
        }

        let mut rx = self.find_unchecked(x);
        let mut ry = self.find_unchecked(y);

        // Ties keep x's root on top.
        match self.config.linking {
            Linking::Size => {
                if self.size[rx] < self.size[ry] {
                    std::mem::swap(&mut rx, &mut ry);
                }
            }
            Linking::Rank => {
                if self.rank[rx] < self.rank[ry] {
                    std::mem::swap(&mut rx, &mut ry);
                }
                if self.rank[rx] == self.rank[ry] {
                    self.rank[rx] += 1;
                }
            }
        }

        self.parent[ry] = rx;
        self.pointer_updates += 1;
        self.size[rx] += self.size[ry];
        Ok(rx)
    }

    fn pointer_updates(&self) -> u64 {
        self.pointer_updates
    }

    fn reset_pointer_updates(&mut self) {
        self.pointer_updates = 0;
    }

    fn set_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    fn num_sets(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .count()
    }

    fn max_set_size(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .map(|(i, _)| self.size[i])
            .max()
            .unwrap_or(0)
    }
}
