use crate::error::{check_index, Result};
use crate::traits::DisjointSets;

/// List-based disjoint sets with weighted (smaller-into-larger) union.
///
/// Every element points straight at its leader, so `find` is a single load.
/// Each leader owns the list of its members; a union relinks every member of
/// the smaller list to the other leader and appends the list to it. An
/// element's leader changes only when its set at least doubles, so it is
/// relinked at most `log2(n)` times over the lifetime of the structure.
#[derive(Debug, Clone)]
pub struct ListUnionFind {
    leader: Vec<usize>,
    /// Members of each set, indexed by leader. Empty for non-leaders.
    members: Vec<Vec<usize>>,
    pointer_updates: u64,
}

impl ListUnionFind {
    /// Create `n` singleton sets. Each initial leader write is counted.
    pub fn new(n: usize) -> Self {
        Self {
            leader: (0..n).collect(),
            members: (0..n).map(|i| vec![i]).collect(),
            pointer_updates: n as u64,
        }
    }

    /// Members of the set containing `x`, in insertion order starting with
    /// the leader's original members.
    pub fn members(&self, x: usize) -> Result<&[usize]> {
        check_index(x, self.leader.len())?;
        Ok(&self.members[self.leader[x]])
    }

    fn size_of_leader(&self, leader: usize) -> usize {
        self.members[leader].len()
    }
}

impl DisjointSets for ListUnionFind {
    fn len(&self) -> usize {
        self.leader.len()
    }

    fn find(&mut self, x: usize) -> Result<usize> {
        check_index(x, self.leader.len())?;
        Ok(self.leader[x])
    }

    fn union(&mut self, x: usize, y: usize) -> Result<usize> {
        let n = self.leader.len();
        check_index(x, n)?;
        check_index(y, n)?;

        let mut keep = self.leader[x];
        let mut absorb = self.leader[y];
        if keep == absorb {
            return Ok(keep);
        }
        // Equal sizes: y's set moves under x's leader.
        if self.size_of_leader(keep) < self.size_of_leader(absorb) {
            std::mem::swap(&mut keep, &mut absorb);
        }

        let moved = std::mem::take(&mut self.members[absorb]);
        for &v in &moved {
            self.leader[v] = keep;
        }
        self.pointer_updates += moved.len() as u64;
        self.members[keep].extend(moved);

        Ok(keep)
    }

    fn pointer_updates(&self) -> u64 {
        self.pointer_updates
    }

    fn reset_pointer_updates(&mut self) {
        self.pointer_updates = 0;
    }

    fn set_size(&mut self, x: usize) -> Result<usize> {
        check_index(x, self.leader.len())?;
        Ok(self.size_of_leader(self.leader[x]))
    }

    fn num_sets(&self) -> usize {
        self.members.iter().filter(|m| !m.is_empty()).count()
    }

    fn max_set_size(&self) -> usize {
        self.members.iter().map(Vec::len).max().unwrap_or(0)
    }
}
