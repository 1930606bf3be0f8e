use crate::error::Result;

/// Operations shared by every disjoint-set structure in this crate.
///
/// Elements are the indices `0..len()`. Every fallible operation validates its
/// arguments before touching any state, so an `Err` leaves the structure and
/// its pointer-update counter exactly as they were.
pub trait DisjointSets {
    /// Number of elements, fixed at construction.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Representative of the set containing `x`.
    fn find(&mut self, x: usize) -> Result<usize>;

    /// Merge the sets containing `x` and `y`. Returns the representative of
    /// the merged set. Already-joined elements are a no-op.
    fn union(&mut self, x: usize, y: usize) -> Result<usize>;

    /// Pointer writes performed since construction or the last reset.
    fn pointer_updates(&self) -> u64;

    fn reset_pointer_updates(&mut self);

    /// Number of elements in the set containing `x`. Goes through `find`, so
    /// compressing structures may count pointer updates here.
    fn set_size(&mut self, x: usize) -> Result<usize>;

    /// Number of disjoint sets.
    fn num_sets(&self) -> usize;

    /// Size of the largest set, or 0 for an empty structure.
    fn max_set_size(&self) -> usize;

    /// Whether `x` and `y` belong to the same set.
    fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        crate::error::check_index(y, self.len())?;
        let rx = self.find(x)?;
        let ry = self.find(y)?;
        Ok(rx == ry)
    }
}
