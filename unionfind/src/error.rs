use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnionFindError {
    #[error("element {index} out of range for {len} elements")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, UnionFindError>;

/// Check that `index` names an element of a structure holding `len` elements.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(UnionFindError::OutOfRange { index, len })
    }
}
