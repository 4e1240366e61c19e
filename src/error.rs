//! Error types.

use thiserror::Error;

/// Error returned when building a [`Matrix`][crate::Matrix] or [`Vector`][crate::Vector] from a
/// slice whose length does not match the target's element count.
///
/// Constructors taking arrays (or the [`mat!`][crate::mat] macro) check the element count at
/// compile time and never produce this error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShapeError {
    /// The slice holds a different number of elements than the target type.
    #[error("expected {expected} elements, got {actual}")]
    ElementCount {
        /// Number of elements required by the target type.
        expected: usize,
        /// Number of elements that were supplied.
        actual: usize,
    },
}

impl ShapeError {
    pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::ElementCount { expected, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message() {
        let err = ShapeError::check_len(6, 4).unwrap_err();
        assert_eq!(err.to_string(), "expected 6 elements, got 4");
        assert!(ShapeError::check_len(3, 3).is_ok());
    }
}
