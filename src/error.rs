//! Construction-time error types.
//!
//! Nothing on the per-tick path returns an error; these only surface while
//! building scales and note selections.

use thiserror::Error;

use crate::MAX_NOTES;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DspError {
    #[error("Scale has {count} notes (at most {max} are supported)", max = MAX_NOTES)]
    TooManyNotes { count: usize },

    #[error("Scale degree {0} out of range (must be 0-15)")]
    DegreeOutOfRange(usize),
}
