//! Output rendering for sizing results.

pub mod export;
