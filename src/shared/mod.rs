//! Usage: Cross-cutting utilities shared across layers (low-level helpers).

pub(crate) mod fs;
pub(crate) mod mutex_ext;
