//! CLI command implementations

pub(crate) mod dump;
