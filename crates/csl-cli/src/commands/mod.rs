//! CLI command implementations

pub(crate) mod check;
pub(crate) mod common;
pub(crate) mod ls;
pub(crate) mod migrate;
pub(crate) mod path;
pub(crate) mod upgrade;
