//! CLI command implementations.

mod check;
mod nav;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
