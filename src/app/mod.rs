//! Binary-side wiring: config merge, terminal setup, and the run itself.

pub(crate) mod config_runtime;
pub(crate) mod runtime;
pub(crate) mod terminal;
