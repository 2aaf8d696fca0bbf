//! Process setup helpers.
//!
//! [`bootstrap::init_tracing`] installs the global tracing subscriber.

pub mod bootstrap;
