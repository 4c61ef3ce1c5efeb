//! Core, DOM-free primitives and decision logic for the Web UI shell.
pub mod bootstrap;
pub mod intent;
pub mod intercept;
pub mod overlay;
pub mod presence;
pub mod query;
pub mod reference;
pub mod store;
