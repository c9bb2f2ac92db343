//! Application-level utilities for the Calories CLI.
//!
//! - Config and store path resolution
//! - Backend selection and store opening
//! - The per-invocation `AppContext`

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{open_store, resolve_backend, resolve_config_path, resolve_store_path};
