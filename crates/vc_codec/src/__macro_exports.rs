//! Items referenced by `#[derive(Tabular)]` and `submit_descriptor!`.
//!
//! Generated code cannot assume the caller has `alloc` in scope, so every
//! path it needs is re-exported here.

pub use alloc::borrow::ToOwned;
pub use alloc::string::{String, ToString};

pub use crate::impls::concat;

#[cfg(feature = "auto_register")]
pub use inventory;
