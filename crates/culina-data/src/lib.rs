//! Culina Data -- the default content set for the culinary engine.
//!
//! Provides a ready-wired [`culina_core::context::CulinaryContext`] carrying
//! the stock materials, spices, effects, and host bindings, plus the status
//! catalog that matches them.

pub mod content;
pub mod keys;

pub use content::{ContentError, default_catalog, default_context};
