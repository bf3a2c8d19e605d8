//! Core types for Charkha Bazaar.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod status;

pub use id::*;
pub use price::Price;
pub use status::{OrderStatus, PROGRESS_STEPS};
