//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod order;
pub mod portfolio;
pub mod swap;

pub use order::*;
pub use portfolio::*;
pub use swap::*;
