//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`validation`]**: Client-side form validation (registration, login,
//!   posts, comments, image picks)
//!
//! ## Related Modules
//!
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
