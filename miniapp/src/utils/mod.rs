//! # Utility Functions
//!
//! - **[`validation`]**: Preconditions checked before a request is issued
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Display-only amount and address helpers
//! - [`lib_utils::validation`]: Primitive field validators

pub mod validation;
