//! Types module
//!
//! Contains core data structures used throughout the crate.
//! This module organizes types into logical submodules:
//! - `token`: Token and unit types for amount entry
//! - `field`: Field values and error descriptors for validated fields
//! - `error`: Syntactic rejection reasons for amount input

pub mod error;
pub mod field;
pub mod token;

pub use error::InputRejection;
pub use field::{FieldError, FieldValue};
pub use token::{TokenInfo, Unit, FIAT_DECIMALS};
