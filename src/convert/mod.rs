//! Dual-unit amount conversion
//!
//! This module contains the converter side of the form engine:
//! - `amount_pair` - The synchronized token/fiat state with a structurally
//!   enforced single authoritative side
//! - `converter` - Per-keystroke input handling, cross-value computation,
//!   and focus/blur semantics

pub mod amount_pair;
pub mod converter;

pub use amount_pair::{ActiveEntry, AmountPair};
pub use converter::DualUnitAmountConverter;
