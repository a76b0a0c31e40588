//! Quote Types - Pure type definitions shared by the quote service
//!
//! This crate contains only serde data types with no async runtime
//! dependencies.

pub mod quote;

pub use quote::*;
