//! Error and result definitions relied upon by the bitspan crates.

pub mod error;
pub mod result;

pub use result::Result;
