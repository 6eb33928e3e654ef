//! Core types: response envelope, error model and the tool descriptor contract.

pub mod content;
pub mod error;
pub mod tool;
