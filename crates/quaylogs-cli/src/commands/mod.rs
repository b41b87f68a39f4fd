//! Command implementations.

pub mod harvest;
pub mod pages;
