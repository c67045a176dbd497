//! Command implementations for the appicons CLI

pub mod extract;
