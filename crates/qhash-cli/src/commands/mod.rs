//! CLI command implementations.

pub mod avalanche;
pub mod circuit;
pub mod common;
pub mod hash;
pub mod histogram;
pub mod version;
