//! Command implementations for the Drift CLI

pub mod common;
pub mod make;
pub mod migrate;
pub mod seed;
