//! CLI command implementations.

pub mod common;
pub mod demo;
pub mod grover;
pub mod phase;
pub mod qft;
pub mod run;
pub mod version;
