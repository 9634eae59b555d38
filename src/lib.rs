// src/lib.rs

pub mod core;
pub mod digest;
pub mod error;
pub mod numeric;
pub mod report;
pub mod symbolism;

pub use crate::core::engine::{GematriaEngine, InputAnalysis};
pub use crate::error::{GematriaError, Result};
