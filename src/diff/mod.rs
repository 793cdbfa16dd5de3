//! Diff module - leaf-path comparison and orchestration.

mod compare;
mod engine;


pub use compare::*;
pub use engine::*;
