//! Graphics state stack and operator handlers.
//!
//! This module contains:
//! - `stack`: the q/Q save/restore stack
//! - `ops`: operator handlers that mutate the current state

pub mod ops;
pub mod stack;

// Re-export main types for convenience
pub use ops::matrix_from_operands;
pub use stack::GraphicsStateStack;
