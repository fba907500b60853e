//! Graphics state stack parameters.
//!
//! Contains StackParams for controlling save/restore behavior.

/// Parameters for the graphics state stack.
///
/// Controls nesting limits and how a restore without a matching save is
/// recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackParams {
    /// Maximum number of saved states beneath the current one. A save beyond
    /// this limit is rejected. None means unlimited.
    pub max_depth: Option<usize>,

    /// When a restore has no matching save, reset the current state to a copy
    /// of the initial state before reporting the imbalance.
    pub reset_on_underflow: bool,
}

impl Default for StackParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            reset_on_underflow: true,
        }
    }
}

impl StackParams {
    /// Creates new stack parameters with the specified values.
    pub const fn new(max_depth: Option<usize>, reset_on_underflow: bool) -> Self {
        Self {
            max_depth,
            reset_on_underflow,
        }
    }
}
