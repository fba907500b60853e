//! Graphics state stack for the q/Q operators.
//!
//! The current state lives outside the saved list, so there is always a
//! current state to mutate. A save pushes a deep copy of the current state;
//! a restore replaces the current state with the most recent copy.
//!
//! One stack belongs to one content stream. There is no internal locking:
//! a host processing pages in parallel gives each worker its own stack.

use tracing::{trace, warn};

use crate::error::{PdfError, Result};
use crate::model::{GraphicsState, StackParams};

/// Save/restore stack of graphics states.
#[derive(Debug, Clone)]
pub struct GraphicsStateStack {
    /// State the stack started from; used by `reset` and underflow recovery
    initial: GraphicsState,
    /// Current graphics state
    current: GraphicsState,
    /// Saved snapshots, innermost last
    saved: Vec<GraphicsState>,
    params: StackParams,
}

impl GraphicsStateStack {
    /// Create a stack whose only state is `initial`.
    pub fn new(initial: GraphicsState) -> Self {
        Self::with_params(initial, StackParams::default())
    }

    pub fn with_params(initial: GraphicsState, params: StackParams) -> Self {
        Self {
            current: initial.copy(),
            initial,
            saved: Vec::new(),
            params,
        }
    }

    pub fn current(&self) -> &GraphicsState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut GraphicsState {
        &mut self.current
    }

    pub fn initial(&self) -> &GraphicsState {
        &self.initial
    }

    pub fn params(&self) -> &StackParams {
        &self.params
    }

    /// Number of saved snapshots beneath the current state.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn is_balanced(&self) -> bool {
        self.saved.is_empty()
    }

    /// Saves a copy of the current state.
    ///
    /// Fails with `StackOverflow` when a configured `max_depth` would be
    /// exceeded; the stack is left unchanged.
    pub fn push(&mut self) -> Result<()> {
        if let Some(limit) = self.params.max_depth
            && self.saved.len() >= limit
        {
            warn!(limit, "graphics state save exceeds nesting limit");
            return Err(PdfError::StackOverflow { limit });
        }
        self.saved.push(self.current.copy());
        trace!(depth = self.saved.len(), "graphics state saved");
        Ok(())
    }

    /// Discards the current state and restores the most recent save.
    ///
    /// Fails with `UnbalancedStateStack` when nothing was saved. With
    /// `reset_on_underflow` the current state is first reset to the initial
    /// state, so the caller can carry on with the stream.
    pub fn pop(&mut self) -> Result<()> {
        match self.saved.pop() {
            Some(state) => {
                self.current = state;
                trace!(depth = self.saved.len(), "graphics state restored");
                Ok(())
            }
            None => {
                warn!(
                    reset = self.params.reset_on_underflow,
                    "graphics state restore without matching save"
                );
                if self.params.reset_on_underflow {
                    self.current = self.initial.copy();
                }
                Err(PdfError::UnbalancedStateStack)
            }
        }
    }

    /// Drops every save and restarts from the initial state.
    pub fn reset(&mut self) {
        self.saved.clear();
        self.current = self.initial.copy();
    }

    /// End-of-stream check.
    ///
    /// Unbalanced saves are reported as `UnbalancedStateStack`; the stack is
    /// left as is and the caller may ignore the error.
    pub fn finish(&self) -> Result<()> {
        if self.is_balanced() {
            return Ok(());
        }
        warn!(
            depth = self.saved.len(),
            "content stream ended with unbalanced graphics state saves"
        );
        Err(PdfError::UnbalancedStateStack)
    }
}

impl Default for GraphicsStateStack {
    fn default() -> Self {
        Self::new(GraphicsState::new())
    }
}
