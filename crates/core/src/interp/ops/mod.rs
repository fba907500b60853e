//! Graphics state operator handlers.
//!
//! Operators are grouped by category:
//! - `graphics_state` - State stack and transforms (q, Q, cm, w, J, j, M, d, ri, i, gs)
//! - `text` - Text state parameters (Tc, Tw, Tz, TL, Tf, Tr, Ts)
//! - `path` - Clipping path operators (W, W\*)
//!
//! Handlers take operands that the dispatcher has already validated and
//! converted; mapping operator names to handlers happens outside this crate.

mod graphics_state;
mod path;
mod text;

pub use graphics_state::matrix_from_operands;

// Note: each file defines an impl block for GraphicsStateStack,
// so the handlers are available on the type without re-exports.
