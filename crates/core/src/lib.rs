//! pdgstate - PDF graphics state engine.
//!
//! Tracks the rendering parameters a content stream mutates (CTM, line
//! style, dash pattern, text state, alpha, overprint, clip) across nested
//! q/Q regions, and classifies the numeric tokens feeding those operators.

pub mod error;
pub mod interp;
pub mod model;
pub mod parser;
pub mod utils;

pub use error::{PdfError, Result};
pub use interp::{GraphicsStateStack, matrix_from_operands};
pub use model::{
    ClipPath, ClipRegion, DashPattern, ExtGState, FillRule, GraphicsState, RenderingIntent,
    StackParams, TextState,
};
pub use parser::{PdfNumber, parse_number};
pub use utils::{MATRIX_IDENTITY, Matrix, Point, Rect};
