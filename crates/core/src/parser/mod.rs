//! Numeric operand parsing.
//!
//! - `number`: numeric literal classifier (PdfNumber)

pub mod number;

pub use number::{PdfNumber, parse_number, parse_real};
