//! Graphics state data model.
//!
//! This module contains:
//! - `gstate` - the full graphics state (GraphicsState)
//! - `state` - nested aggregates (TextState, DashPattern, RenderingIntent)
//! - `clip` - clipping region (ClipRegion, ClipPath, FillRule)
//! - `ext_gstate` - graphics state parameter dictionaries (ExtGState)
//! - `params` - stack configuration (StackParams)

pub mod clip;
pub mod ext_gstate;
pub mod gstate;
pub mod params;
pub mod state;

// Re-export main types for convenience
pub use clip::{ClipPath, ClipRegion, FillRule};
pub use ext_gstate::ExtGState;
pub use gstate::GraphicsState;
pub use params::StackParams;
pub use state::{DashPattern, RenderingIntent, TextState};
