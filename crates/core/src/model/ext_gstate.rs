//! Graphics state parameter dictionaries (ExtGState).
//!
//! An already-resolved `gs` operand. Looking the dictionary up in the page
//! resources is the caller's job; this type only carries the entries that
//! were present.

use super::gstate::GraphicsState;
use super::state::{DashPattern, RenderingIntent};

/// Entries of a graphics state parameter dictionary (PDF 32000-1, table 58).
///
/// `None` means the entry was absent and leaves the state untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtGState {
    /// LW
    pub line_width: Option<f64>,
    /// LC
    pub line_cap: Option<i32>,
    /// LJ
    pub line_join: Option<i32>,
    /// ML
    pub miter_limit: Option<f64>,
    /// D
    pub dash_pattern: Option<DashPattern>,
    /// RI
    pub rendering_intent: Option<RenderingIntent>,
    /// OP
    pub stroke_overprint: Option<bool>,
    /// op
    pub non_stroke_overprint: Option<bool>,
    /// OPM
    pub overprint_mode: Option<i32>,
    /// Font: resource name and size
    pub font: Option<(String, f64)>,
    /// FL
    pub flatness: Option<f64>,
    /// SM
    pub smoothness: Option<f64>,
    /// SA
    pub stroke_adjustment: Option<bool>,
    /// CA
    pub stroke_alpha: Option<f64>,
    /// ca
    pub non_stroke_alpha: Option<f64>,
    /// AIS
    pub alpha_source: Option<bool>,
    /// TK
    pub text_knockout: Option<bool>,
}

impl ExtGState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies every present entry into `gs`.
    ///
    /// The state keeps one overprint flag. OP sets it; op is only consulted
    /// when OP is absent, matching the rule that OP also governs
    /// non-stroking operations unless op overrides it.
    pub fn apply_to(&self, gs: &mut GraphicsState) {
        if let Some(v) = self.line_width {
            gs.set_line_width(v);
        }
        if let Some(v) = self.line_cap {
            gs.set_line_cap(v);
        }
        if let Some(v) = self.line_join {
            gs.set_line_join(v);
        }
        if let Some(v) = self.miter_limit {
            gs.set_miter_limit(v);
        }
        if let Some(dash) = &self.dash_pattern {
            gs.set_dash_pattern(Some(dash.copy()));
        }
        if let Some(intent) = &self.rendering_intent {
            gs.set_rendering_intent(Some(intent.clone()));
        }
        if let Some(v) = self.stroke_overprint.or(self.non_stroke_overprint) {
            gs.set_overprint(v);
        }
        if let Some(v) = self.overprint_mode {
            gs.set_overprint_mode(v);
        }
        if let Some((name, size)) = &self.font {
            let ts = gs.text_state_mut();
            ts.font_name = Some(name.clone());
            ts.font_size = *size;
        }
        if let Some(v) = self.flatness {
            gs.set_flatness(v);
        }
        if let Some(v) = self.smoothness {
            gs.set_smoothness(v);
        }
        if let Some(v) = self.stroke_adjustment {
            gs.set_stroke_adjustment(v);
        }
        if let Some(v) = self.stroke_alpha {
            gs.set_stroke_alpha(v);
        }
        if let Some(v) = self.non_stroke_alpha {
            gs.set_non_stroke_alpha(v);
        }
        if let Some(v) = self.alpha_source {
            gs.set_alpha_source(v);
        }
        if let Some(v) = self.text_knockout {
            gs.text_state_mut().knockout = v;
        }
    }
}
