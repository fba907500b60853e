//! PDF Graphics State.
//!
//! The full set of device-independent and device-dependent parameters in
//! effect at a point in a content stream (PDF 32000-1, 8.4).
//!
//! Saving a state goes through [`GraphicsState::copy`], an explicit
//! field-by-field deep copy: the matrix, text state, dash pattern and clip of
//! the copy are never shared with the original. Every owned sub-object is
//! plain data, so the copy cannot fail.

use super::clip::{ClipPath, ClipRegion};
use super::state::{DashPattern, RenderingIntent, TextState};
use crate::utils::{MATRIX_IDENTITY, Matrix, Rect, apply_matrix_rect};

/// PDF Graphics State - rendering parameters tracked while a content stream executes.
///
/// Setters store values as given. Negative line widths or alpha constants
/// outside [0, 1] are accepted; rejecting them is up to the imaging model.
#[derive(Debug, PartialEq)]
pub struct GraphicsState {
    ctm: Matrix,
    text_state: TextState,
    line_width: f64,
    line_cap: i32,
    line_join: i32,
    miter_limit: f64,
    dash_pattern: Option<DashPattern>,
    rendering_intent: Option<RenderingIntent>,
    stroke_adjustment: bool,
    stroke_alpha: f64,
    non_stroke_alpha: f64,
    alpha_source: bool,
    overprint: bool,
    overprint_mode: i32,
    flatness: f64,
    smoothness: f64,
    /// `None` is unbounded: nothing beyond the page boundary restricts painting.
    clip: Option<ClipRegion>,
}

impl GraphicsState {
    /// Create new graphics state with the imaging model defaults.
    pub fn new() -> Self {
        Self {
            ctm: MATRIX_IDENTITY,
            text_state: TextState::new(),
            line_width: 1.0,
            line_cap: 0,
            line_join: 0,
            miter_limit: 10.0,
            dash_pattern: None,
            rendering_intent: None,
            stroke_adjustment: false,
            stroke_alpha: 1.0,
            non_stroke_alpha: 1.0,
            alpha_source: false,
            overprint: false,
            overprint_mode: 0,
            flatness: 1.0,
            smoothness: 0.0,
            clip: None,
        }
    }

    /// Initial state for a page whose media box is `page`.
    ///
    /// A page whose lower-left corner is not at the origin gets a CTM that
    /// moves that corner to (0, 0). The clip starts as the page rectangle in
    /// the resulting space.
    pub fn with_page(page: Rect) -> Self {
        let mut state = Self::new();
        let (llx, lly, _, _) = page;
        if llx != 0.0 || lly != 0.0 {
            state.ctm = state.ctm.multiply(&Matrix::translating(-llx, -lly));
        }
        state.clip = Some(ClipRegion::from_rect(apply_matrix_rect(&state.ctm, page)));
        state
    }

    /// Create a copy of this graphics state.
    pub fn copy(&self) -> Self {
        Self {
            ctm: self.ctm.copy(),
            text_state: self.text_state.copy(),
            line_width: self.line_width,
            line_cap: self.line_cap,
            line_join: self.line_join,
            miter_limit: self.miter_limit,
            dash_pattern: self.dash_pattern.as_ref().map(DashPattern::copy),
            rendering_intent: self.rendering_intent.clone(),
            stroke_adjustment: self.stroke_adjustment,
            stroke_alpha: self.stroke_alpha,
            non_stroke_alpha: self.non_stroke_alpha,
            alpha_source: self.alpha_source,
            overprint: self.overprint,
            overprint_mode: self.overprint_mode,
            flatness: self.flatness,
            smoothness: self.smoothness,
            clip: self.clip.as_ref().map(ClipRegion::copy),
        }
    }

    /// Concatenates `matrix` onto the CTM (cm operator).
    ///
    /// The new matrix is applied in the coordinate system the CTM already
    /// establishes: CTM' = matrix × CTM.
    pub fn concat_matrix(&mut self, matrix: &Matrix) {
        self.ctm = matrix.multiply(&self.ctm);
    }

    /// Intersects the clip with `path`, given in device space.
    pub fn intersect_clip(&mut self, path: ClipPath) {
        match self.clip.as_mut() {
            Some(region) => region.intersect(path),
            None => self.clip = Some(ClipRegion::from_path(path)),
        }
    }

    // Accessors

    pub fn ctm(&self) -> &Matrix {
        &self.ctm
    }

    pub fn set_ctm(&mut self, value: Matrix) {
        self.ctm = value;
    }

    pub fn text_state(&self) -> &TextState {
        &self.text_state
    }

    pub fn text_state_mut(&mut self) -> &mut TextState {
        &mut self.text_state
    }

    pub fn set_text_state(&mut self, value: TextState) {
        self.text_state = value;
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn set_line_width(&mut self, value: f64) {
        self.line_width = value;
    }

    pub fn line_cap(&self) -> i32 {
        self.line_cap
    }

    pub fn set_line_cap(&mut self, value: i32) {
        self.line_cap = value;
    }

    pub fn line_join(&self) -> i32 {
        self.line_join
    }

    pub fn set_line_join(&mut self, value: i32) {
        self.line_join = value;
    }

    pub fn miter_limit(&self) -> f64 {
        self.miter_limit
    }

    pub fn set_miter_limit(&mut self, value: f64) {
        self.miter_limit = value;
    }

    pub fn dash_pattern(&self) -> Option<&DashPattern> {
        self.dash_pattern.as_ref()
    }

    pub fn dash_pattern_mut(&mut self) -> Option<&mut DashPattern> {
        self.dash_pattern.as_mut()
    }

    /// `None` clears the pattern entirely.
    pub fn set_dash_pattern(&mut self, value: Option<DashPattern>) {
        self.dash_pattern = value;
    }

    pub fn rendering_intent(&self) -> Option<&RenderingIntent> {
        self.rendering_intent.as_ref()
    }

    pub fn set_rendering_intent(&mut self, value: Option<RenderingIntent>) {
        self.rendering_intent = value;
    }

    pub fn stroke_adjustment(&self) -> bool {
        self.stroke_adjustment
    }

    pub fn set_stroke_adjustment(&mut self, value: bool) {
        self.stroke_adjustment = value;
    }

    /// Stroking alpha constant (CA).
    pub fn stroke_alpha(&self) -> f64 {
        self.stroke_alpha
    }

    pub fn set_stroke_alpha(&mut self, value: f64) {
        self.stroke_alpha = value;
    }

    /// Non-stroking alpha constant (ca).
    pub fn non_stroke_alpha(&self) -> f64 {
        self.non_stroke_alpha
    }

    pub fn set_non_stroke_alpha(&mut self, value: f64) {
        self.non_stroke_alpha = value;
    }

    /// Alpha source flag (AIS).
    pub fn alpha_source(&self) -> bool {
        self.alpha_source
    }

    pub fn set_alpha_source(&mut self, value: bool) {
        self.alpha_source = value;
    }

    pub fn overprint(&self) -> bool {
        self.overprint
    }

    pub fn set_overprint(&mut self, value: bool) {
        self.overprint = value;
    }

    pub fn overprint_mode(&self) -> i32 {
        self.overprint_mode
    }

    pub fn set_overprint_mode(&mut self, value: i32) {
        self.overprint_mode = value;
    }

    pub fn flatness(&self) -> f64 {
        self.flatness
    }

    pub fn set_flatness(&mut self, value: f64) {
        self.flatness = value;
    }

    pub fn smoothness(&self) -> f64 {
        self.smoothness
    }

    pub fn set_smoothness(&mut self, value: f64) {
        self.smoothness = value;
    }

    pub fn clip(&self) -> Option<&ClipRegion> {
        self.clip.as_ref()
    }

    pub fn clip_mut(&mut self) -> Option<&mut ClipRegion> {
        self.clip.as_mut()
    }

    /// `None` makes the clip unbounded.
    pub fn set_clip(&mut self, value: Option<ClipRegion>) {
        self.clip = value;
    }
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for GraphicsState {
    fn clone(&self) -> Self {
        self.copy()
    }
}
