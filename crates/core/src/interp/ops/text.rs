//! Text state operators.
//!
//! Handles: Tc, Tw, Tz, TL, Tf, Tr, Ts
//!
//! These set text state parameters only. Text objects, positioning and
//! showing belong to the text layer built on top of this crate.

use crate::interp::stack::GraphicsStateStack;

#[allow(non_snake_case)]
impl GraphicsStateStack {
    /// Tc - Set character spacing.
    pub fn do_Tc(&mut self, charspace: f64) {
        self.current_mut().text_state_mut().char_spacing = charspace;
    }

    /// Tw - Set word spacing.
    pub fn do_Tw(&mut self, wordspace: f64) {
        self.current_mut().text_state_mut().word_spacing = wordspace;
    }

    /// Tz - Set horizontal scaling.
    ///
    /// Scaling is a percentage (100 = normal width).
    pub fn do_Tz(&mut self, scaling: f64) {
        self.current_mut().text_state_mut().horizontal_scaling = scaling;
    }

    /// TL - Set text leading.
    pub fn do_TL(&mut self, leading: f64) {
        self.current_mut().text_state_mut().leading = leading;
    }

    /// Tf - Set font and size.
    ///
    /// `fontid` is the resource name; resolving it to a font is left to the caller.
    pub fn do_Tf(&mut self, fontid: &str, fontsize: f64) {
        let ts = self.current_mut().text_state_mut();
        ts.font_name = Some(fontid.to_string());
        ts.font_size = fontsize;
    }

    /// Tr - Set text rendering mode.
    pub fn do_Tr(&mut self, render: i32) {
        self.current_mut().text_state_mut().render_mode = render;
    }

    /// Ts - Set text rise.
    pub fn do_Ts(&mut self, rise: f64) {
        self.current_mut().text_state_mut().rise = rise;
    }
}
