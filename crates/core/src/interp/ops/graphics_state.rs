//! Graphics state operators.
//!
//! Handles: q, Q, cm, w, J, j, M, d, ri, i, gs
//!
//! - q/Q: Push/pop graphics state
//! - cm: Concatenate transformation matrix
//! - w, J, j, M, d: Line styling (width, cap, join, miter limit, dash)
//! - ri, i: Rendering intent and flatness
//! - gs: Set parameters from a resolved graphics state dictionary

use crate::error::Result;
use crate::interp::stack::GraphicsStateStack;
use crate::model::{DashPattern, ExtGState, RenderingIntent};
use crate::parser::number::PdfNumber;
use crate::utils::Matrix;

/// Builds a matrix from the six numeric operands of `cm` or `Tm`.
///
/// Returns None unless exactly six operands are given.
pub fn matrix_from_operands(operands: &[PdfNumber]) -> Option<Matrix> {
    let [a, b, c, d, e, f] = operands else {
        return None;
    };
    Some(Matrix::new(
        a.as_f64(),
        b.as_f64(),
        c.as_f64(),
        d.as_f64(),
        e.as_f64(),
        f.as_f64(),
    ))
}

#[allow(non_snake_case)]
impl GraphicsStateStack {
    /// Saves the current graphics state to the stack.
    ///
    /// PDF operator: `q`
    pub fn do_q(&mut self) -> Result<()> {
        self.push()
    }

    /// Restores the graphics state from the stack.
    ///
    /// PDF operator: `Q`
    pub fn do_Q(&mut self) -> Result<()> {
        self.pop()
    }

    /// Concatenates a matrix to the current transformation matrix.
    ///
    /// PDF operator: `cm`
    pub fn do_cm(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        let matrix = Matrix::new(a, b, c, d, e, f);
        self.current_mut().concat_matrix(&matrix);
    }

    /// Sets the line width in user space units.
    ///
    /// PDF operator: `w`
    pub fn do_w(&mut self, linewidth: f64) {
        self.current_mut().set_line_width(linewidth);
    }

    /// Sets the line cap style.
    ///
    /// PDF operator: `J`
    pub fn do_J(&mut self, linecap: i32) {
        self.current_mut().set_line_cap(linecap);
    }

    /// Sets the line join style.
    ///
    /// PDF operator: `j`
    pub fn do_j(&mut self, linejoin: i32) {
        self.current_mut().set_line_join(linejoin);
    }

    /// Sets the miter limit.
    ///
    /// PDF operator: `M`
    pub fn do_M(&mut self, miterlimit: f64) {
        self.current_mut().set_miter_limit(miterlimit);
    }

    /// Sets the line dash pattern.
    ///
    /// PDF operator: `d`
    pub fn do_d(&mut self, dash_array: Vec<f64>, phase: f64) {
        self.current_mut()
            .set_dash_pattern(Some(DashPattern::new(dash_array, phase)));
    }

    /// Sets the color rendering intent.
    ///
    /// PDF operator: `ri`
    pub fn do_ri(&mut self, intent: &str) {
        self.current_mut()
            .set_rendering_intent(Some(RenderingIntent::from_name(intent)));
    }

    /// Sets the flatness tolerance.
    ///
    /// PDF operator: `i`
    pub fn do_i(&mut self, flatness: f64) {
        self.current_mut().set_flatness(flatness);
    }

    /// Sets parameters from a graphics state parameter dictionary.
    ///
    /// PDF operator: `gs`
    pub fn do_gs(&mut self, params: &ExtGState) {
        params.apply_to(self.current_mut());
    }
}
