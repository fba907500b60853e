//! Clipping path operators.
//!
//! Handles: W, W*
//!
//! The dispatcher collects the path and calls these when the painting
//! operator that ends it runs. Points arrive in user space and are mapped
//! to device space through the CTM before intersecting the clip.

use crate::interp::stack::GraphicsStateStack;
use crate::model::{ClipPath, FillRule};
use crate::utils::Point;

#[allow(non_snake_case)]
impl GraphicsStateStack {
    /// Intersects the clip with `path` using the nonzero winding rule.
    ///
    /// PDF operator: `W`
    pub fn do_W(&mut self, path: Vec<Point>) {
        self.clip_with(path, FillRule::NonZero);
    }

    /// Intersects the clip with `path` using the even-odd rule.
    ///
    /// PDF operator: `W*`
    pub fn do_W_star(&mut self, path: Vec<Point>) {
        self.clip_with(path, FillRule::EvenOdd);
    }

    fn clip_with(&mut self, path: Vec<Point>, rule: FillRule) {
        let gs = self.current_mut();
        let device_path = ClipPath::new(path, rule).transform(gs.ctm());
        gs.intersect_clip(device_path);
    }
}
