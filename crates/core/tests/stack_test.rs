//! Tests for GraphicsStateStack save/restore behaviour.

use pdgstate_core::{
    DashPattern, ExtGState, GraphicsState, GraphicsStateStack, Matrix, PdfError, StackParams,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

#[test]
fn test_push_pop_balance_for_any_depth() {
    init_tracing();
    for n in 0..12 {
        let mut stack = GraphicsStateStack::default();
        stack.do_w(3.0);
        stack.do_cm(1.0, 0.0, 0.0, 1.0, 5.0, 5.0);
        let before = stack.current().copy();

        for i in 0..n {
            stack.push().unwrap();
            stack.do_w(i as f64 + 10.0);
            stack.do_d(vec![i as f64], 0.0);
            stack.do_cm(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
        }
        assert_eq!(stack.depth(), n);
        for _ in 0..n {
            stack.pop().unwrap();
        }

        assert_eq!(stack.depth(), 0);
        assert_eq!(*stack.current(), before);
        assert!(stack.finish().is_ok());
        assert_eq!(stack.pop(), Err(PdfError::UnbalancedStateStack));
    }
}

#[test]
fn test_saved_snapshot_is_isolated_from_current() {
    let mut stack = GraphicsStateStack::default();
    stack.do_d(vec![4.0, 2.0], 0.0);
    stack.do_Tf("F1", 10.0);
    stack.do_q().unwrap();

    // mutate the sub-objects in place
    if let Some(dash) = stack.current_mut().dash_pattern_mut() {
        dash.array.push(1.0);
    }
    stack.current_mut().text_state_mut().font_size = 99.0;
    stack
        .current_mut()
        .set_ctm(Matrix::translating(50.0, 50.0));

    stack.do_Q().unwrap();
    let gs = stack.current();
    assert_eq!(gs.dash_pattern(), Some(&DashPattern::new(vec![4.0, 2.0], 0.0)));
    assert_eq!(gs.text_state().font_size, 10.0);
    assert!(gs.ctm().is_identity());
}

#[test]
fn test_extra_restore_recovers_to_initial() {
    init_tracing();
    let page = GraphicsState::with_page((0.0, 0.0, 612.0, 792.0));
    let mut stack = GraphicsStateStack::new(page);
    stack.do_q().unwrap();
    stack.do_w(5.0);
    stack.do_Q().unwrap();
    stack.do_w(7.0);

    assert_eq!(stack.do_Q(), Err(PdfError::UnbalancedStateStack));
    assert_eq!(stack.current(), stack.initial());
    assert_eq!(stack.current().line_width(), 1.0);
}

#[test]
fn test_nesting_limit() {
    let mut stack =
        GraphicsStateStack::with_params(GraphicsState::new(), StackParams::new(Some(28), true));
    for _ in 0..28 {
        stack.do_q().unwrap();
    }
    assert_eq!(stack.do_q(), Err(PdfError::StackOverflow { limit: 28 }));
    assert_eq!(stack.depth(), 28);
}

#[test]
fn test_unbalanced_end_of_stream_is_reported() {
    init_tracing();
    let mut stack = GraphicsStateStack::default();
    stack.do_q().unwrap();
    stack.do_q().unwrap();
    stack.do_Q().unwrap();
    assert_eq!(stack.finish(), Err(PdfError::UnbalancedStateStack));
    // non-fatal: the stack is still usable
    stack.do_Q().unwrap();
    assert!(stack.finish().is_ok());
}

#[test]
fn test_gs_inside_save_region() {
    let mut stack = GraphicsStateStack::default();
    stack.do_q().unwrap();
    stack.do_gs(&ExtGState {
        stroke_alpha: Some(0.3),
        non_stroke_alpha: Some(0.6),
        overprint_mode: Some(1),
        stroke_adjustment: Some(true),
        dash_pattern: Some(DashPattern::solid()),
        ..ExtGState::default()
    });
    let gs = stack.current();
    assert_eq!(gs.stroke_alpha(), 0.3);
    assert_eq!(gs.non_stroke_alpha(), 0.6);
    assert_eq!(gs.overprint_mode(), 1);
    assert!(gs.stroke_adjustment());
    assert!(gs.dash_pattern().unwrap().is_solid());

    stack.do_Q().unwrap();
    let gs = stack.current();
    assert_eq!(gs.stroke_alpha(), 1.0);
    assert!(gs.dash_pattern().is_none());
}
