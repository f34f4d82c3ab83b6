//! Property tests for the slider's numeric and state-machine invariants.
//!
//! 1. Percentages are clamped into [0, 1]; degenerate ranges pin to 0
//! 2. value -> offset -> value round-trips within one pixel
//! 3. Increasing drag distance never moves the knob backwards
//! 4. One committed notification per drag, carrying the last move's value
//! 5. A disabled slider ignores every gesture

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use wired_core::Size;
use wired_slider::track::{clamp_offset, offset_of, percentage_of, value_of};
use wired_slider::{GestureEvent, Slider, SliderProps, TrackEvent};

// ── Strategies ───────────────────────────────────────────────────────

fn arb_range() -> impl Strategy<Value = (f32, f32)> {
    (-1000.0..1000.0_f32, 1.0..1000.0_f32).prop_map(|(min, span)| (min, min + span))
}

fn arb_gesture() -> impl Strategy<Value = GestureEvent> {
    prop_oneof![
        Just(GestureEvent::Down),
        Just(GestureEvent::Up),
        Just(GestureEvent::Track(TrackEvent::Start)),
        Just(GestureEvent::Track(TrackEvent::End)),
        (-600.0..600.0_f32).prop_map(GestureEvent::track_move),
    ]
}

fn measured(props: SliderProps) -> (Slider, Rc<RefCell<Vec<f32>>>) {
    let mut s = Slider::with_props(props);
    s.on_layout_measured(Size::new(300.0, 40.0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    s.on_change(move |v| sink.borrow_mut().push(v));
    (s, seen)
}

// ── 1. Clamping ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn percentage_is_clamped(value in -1.0e6..1.0e6_f32, min in -1.0e5..1.0e5_f32, span in 1.0e-3..1.0e5_f32) {
        let pct = percentage_of(value, min, min + span);
        prop_assert!((0.0..=1.0).contains(&pct));
    }

    #[test]
    fn degenerate_range_is_zero(value in -1.0e6..1.0e6_f32, min in -1.0e5..1.0e5_f32, back in 0.0..1.0e5_f32) {
        prop_assert_eq!(percentage_of(value, min, min - back), 0.0);
    }
}

// ── 2. Round trip ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn offset_round_trip_within_a_pixel(pct in 0.0..=1.0_f32, bar in 1.0..2000.0_f32, (min, max) in arb_range()) {
        let offset = offset_of(pct, bar);
        let back = percentage_of(value_of(offset, bar, min, max), min, max);
        prop_assert!((back - pct).abs() <= 1.0 / bar + 1e-3, "pct {} -> {}", pct, back);
    }

    #[test]
    fn clamp_offset_stays_on_bar(offset in -1.0e4..1.0e4_f32, bar in 0.0..2000.0_f32) {
        let c = clamp_offset(offset, bar);
        prop_assert!(c >= 0.0 && c <= bar);
    }
}

// ── 3. Drag monotonicity ─────────────────────────────────────────────

proptest! {
    #[test]
    fn knob_never_moves_backwards(value in 0.0..100.0_f32, mut dxs in prop::collection::vec(-500.0..500.0_f32, 1..20)) {
        dxs.sort_by(|a, b| a.total_cmp(b));
        let (mut s, _) = measured(SliderProps { value, ..SliderProps::default() });
        s.handle_gesture(GestureEvent::Track(TrackEvent::Start));
        let mut last = f32::NEG_INFINITY;
        for dx in dxs {
            s.handle_gesture(GestureEvent::track_move(dx));
            let off = s.knob_offset();
            prop_assert!(off >= last);
            prop_assert!((0.0..=280.0).contains(&off));
            last = off;
        }
    }
}

// ── 4. Commit once ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn one_notification_per_drag(value in 0.0..100.0_f32, dxs in prop::collection::vec(-500.0..500.0_f32, 1..20)) {
        let (mut s, seen) = measured(SliderProps { value, ..SliderProps::default() });
        s.handle_gesture(GestureEvent::Track(TrackEvent::Start));
        let start = s.drag_session().map(|d| d.start_offset_px).unwrap_or_default();
        for dx in &dxs {
            s.handle_gesture(GestureEvent::track_move(*dx));
        }
        prop_assert!(seen.borrow().is_empty());
        s.handle_gesture(GestureEvent::Track(TrackEvent::End));

        let last = dxs[dxs.len() - 1];
        let expected = value_of(clamp_offset(start + last, 280.0), 280.0, 0.0, 100.0);
        let got = seen.borrow().clone();
        prop_assert_eq!(got, vec![expected]);
        prop_assert_eq!(s.value(), expected);
    }
}

// ── 5. Disabled suppression ──────────────────────────────────────────

proptest! {
    #[test]
    fn disabled_slider_ignores_gestures(value in -50.0..150.0_f32, events in prop::collection::vec(arb_gesture(), 0..30)) {
        let (mut s, seen) = measured(SliderProps { value, disabled: true, ..SliderProps::default() });
        for e in events {
            s.handle_gesture(e);
        }
        prop_assert!(seen.borrow().is_empty());
        prop_assert_eq!(s.value(), value);
        prop_assert!(!s.is_dragging());
    }
}
