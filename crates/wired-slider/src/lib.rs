//! # Sketch-style slider
//!
//! A draggable knob on a horizontal bar, mapping pointer travel to a value in
//! `[min, max]`. The crate holds the parts with real rules and leaves the rest
//! to collaborators:
//!
//! - [`track`] — pure value/percentage/pixel math.
//! - [`Slider`] — value state plus the `idle -> dragging -> idle` machine.
//! - [`gestures`] — normalized `down` / `track` / `up` events, and an adapter
//!   from raw pointer events.
//! - [`canvas::DrawScope`] — a recording renderer.
//! - [`props`] / [`registry`] — configuration and explicit widget
//!   registration.
//!
//! ```rust
//! use wired_core::Size;
//! use wired_slider::*;
//!
//! let mut slider = Slider::new();
//! slider.on_layout_measured(Size::new(300.0, 40.0)); // bar is 280px
//! slider.on_change(|v| log::info!("committed {v}"));
//!
//! slider.handle_gesture(GestureEvent::Track(TrackEvent::Start));
//! slider.handle_gesture(GestureEvent::track_move(140.0));
//! slider.handle_gesture(GestureEvent::Track(TrackEvent::End));
//!
//! assert_eq!(slider.value(), 50.0);
//! ```
//!
//! Values are only committed at the end of a drag; listeners never see the
//! intermediate values. Until the host has been measured the slider is inert:
//! gestures are dropped and the knob sits at 0.

pub mod canvas;
pub mod gestures;
pub mod props;
pub mod registry;
pub mod slider;
pub mod track;

pub use canvas::{DrawCommand, DrawScope};
pub use gestures::{GestureEvent, TrackEvent, TrackRecognizer};
pub use props::SliderProps;
pub use registry::{SliderKey, WidgetRegistry};
pub use slider::{DragSession, Slider, SliderStyle};
