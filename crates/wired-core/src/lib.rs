//! # Shared building blocks for wired widgets
//!
//! Widgets in this workspace never talk to a windowing system, a DOM, or a GPU
//! directly. They see the outside world through a handful of small seams:
//!
//! - [`LayoutSource`] — answers "how big is my host box?" once it is attached.
//! - [`SketchRenderer`] — the hand-drawn renderer. Widgets only ask for lines,
//!   ellipses, a horizontal translation for a drawn group, and hand over their
//!   [`VisualState`].
//! - [`PointerEvent`] — raw pointer input, before gesture recognition.
//!
//! Everything else here is plain data: [`Vec2`], [`Size`], [`Rect`],
//! [`Transform`], [`Color`].

pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render_api;
pub mod tests;
pub mod visual;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use render_api::*;
pub use visual::*;

use std::rc::Rc;

pub type CallbackF32 = Rc<dyn Fn(f32)>;
