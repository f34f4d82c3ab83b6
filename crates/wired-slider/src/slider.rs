use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use wired_core::*;

use crate::gestures::{GestureEvent, TrackEvent};
use crate::track::{
    DEFAULT_KNOB_RADIUS, bar_width_for, clamp_offset, offset_of, percentage_of, value_of,
};

/// Colors the renderer should use for each visual state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    pub bar: Color,
    pub knob_zero: Color,
    pub knob: Color,
    pub disabled_opacity: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            bar: Color::BLACK,
            knob_zero: Color::GRAY,
            knob: Color::from_hex("#3367D6"),
            disabled_opacity: 0.45,
        }
    }
}

impl SliderStyle {
    pub fn knob_color(&self, state: VisualState) -> Color {
        let c = if state.has_value() {
            self.knob
        } else {
            self.knob_zero
        };
        self.faded(c, state)
    }

    pub fn bar_color(&self, state: VisualState) -> Color {
        self.faded(self.bar, state)
    }

    fn faded(&self, c: Color, state: VisualState) -> Color {
        if state.pending() {
            c.with_alpha(0)
        } else if state.disabled() {
            c.with_opacity(self.disabled_opacity)
        } else {
            c
        }
    }
}

/// Bookkeeping for one `start .. end` drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Knob offset (px) when the drag started.
    pub start_offset_px: f32,
    /// Legal relative travel so the absolute offset stays in `[0, bar_width]`.
    pub min_offset_px: f32,
    pub max_offset_px: f32,
    /// Uncommitted value under the knob.
    pub intermediate_value: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Layout {
    host: Size,
    bar_width: f32,
}

/// A continuous-value slider: value state, drag state machine and derived
/// knob geometry.
///
/// The slider never draws by itself. Every change that affects the picture
/// raises a repaint request (see [`Slider::take_repaint`]); the host then calls
/// [`Slider::paint`] with its renderer.
pub struct Slider {
    value: f32,
    min: f32,
    max: f32,
    knob_radius: f32,
    disabled: bool,

    layout: Option<Layout>,
    pct: f32,
    knob_offset_px: f32,
    visual: VisualState,
    drag: Option<DragSession>,

    style: SliderStyle,
    listeners: Vec<CallbackF32>,
    repaint: bool,
    focus_requested: bool,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("knob_radius", &self.knob_radius)
            .field("disabled", &self.disabled)
            .field("pct", &self.pct)
            .field("knob_offset_px", &self.knob_offset_px)
            .field("visual", &self.visual)
            .field("drag", &self.drag)
            .finish()
    }
}

impl Slider {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 100.0,
            knob_radius: DEFAULT_KNOB_RADIUS,
            disabled: false,
            layout: None,
            pct: 0.0,
            knob_offset_px: 0.0,
            visual: VisualState::PENDING,
            drag: None,
            style: SliderStyle::default(),
            listeners: Vec::new(),
            repaint: false,
            focus_requested: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }
    pub fn min(&self) -> f32 {
        self.min
    }
    pub fn max(&self) -> f32 {
        self.max
    }
    pub fn knob_radius(&self) -> f32 {
        self.knob_radius
    }
    pub fn disabled(&self) -> bool {
        self.disabled
    }
    /// Cached normalized position of the committed value.
    pub fn pct(&self) -> f32 {
        self.pct
    }
    /// Horizontal knob translation in whole pixels.
    pub fn knob_offset(&self) -> f32 {
        self.knob_offset_px
    }
    pub fn visual_state(&self) -> VisualState {
        self.visual
    }
    pub fn bar_width(&self) -> Option<f32> {
        self.layout.map(|l| l.bar_width)
    }
    pub fn is_measured(&self) -> bool {
        self.layout.is_some()
    }
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }
    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
        self.repaint = true;
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.refresh();
    }

    pub fn set_min(&mut self, min: f32) {
        self.min = min;
        self.refresh();
    }

    pub fn set_max(&mut self, max: f32) {
        self.max = max;
        self.refresh();
    }

    /// Non-positive or non-finite radii fall back to the default.
    pub fn set_knob_radius(&mut self, radius: f32) {
        self.knob_radius = if radius.is_finite() && radius > 0.0 {
            radius
        } else {
            DEFAULT_KNOB_RADIUS
        };
        if let Some(layout) = self.layout {
            self.apply_layout(layout.host);
        }
        self.refresh();
    }

    /// Disabling mid-drag drops the session without committing.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.visual.set(VisualState::DISABLED, disabled);
        if disabled && self.drag.take().is_some() {
            debug!("slider disabled mid-drag; discarding session");
            self.visual.remove(VisualState::EXPANDED);
        }
        self.repaint = true;
        self.refresh();
    }

    /// Registers a listener for committed values. Fires once per finished drag.
    pub fn on_change(&mut self, f: impl Fn(f32) + 'static) {
        self.listeners.push(std::rc::Rc::new(f));
    }

    /// The host box has been measured. Computes the bar width and makes the
    /// slider interactive.
    pub fn on_layout_measured(&mut self, size: Size) {
        self.apply_layout(size);
        self.visual.remove(VisualState::PENDING);
        self.repaint = true;
        self.refresh();
    }

    /// Reads the host size from `source`; does nothing while it is unattached.
    pub fn measure(&mut self, source: &dyn LayoutSource) -> bool {
        match source.measured_size() {
            Some(size) => {
                self.on_layout_measured(size);
                true
            }
            None => false,
        }
    }

    fn apply_layout(&mut self, host: Size) {
        let bar_width = bar_width_for(host.width, self.knob_radius);
        debug!(
            "slider layout: host {}x{}, bar width {}",
            host.width, host.height, bar_width
        );
        self.layout = Some(Layout { host, bar_width });
        if let Some(session) = self.drag.as_mut() {
            session.max_offset_px = bar_width - session.start_offset_px;
        }
    }

    /// Re-derives pct, knob offset and `HAS_VALUE`. Skipped during a drag; the
    /// commit at `end` re-derives.
    fn refresh(&mut self) {
        if self.drag.is_some() {
            return;
        }
        let (pct, offset) = match self.layout {
            Some(l) => {
                let pct = percentage_of(self.value, self.min, self.max);
                (pct, offset_of(pct, l.bar_width))
            }
            None => (0.0, 0.0),
        };
        self.pct = pct;
        self.knob_offset_px = offset;
        self.visual.set(VisualState::HAS_VALUE, pct > 0.0);
        self.repaint = true;
    }

    /// Feeds one normalized gesture into the state machine.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        if self.disabled {
            return;
        }
        let Some(layout) = self.layout else {
            warn!("slider gesture {event:?} before layout; ignored");
            return;
        };
        match event {
            GestureEvent::Down => {
                self.set_expanded(true);
                self.focus_requested = true;
            }
            GestureEvent::Up => self.set_expanded(false),
            GestureEvent::Track(TrackEvent::Start) => self.track_start(layout.bar_width),
            GestureEvent::Track(TrackEvent::Move { dx }) => self.track_move(layout.bar_width, dx),
            GestureEvent::Track(TrackEvent::End) => self.track_end(),
        }
    }

    fn track_start(&mut self, bar_width: f32) {
        let start = percentage_of(self.value, self.min, self.max) * bar_width;
        let session = DragSession {
            start_offset_px: start,
            min_offset_px: -start,
            max_offset_px: bar_width - start,
            intermediate_value: self.value,
        };
        debug!("slider drag start at {start}px (value {})", self.value);
        self.drag = Some(session);
        self.set_expanded(true);
    }

    fn track_move(&mut self, bar_width: f32, dx: f32) {
        if self.drag.is_none() {
            self.track_start(bar_width);
        }
        let dx = if dx.is_finite() { dx } else { 0.0 };
        let (min, max) = (self.min, self.max);
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        let offset = clamp_offset(session.start_offset_px + dx, bar_width);
        let travel = offset - session.start_offset_px;
        debug_assert!(travel >= session.min_offset_px && travel <= session.max_offset_px);
        session.intermediate_value = value_of(offset, bar_width, min, max);
        trace!(
            "slider drag dx {dx} -> offset {offset}px, value {}",
            session.intermediate_value
        );
        self.knob_offset_px = offset.round();
        self.repaint = true;
    }

    fn track_end(&mut self) {
        let Some(session) = self.drag.take() else {
            debug!("slider track end without start; ignored");
            return;
        };
        self.set_expanded(false);
        self.value = session.intermediate_value;
        self.refresh();
        debug!("slider committed value {}", self.value);
        for listener in &self.listeners {
            listener(self.value);
        }
    }

    fn set_expanded(&mut self, expanded: bool) {
        if self.visual.expanded() != expanded {
            self.visual.set(VisualState::EXPANDED, expanded);
            self.repaint = true;
        }
    }

    /// Knob bounds in host coordinates, `None` until measured.
    pub fn knob_rect(&self) -> Option<Rect> {
        let layout = self.layout?;
        let d = self.knob_radius * 2.0;
        let center = Vec2 {
            x: self.knob_radius + self.knob_offset_px,
            y: layout.host.height / 2.0,
        };
        Some(Rect::centered(center, d, d))
    }

    /// Whether a press at `p` lands on the knob; only knob presses start gestures.
    pub fn hits_knob(&self, p: Vec2) -> bool {
        self.knob_rect().is_some_and(|r| r.contains(p))
    }

    /// Returns whether a repaint was requested since the last call.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint)
    }

    /// Returns whether a knob press asked for focus since the last call.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Draws the bar and the (translated) knob. Unmeasured sliders draw nothing.
    pub fn paint(&self, r: &mut dyn SketchRenderer) {
        r.apply_visual_state(self.visual);
        let Some(layout) = self.layout else {
            return;
        };
        let radius = self.knob_radius;
        let w = layout.host.width;
        let cy = layout.host.height / 2.0;
        r.draw_line(radius, cy, w - radius, cy);
        r.push_translate_x(self.knob_offset_px);
        r.draw_ellipse(radius, cy, radius * 2.0, radius * 2.0);
        r.pop_translate();
    }
}
