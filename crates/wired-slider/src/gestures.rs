use smallvec::SmallVec;
use wired_core::*;

/// Pointer travel (px, either axis) before a press turns into a track.
pub const TRACK_THRESHOLD_PX: f32 = 5.0;

/// Normalized input the slider consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Pointer pressed on the knob.
    Down,
    /// Pointer released, whether or not a track happened.
    Up,
    Track(TrackEvent),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackEvent {
    Start,
    /// `dx` is cumulative since `Start`, not a per-event delta.
    Move { dx: f32 },
    End,
}

impl GestureEvent {
    pub fn track_move(dx: f32) -> Self {
        GestureEvent::Track(TrackEvent::Move { dx })
    }
}

pub type Gestures = SmallVec<[GestureEvent; 2]>;

/// Turns raw pointer events into `down` / `track` / `up`.
///
/// Follows a single pointer at a time; presses from other pointers while one
/// is active are ignored.
#[derive(Debug, Default)]
pub struct TrackRecognizer {
    press: Option<(PointerId, Vec2)>,
    tracking: bool,
}

impl TrackRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Gestures {
        let mut out = Gestures::new();
        match event.event {
            PointerEventKind::Down(PointerButton::Primary) => {
                if self.press.is_none() {
                    self.press = Some((event.id, event.position));
                    self.tracking = false;
                    out.push(GestureEvent::Down);
                }
            }
            PointerEventKind::Down(_) => {}
            PointerEventKind::Move => {
                let Some((id, start)) = self.press else {
                    return out;
                };
                if id != event.id {
                    return out;
                }
                let dx = event.position.x - start.x;
                let dy = event.position.y - start.y;
                if !self.tracking && (dx.abs() > TRACK_THRESHOLD_PX || dy.abs() > TRACK_THRESHOLD_PX)
                {
                    self.tracking = true;
                    out.push(GestureEvent::Track(TrackEvent::Start));
                }
                if self.tracking {
                    out.push(GestureEvent::track_move(dx));
                }
            }
            PointerEventKind::Up(PointerButton::Primary) | PointerEventKind::Cancel => {
                if !matches!(self.press, Some((id, _)) if id == event.id) {
                    return out;
                }
                if self.tracking {
                    out.push(GestureEvent::Track(TrackEvent::End));
                }
                out.push(GestureEvent::Up);
                self.reset();
            }
            PointerEventKind::Up(_) => {}
        }
        out
    }

    fn reset(&mut self) {
        self.press = None;
        self.tracking = false;
    }
}
