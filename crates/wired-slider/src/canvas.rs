use smallvec::SmallVec;
use wired_core::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: Vec2, to: Vec2 },
    Ellipse { center: Vec2, w: f32, h: f32 },
    PushTranslate { dx: f32 },
    PopTranslate,
    State(VisualState),
}

/// A `SketchRenderer` that records what it is asked to draw.
///
/// Stands in for the hand-drawn backend in tests and in the demo; a real
/// backend replays the same calls with its own line jitter.
#[derive(Clone, Debug, Default)]
pub struct DrawScope {
    pub commands: SmallVec<[DrawCommand; 8]>,
    pub state: VisualState,
}

impl DrawScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Bar endpoints, in host coordinates.
    pub fn bar(&self) -> Option<(Vec2, Vec2)> {
        self.resolved().into_iter().find_map(|(cmd, t)| match cmd {
            DrawCommand::Line { from, to } => Some((t.apply_to_point(from), t.apply_to_point(to))),
            _ => None,
        })
    }

    /// Knob bounds after applying the translation it was drawn under.
    pub fn knob_rect(&self) -> Option<Rect> {
        self.resolved().into_iter().find_map(|(cmd, t)| match cmd {
            DrawCommand::Ellipse { center, w, h } => {
                Some(t.apply_to_rect(Rect::centered(center, w, h)))
            }
            _ => None,
        })
    }

    /// Pairs each drawing command with the transform active when it was issued.
    fn resolved(&self) -> Vec<(DrawCommand, Transform)> {
        let mut stack = vec![Transform::identity()];
        let mut out = Vec::with_capacity(self.commands.len());
        for cmd in &self.commands {
            let top = stack.last().copied().unwrap_or_default();
            match *cmd {
                DrawCommand::PushTranslate { dx } => {
                    stack.push(top.combine(&Transform::translate(dx, 0.0)));
                }
                DrawCommand::PopTranslate => {
                    if stack.len() > 1 {
                        stack.pop();
                    }
                }
                other => out.push((other, top)),
            }
        }
        out
    }

    /// One-line summary, handy for logs and snapshots.
    pub fn describe(&self) -> String {
        self.commands
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::Line { from, to } => {
                    format!("line {},{} -> {},{}", from.x, from.y, to.x, to.y)
                }
                DrawCommand::Ellipse { center, w, h } => {
                    format!("ellipse {},{} {}x{}", center.x, center.y, w, h)
                }
                DrawCommand::PushTranslate { dx } => format!("translate {dx}"),
                DrawCommand::PopTranslate => "pop".to_string(),
                DrawCommand::State(s) => {
                    let names = s.class_names();
                    if names.is_empty() {
                        "state none".to_string()
                    } else {
                        format!("state {}", names.join(","))
                    }
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl SketchRenderer for DrawScope {
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.commands.push(DrawCommand::Line {
            from: Vec2 { x: x1, y: y1 },
            to: Vec2 { x: x2, y: y2 },
        });
    }

    fn draw_ellipse(&mut self, cx: f32, cy: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Ellipse {
            center: Vec2 { x: cx, y: cy },
            w,
            h,
        });
    }

    fn push_translate_x(&mut self, dx: f32) {
        self.commands.push(DrawCommand::PushTranslate { dx });
    }

    fn pop_translate(&mut self) {
        self.commands.push(DrawCommand::PopTranslate);
    }

    fn apply_visual_state(&mut self, state: VisualState) {
        self.state = state;
        self.commands.push(DrawCommand::State(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Slider;
    use crate::gestures::GestureEvent;

    fn painted(s: &Slider) -> DrawScope {
        let mut scope = DrawScope::new();
        s.paint(&mut scope);
        scope
    }

    #[test]
    fn paints_bar_and_translated_knob() {
        let mut s = Slider::new();
        s.set_value(50.0);
        s.on_layout_measured(Size::new(300.0, 40.0));

        let scope = painted(&s);
        insta::assert_snapshot!(
            scope.describe(),
            @"state hasValue; line 10,20 -> 290,20; translate 140; ellipse 10,20 20x20; pop"
        );
        assert_eq!(
            scope.knob_rect(),
            Some(Rect {
                x: 140.0,
                y: 10.0,
                w: 20.0,
                h: 20.0
            })
        );
        assert_eq!(
            scope.bar(),
            Some((Vec2 { x: 10.0, y: 20.0 }, Vec2 { x: 290.0, y: 20.0 }))
        );
    }

    #[test]
    fn unmeasured_paints_state_only() {
        let s = Slider::new();
        let scope = painted(&s);
        insta::assert_snapshot!(scope.describe(), @"state pending");
        assert!(scope.knob_rect().is_none());
        assert!(scope.state.pending());
    }

    #[test]
    fn knob_follows_drag() {
        let mut s = Slider::new();
        s.on_layout_measured(Size::new(300.0, 40.0));
        s.handle_gesture(GestureEvent::track_move(33.4));

        let scope = painted(&s);
        assert!(scope.state.expanded());
        assert_eq!(scope.knob_rect().map(|r| r.center().x), Some(43.0));
    }
}
