#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#3367D6");
        assert_eq!(c, Color(51, 103, 214, 255));

        let c_alpha = Color::from_hex("#3367D6AA");
        assert_eq!(c_alpha, Color(51, 103, 214, 170));

        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_color_opacity() {
        assert_eq!(Color::BLACK.with_opacity(0.5).3, 128);
        assert_eq!(Color::BLACK.with_opacity(2.0).3, 255);
    }

    #[test]
    fn test_rect_centered() {
        let r = Rect::centered(Vec2 { x: 10.0, y: 20.0 }, 20.0, 20.0);
        assert_eq!(
            r,
            Rect {
                x: 0.0,
                y: 10.0,
                w: 20.0,
                h: 20.0
            }
        );
        assert_eq!(r.center(), Vec2 { x: 10.0, y: 20.0 });
        assert!(r.contains(Vec2 { x: 5.0, y: 25.0 }));
        assert!(!r.contains(Vec2 { x: 25.0, y: 25.0 }));
    }

    #[test]
    fn test_transform_combine() {
        let a = Transform::translate(10.0, 0.0);
        let b = Transform::translate(5.0, 2.0);
        let t = a.combine(&b);
        assert_eq!(
            t.apply_to_point(Vec2 { x: 1.0, y: 1.0 }),
            Vec2 { x: 16.0, y: 3.0 }
        );
        assert_eq!(Transform::identity().apply_to_rect(Rect::default()), Rect::default());
    }

    #[test]
    fn test_visual_state_classes() {
        let s = VisualState::HAS_VALUE | VisualState::DISABLED;
        assert!(s.has_value());
        assert!(!s.expanded());
        assert_eq!(s.class_names().as_slice(), &["hasValue", "disabled"]);
        assert!(VisualState::default().class_names().is_empty());
    }

    #[test]
    fn test_layout_source() {
        let unmeasured: Option<Size> = None;
        assert_eq!(unmeasured.measured_size(), None);
        assert_eq!(
            Size::new(300.0, 40.0).measured_size(),
            Some(Size::new(300.0, 40.0))
        );
    }
}
