use anyhow::Context;
use log::info;
use wired_core::*;
use wired_slider::*;

const PROPS: &str = r#"{ "value": 20, "min": 0, "max": 100, "knobradius": 10 }"#;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let props: SliderProps = serde_json::from_str(PROPS).context("parsing slider props")?;

    let mut registry = WidgetRegistry::with_defaults();
    let key = registry.create("wired-slider", &props)?;
    let slider = registry
        .get_mut(key)
        .context("slider vanished right after creation")?;

    slider.on_change(|v| info!("change: value = {v:.2}"));
    slider.set_attribute("max", Some("200"))?;
    slider.measure(&Size::new(300.0, 40.0));

    // Press the knob, drag 120px right, release.
    let knob_x = slider.knob_radius() + slider.knob_offset();
    let mut recognizer = TrackRecognizer::new();
    let script = [
        PointerEvent::mouse(PointerEventKind::Down(PointerButton::Primary), knob_x, 20.0),
        PointerEvent::mouse(PointerEventKind::Move, knob_x + 40.0, 21.0),
        PointerEvent::mouse(PointerEventKind::Move, knob_x + 120.0, 23.0),
        PointerEvent::mouse(PointerEventKind::Up(PointerButton::Primary), knob_x + 120.0, 23.0),
    ];

    let mut scope = DrawScope::new();
    for pe in &script {
        if matches!(pe.event, PointerEventKind::Down(_)) && !slider.hits_knob(pe.position) {
            info!("press at {:?} missed the knob", pe.position);
            continue;
        }
        for g in recognizer.handle_pointer(pe) {
            slider.handle_gesture(g);
        }
        if slider.take_repaint() {
            scope.clear();
            slider.paint(&mut scope);
            info!("{:?} -> {}", pe.event, scope.describe());
        }
    }

    let state = slider.visual_state();
    info!(
        "final value {:.2} ({:.0}%), knob color {:?}",
        slider.value(),
        slider.pct() * 100.0,
        slider.style().knob_color(state)
    );
    Ok(())
}
