use std::fs;

use skillfall_engine::SkillWidget;

fn fixture_widget() -> SkillWidget {
    let json = fs::read_to_string("tests/fixtures/skills.json").expect("fixture should exist");
    SkillWidget::from_json(&json, Some(r#"{"card_width": 100, "card_height": 50}"#.to_string()))
        .expect("fixture widget should build")
}

#[test]
fn widget_smoke_activate_fall_and_render() {
    let widget = fixture_widget();
    assert_eq!(widget.lifecycle(), "dormant");
    assert!(widget.set_container_size(800.0, 400.0));

    assert!(!widget.report_visibility(0.05));
    assert!(widget.report_visibility(0.3));
    assert!(widget.is_running());
    assert_eq!(widget.card_count(), 6);

    for _ in 0..120 {
        widget.tick();
    }
    assert_eq!(widget.frame(), 120);

    let views: serde_json::Value = serde_json::from_str(&widget.render_json()).expect("render json");
    let views = views.as_array().expect("array of cards");
    assert_eq!(views.len(), 6);
    for view in views {
        assert_eq!(view["y"], 350.0);
        let x = view["x"].as_f64().unwrap_or(-1.0);
        assert!((0.0..=700.0).contains(&x));
    }
}

#[test]
fn widget_smoke_drag_cycle() {
    let widget = fixture_widget();
    widget.set_container_size(800.0, 400.0);
    widget.report_visibility(1.0);
    for _ in 0..120 {
        widget.tick();
    }

    assert!(widget.begin_drag("rust", 10.0, 360.0, Some(4)));
    assert!(widget.is_dragging());
    assert_eq!(widget.pointer_move(4, -500.0, -500.0), 1);
    widget.tick();

    let views: serde_json::Value = serde_json::from_str(&widget.render_json()).expect("render json");
    let top = views.as_array().and_then(|v| v.last()).expect("held card on top");
    assert_eq!(top["id"], "rust");
    assert_eq!(top["x"], 0.0);
    assert_eq!(top["y"], 0.0);
    assert_eq!(top["held"], true);

    assert_eq!(widget.pointer_up(4), 1);
    assert!(!widget.is_dragging());
    assert_eq!(widget.release_all(), 0);

    widget.enable_perf_metrics(true);
    assert_eq!(widget.tick(), 6);
    assert_eq!(widget.get_perf_stats().cards_held(), 0);
}

#[test]
fn widget_smoke_pause_and_destroy() {
    let widget = SkillWidget::new();
    widget.report_visibility(1.0);
    assert_eq!(widget.card_count(), 18);

    assert!(widget.pause());
    assert_eq!(widget.lifecycle(), "paused");
    assert_eq!(widget.tick(), 0);

    widget.destroy();
    assert_eq!(widget.lifecycle(), "torn_down");
    assert!(!widget.begin_drag("1", 0.0, 0.0, None));
    assert_eq!(widget.tick(), 0);
}

#[test]
fn widget_smoke_drag_without_pointer_id_ends_on_any_pointer_up() {
    let widget = fixture_widget();
    widget.set_container_size(800.0, 400.0);
    widget.report_visibility(1.0);
    for _ in 0..120 {
        widget.tick();
    }

    let views: serde_json::Value = serde_json::from_str(&widget.render_json()).expect("render json");
    let rust = views
        .as_array()
        .and_then(|v| v.iter().find(|view| view["id"] == "rust"))
        .expect("rust card rendered");
    let x = rust["x"].as_f64().expect("x") as f32;

    assert!(widget.begin_drag("rust", x, 350.0, None));
    assert_eq!(widget.pointer_move(1, 290.0, 200.0), 1);
    assert_eq!(widget.pointer_up(1), 1);
    assert!(!widget.is_dragging());

    for _ in 0..10 {
        widget.tick();
    }
    let views: serde_json::Value = serde_json::from_str(&widget.render_json()).expect("render json");
    let rust = views
        .as_array()
        .and_then(|v| v.iter().find(|view| view["id"] == "rust"))
        .expect("rust card rendered");
    assert_eq!(rust["held"], false);
    assert_eq!(rust["x"], 290.0);
    assert!(rust["y"].as_f64().unwrap_or(0.0) > 200.0);
}
