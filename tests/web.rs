#![cfg(target_arch = "wasm32")]

use skillfall_engine::SkillWidget;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn ticker_starts_only_once_active_and_stops_cleanly() {
    let widget = SkillWidget::new();
    widget.start();
    assert_eq!(widget.frame(), 0);

    widget.report_visibility(1.0);
    widget.start();
    widget.start();

    assert!(widget.pause());
    assert!(widget.resume());
    widget.destroy();
    assert_eq!(widget.lifecycle(), "torn_down");
}

#[wasm_bindgen_test]
async fn attached_widget_ticks_then_destroy_drops_the_interval() {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document");
    let container = document.create_element("div").expect("div");
    container
        .set_attribute("style", "width: 600px; height: 300px;")
        .expect("style");
    document.body().expect("body").append_child(&container).expect("append");

    let widget = SkillWidget::new();
    widget.attach(container).expect("attach");
    widget.report_visibility(1.0);
    assert!(widget.is_running());

    gloo_timers::future::TimeoutFuture::new(100).await;
    let ticked = widget.frame();
    assert!(ticked > 0);

    widget.destroy();
    gloo_timers::future::TimeoutFuture::new(100).await;
    assert_eq!(widget.frame(), ticked);
}
