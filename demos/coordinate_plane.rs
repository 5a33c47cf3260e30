use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_coordplane::{CoordinatePlane, GpuiPlaneView, PlaneViewConfig, Point, StyleConfig, Vector};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(800.0), px(600.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let plane = CoordinatePlane::builder()
                .style(StyleConfig::dark())
                .point(Point::new(2.0, 3.0).with_label("A").with_color("#3b82f6"))
                .point(Point::new(-4.0, 1.0).with_label("B").with_color("#ef4444"))
                .vector(
                    Vector::new(0.0, 0.0, 5.0, 45.0)
                        .with_label("v")
                        .with_color("#10b981")
                        .with_arrow_size(12.0),
                )
                .build();

            let view = GpuiPlaneView::with_config(plane, PlaneViewConfig::default());
            cx.new(|_| view)
        })
        .unwrap();
    });
}
