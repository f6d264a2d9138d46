use super::*;

#[test]
fn test_default_header_sits_above_line_chart() {
    let layout = PageLayout::default();
    let frame = layout.line_chart_frame(5);
    assert_eq!(frame, Rect::new(0.0, 50.0, 600.0, 600.0));
    assert_eq!(
        layout.header_baselines(5, frame.top()),
        vec![740.0, 720.0, 700.0, 680.0, 660.0]
    );
}

#[test]
fn test_tall_header_shrinks_line_chart_box() {
    let layout = PageLayout::default();
    let frame = layout.line_chart_frame(12);
    let baselines = layout.header_baselines(12, frame.top());
    assert!(frame.height < 600.0);
    assert!(baselines[0] <= layout.page_height - layout.top_margin);
    assert_eq!(*baselines.last().unwrap(), frame.top() + layout.header_gap);
}

#[test]
fn test_fit_preserves_aspect_and_stays_inside() {
    let frame = Rect::new(0.0, 50.0, 600.0, 600.0);
    // Tall raster: six stacked panels.
    let tall = frame.fit(1400, 1800, VerticalAnchor::Top);
    assert!(frame.contains(&tall));
    assert!((tall.width / tall.height - 1400.0 / 1800.0).abs() < 1e-4);
    assert!((tall.top() - frame.top()).abs() < 1e-3);
    assert!((tall.height - 600.0).abs() < 1e-3);
    // Wide raster: two panels.
    let wide = frame.fit(1400, 600, VerticalAnchor::Top);
    assert!(frame.contains(&wide));
    assert!((wide.width - 600.0).abs() < 1e-3);
    assert!((wide.top() - frame.top()).abs() < 1e-3);
}

#[test]
fn test_fit_centres_horizontally() {
    let frame = Rect::new(0.0, 0.0, 200.0, 100.0);
    let placed = frame.fit(100, 100, VerticalAnchor::Center);
    assert_eq!(placed, Rect::new(50.0, 0.0, 100.0, 100.0));
}

#[test]
fn test_fit_of_empty_raster_is_empty() {
    let frame = Rect::new(10.0, 10.0, 100.0, 100.0);
    let placed = frame.fit(0, 10, VerticalAnchor::Top);
    assert_eq!(placed.width, 0.0);
    assert_eq!(placed.height, 0.0);
}

#[test]
fn test_bar_frame_on_landscape_page() {
    let layout = PageLayout::default();
    assert_eq!(layout.landscape(), (792.0, 612.0));
    let frame = layout.bar_chart_frame();
    assert_eq!(frame.y, 81.0);
    assert_eq!(frame.height, 450.0);
    assert!(frame.x >= 0.0);
    assert!(frame.right() <= 792.0);
}
