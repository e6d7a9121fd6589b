// File: crates/chart-core/tests/charts.rs
// Purpose: Composer behaviour for the line, ratio and category bar charts.

use dashboard_chart_core::scene::Anchor;
use dashboard_chart_core::{
    render_category_bar_chart, render_line_chart, render_ratio_chart, CategoryBarChart, CategoryValue, ChartError,
    ChartLayout, Color, DataPoint, Layer, LineChart, Marker, MarkerId, Node, Point, Primitive, RenderSurface, Series,
};

fn xp_series() -> Series {
    Series::time(vec![
        DataPoint::new(3_000.0, 150.0, "/school/div/c"),
        DataPoint::new(1_000.0, 100.0, "/school/div/a"),
        DataPoint::new(2_000.0, 50.0, "/school/div/b"),
    ])
}

fn rects(scene: &dashboard_chart_core::Scene) -> Vec<(f64, f64, f64, f64)> {
    scene
        .layer(Layer::Series)
        .filter_map(|p| match p {
            Primitive::Rect { x, y, width, height, .. } => Some((*x, *y, *width, *height)),
            _ => None,
        })
        .collect()
}

#[test]
fn line_chart_emits_path_and_one_marker_per_point() {
    let layout = ChartLayout::xp_progress();
    let scene = render_line_chart(&xp_series(), &layout).expect("render");
    assert_eq!(scene.origin, layout.origin());
    assert_eq!(scene.data_primitive_count(), 4);
    assert_eq!(scene.markers.len(), 3);

    let path = scene.layer(Layer::Series).find_map(|p| match p {
        Primitive::Path { points, .. } => Some(points.clone()),
        _ => None,
    });
    let path = path.expect("connecting path");
    let (w, h) = (layout.inner_width(), layout.inner_height());
    assert_eq!(path.len(), 3);
    // ascending x, first at the left edge, last (max cumulative) at the top right
    assert_eq!((path[0].x, path[2].x), (0.0, w));
    assert_eq!(path[2].y, 0.0);
    assert!(path[0].y < h && path[0].y > path[1].y && path[1].y > path[2].y);

    // markers carry the cumulative, normalized point
    let ys: Vec<f64> = scene.markers.iter().map(|m| m.point.y).collect();
    for (got, want) in ys.iter().zip([0.1, 0.15, 0.3]) {
        assert!((got - want).abs() < 1e-12);
    }
    assert_eq!(scene.markers[0].point.label, "/school/div/a");
}

#[test]
fn line_chart_has_six_ticks_per_axis_and_titles() {
    let scene = render_line_chart(&xp_series(), &ChartLayout::xp_progress()).expect("render");
    let texts: Vec<&str> = scene.texts().map(|t| t.content.as_str()).collect();
    assert!(texts.contains(&"Date"));
    assert!(texts.contains(&"XP (kB)"));
    // 6 x labels + 6 y labels + 2 titles
    assert_eq!(texts.len(), 14);
    let y_title = scene.texts().find(|t| t.content == "XP (kB)").expect("y title");
    assert_eq!(y_title.rotate, -90.0);
}

#[test]
fn empty_series_renders_axes_without_data() {
    let scene = render_line_chart(&Series::time(Vec::new()), &ChartLayout::xp_progress()).expect("render");
    assert_eq!(scene.data_primitive_count(), 0);
    assert!(scene.markers.is_empty());
    assert!(scene.layer(Layer::Axis).count() >= 2);
}

#[test]
fn single_point_renders_one_marker_and_no_path() {
    let s = Series::time(vec![DataPoint::new(1_704_067_200_000.0, 420.0, "/x/only")]);
    let scene = render_line_chart(&s, &ChartLayout::xp_progress()).expect("render");
    assert_eq!(scene.data_primitive_count(), 1);
    assert!(scene.layer(Layer::Series).all(|p| matches!(p, Primitive::Circle { .. })));
    assert_eq!(scene.markers.len(), 1);
    assert_eq!(scene.markers[0].center.x, 0.0);
}

#[test]
fn malformed_series_is_rejected_before_rendering() {
    let s = Series::time(vec![DataPoint::new(1.0, 2.0, "a"), DataPoint::new(2.0, f64::NAN, "b")]);
    assert!(matches!(render_line_chart(&s, &ChartLayout::xp_progress()), Err(ChartError::MalformedSeries { .. })));
}

#[test]
fn non_positive_normalization_is_an_invalid_domain() {
    let mut chart = LineChart::new(ChartLayout::xp_progress());
    chart.normalization = 0.0;
    assert!(matches!(chart.render(&xp_series()), Err(ChartError::InvalidDomain { .. })));
}

#[test]
fn ratio_chart_splits_budget_two_to_one() {
    let scene = render_ratio_chart(2.50, 1.25, &ChartLayout::audit_ratio()).expect("render");
    let r = rects(&scene);
    assert_eq!(r.len(), 2);
    let (given, received) = (r[0], r[1]);
    assert!((given.2 - 200.0).abs() < 1e-9);
    assert!((received.2 - 100.0).abs() < 1e-9);
    assert!((given.2 / received.2 - 2.0).abs() < 1e-12);
    // drawn left to right, adjacent, vertically centred in a 150px canvas
    assert_eq!(given.0, 20.0);
    assert!((received.0 - (given.0 + given.2)).abs() < 1e-9);
    assert_eq!(given.1, 45.0);
    assert_eq!(given.3, 60.0);
}

#[test]
fn ratio_chart_labels_in_order() {
    let scene = render_ratio_chart(2.50, 1.25, &ChartLayout::audit_ratio()).expect("render");
    let texts: Vec<&str> = scene.texts().map(|t| t.content.as_str()).collect();
    assert_eq!(texts, ["2.5 MB", "Given", "1.25 MB", "Received"]);
    let given = scene.texts().find(|t| t.content == "Given").expect("label");
    assert_eq!(given.anchor, Anchor::Middle);
    assert!((given.at.x - 120.0).abs() < 1e-9);
}

#[test]
fn ratio_chart_rejects_degenerate_or_bad_magnitudes() {
    let layout = ChartLayout::audit_ratio();
    assert!(matches!(render_ratio_chart(0.0, 0.0, &layout), Err(ChartError::InvalidDomain { .. })));
    assert!(matches!(render_ratio_chart(-1.0, 2.0, &layout), Err(ChartError::MalformedSeries { index: 0, .. })));
    assert!(matches!(render_ratio_chart(1.0, f64::NAN, &layout), Err(ChartError::MalformedSeries { index: 1, .. })));
    // one side empty is still a valid split
    let scene = render_ratio_chart(0.0, 3.0, &layout).expect("render");
    assert!((rects(&scene)[1].2 - 300.0).abs() < 1e-9);
}

#[test]
fn category_bars_aggregate_and_scale_to_the_maximum() {
    let layout = ChartLayout::project_bars();
    let values = vec![
        CategoryValue::new("B", 1_000.0),
        CategoryValue::new("A", 2_000.0),
        CategoryValue::new("B", 3_000.0),
        CategoryValue::new("C", 1_000.0),
    ];
    let scene = render_category_bar_chart(&values, &layout).expect("render");
    let r = rects(&scene);
    assert_eq!(r.len(), 3);
    let h = layout.inner_height();
    // sorted A, B, C; B (4 kB) is the tallest
    let heights: Vec<f64> = r.iter().map(|r| r.3).collect();
    assert!((heights[1] - h).abs() < 1e-9);
    assert!((heights[0] - h / 2.0).abs() < 1e-9);
    assert!((heights[2] - h / 4.0).abs() < 1e-9);
    // bars stand on the x axis
    for rect in &r {
        assert!((rect.1 + rect.3 - h).abs() < 1e-9);
    }
    assert!(r[0].0 < r[1].0 && r[1].0 < r[2].0);
}

#[test]
fn category_bars_shuffled_input_gives_the_same_scene() {
    let layout = ChartLayout::project_bars();
    let mut values: Vec<CategoryValue> =
        (0..30).map(|i| CategoryValue::new(format!("p{}", i % 4), 0.1 * i as f64 + 1.0)).collect();
    let a = render_category_bar_chart(&values, &layout).expect("render");
    values.reverse();
    values.rotate_left(7);
    let b = render_category_bar_chart(&values, &layout).expect("render");
    assert_eq!(a, b);
}

#[test]
fn many_categories_rotate_their_labels() {
    let layout = ChartLayout::project_bars();
    let values: Vec<CategoryValue> = (0..12).map(|i| CategoryValue::new(format!("project-{i:02}"), 1000.0)).collect();
    let scene = render_category_bar_chart(&values, &layout).expect("render");
    let rotated = scene.texts().filter(|t| t.content.starts_with("project-")).all(|t| t.rotate == -45.0);
    assert!(rotated);

    let few = render_category_bar_chart(&values[..3], &layout).expect("render");
    assert!(few.texts().filter(|t| t.content.starts_with("project-")).all(|t| t.rotate == 0.0));
}

#[test]
fn category_chart_tolerates_empty_input() {
    let scene = render_category_bar_chart(&[], &ChartLayout::project_bars()).expect("render");
    assert_eq!(scene.data_primitive_count(), 0);
}

#[test]
fn category_chart_rejects_non_finite_values() {
    let values = vec![CategoryValue::new("A", 1.0), CategoryValue::new("B", f64::INFINITY)];
    match CategoryBarChart::new(ChartLayout::project_bars()).render(&values) {
        Err(ChartError::MalformedSeries { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected malformed series, got {other:?}"),
    }
}

#[test]
fn overflowing_cumulative_total_is_an_invalid_domain() {
    let s = Series::numeric(vec![DataPoint::new(1.0, 1e308, "a"), DataPoint::new(2.0, 1e308, "b")]);
    assert!(matches!(render_line_chart(&s, &ChartLayout::xp_progress()), Err(ChartError::InvalidDomain { .. })));
}

#[test]
fn unbounded_x_span_is_an_invalid_domain() {
    let s = Series::numeric(vec![DataPoint::new(-1e308, 1.0, "a"), DataPoint::new(1e308, 1.0, "b")]);
    assert!(matches!(render_line_chart(&s, &ChartLayout::xp_progress()), Err(ChartError::InvalidDomain { .. })));
}

#[test]
fn overflowing_category_total_is_an_invalid_domain() {
    let mut chart = CategoryBarChart::new(ChartLayout::project_bars());
    chart.normalization = 1.0;
    let values = vec![CategoryValue::new("A", 1e308), CategoryValue::new("A", 1e308)];
    assert!(matches!(chart.render(&values), Err(ChartError::InvalidDomain { .. })));
}

#[test]
fn overflowing_ratio_sum_is_an_invalid_domain() {
    let layout = ChartLayout::audit_ratio();
    assert!(matches!(render_ratio_chart(f64::MAX, f64::MAX, &layout), Err(ChartError::InvalidDomain { .. })));
}

#[test]
fn absurd_tick_counts_are_rejected() {
    let mut line = LineChart::new(ChartLayout::xp_progress());
    line.y_ticks = usize::MAX;
    assert!(matches!(line.render(&xp_series()), Err(ChartError::InvalidDomain { .. })));

    let mut bars = CategoryBarChart::new(ChartLayout::project_bars());
    bars.y_ticks = usize::MAX;
    assert!(matches!(bars.render(&[CategoryValue::new("A", 1.0)]), Err(ChartError::InvalidDomain { .. })));
}

#[derive(Debug, PartialEq)]
enum Call {
    Begin { width: f64, height: f64, origin: Point },
    Primitive(Layer),
    Bind(MarkerId),
    Finish,
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl RenderSurface for Recorder {
    type Error = std::convert::Infallible;

    fn begin(&mut self, width: f64, height: f64, origin: Point, _background: Color) -> Result<(), Self::Error> {
        self.calls.push(Call::Begin { width, height, origin });
        Ok(())
    }

    fn primitive(&mut self, node: &Node) -> Result<(), Self::Error> {
        self.calls.push(Call::Primitive(node.layer));
        Ok(())
    }

    fn bind_marker(&mut self, marker: &Marker) -> Result<(), Self::Error> {
        self.calls.push(Call::Bind(marker.id));
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.calls.push(Call::Finish);
        Ok(())
    }
}

#[test]
fn draw_to_binds_every_marker_after_the_primitives() {
    let layout = ChartLayout::xp_progress();
    let scene = render_line_chart(&xp_series(), &layout).expect("render");
    let mut surface = Recorder::default();
    scene.draw_to(&mut surface).expect("draw");

    let calls = surface.calls;
    let (nodes, markers) = (scene.nodes.len(), scene.markers.len());
    assert_eq!(calls.len(), 1 + nodes + markers + 1);
    assert_eq!(calls[0], Call::Begin { width: layout.width, height: layout.height, origin: layout.origin() });

    let layers: Vec<Layer> = scene.nodes.iter().map(|n| n.layer).collect();
    let drawn: Vec<Layer> = calls[1..=nodes]
        .iter()
        .map(|c| match c {
            Call::Primitive(layer) => *layer,
            other => panic!("expected a primitive, got {other:?}"),
        })
        .collect();
    assert_eq!(drawn, layers);

    let bound: Vec<&Call> = calls[1 + nodes..1 + nodes + markers].iter().collect();
    let expected: Vec<Call> = scene.markers.iter().map(|m| Call::Bind(m.id)).collect();
    assert_eq!(bound, expected.iter().collect::<Vec<_>>());
    assert_eq!(expected, [Call::Bind(MarkerId(0)), Call::Bind(MarkerId(1)), Call::Bind(MarkerId(2))]);
    assert_eq!(calls.last(), Some(&Call::Finish));
}
