use chart_views::model::{
    ChartModel, CrosshairMode, CrosshairOptions, PaneId, PriceRange, SeriesDataItem, SeriesId,
    SeriesOptions, TimePointIndex,
};
use chart_views::renderers::{DisplayList, DrawCommand, PaneRenderer};
use chart_views::views::{CrosshairMarksPaneView, UpdatablePaneView, UpdateType};
use chart_views::{ChartTheme, Color};

fn build_model() -> (ChartModel, PaneId, SeriesId) {
    let mut model = ChartModel::new(ChartTheme::default());
    model.set_time_scale_width(800.0);
    model
        .set_time_scale_points((0..100).map(|i| i * 60).collect())
        .unwrap();

    let pane = model.create_pane(400.0);
    let series = model.create_series(pane, SeriesOptions::default()).unwrap();
    let data: Vec<SeriesDataItem> = (0..100)
        .map(|i| SeriesDataItem {
            time: TimePointIndex(i),
            value: 100.0 + i as f64,
        })
        .collect();
    model.set_series_data(series, data).unwrap();
    model
        .set_series_price_range(series, PriceRange::new(100.0, 199.0))
        .unwrap();
    (model, pane, series)
}

fn point_crosshair_at(model: &mut ChartModel, index: i64) {
    let x = model
        .time_scale()
        .index_to_coordinate(TimePointIndex(index));
    model.set_and_save_current_position(x, 200.0);
}

fn draw_marks(view: &mut CrosshairMarksPaneView, model: &ChartModel, pane: PaneId) -> DisplayList {
    let pane_ref = model.pane(pane).unwrap();
    let renderer = view.renderer(model, pane_ref).unwrap();
    let mut list = DisplayList::new();
    renderer.draw(&mut list);
    list
}

#[test]
fn cleared_crosshair_draws_nothing() {
    let (model, pane, _) = build_model();
    let mut view = CrosshairMarksPaneView::new();

    let list = draw_marks(&mut view, &model, pane);
    assert!(list.is_empty(), "no crosshair position, no marker");
}

#[test]
fn hidden_mode_draws_nothing() {
    let (mut model, pane, _) = build_model();
    model.set_crosshair_options(CrosshairOptions {
        mode: CrosshairMode::Hidden,
        ..CrosshairOptions::default()
    });
    point_crosshair_at(&mut model, 10);

    let mut view = CrosshairMarksPaneView::new();
    let list = draw_marks(&mut view, &model, pane);
    assert!(list.is_empty(), "hidden mode must clear the visible range");
}

#[test]
fn invisible_series_draws_nothing() {
    let (mut model, pane, series) = build_model();
    model
        .set_series_options(
            series,
            SeriesOptions {
                visible: false,
                ..SeriesOptions::default()
            },
        )
        .unwrap();
    point_crosshair_at(&mut model, 10);

    let mut view = CrosshairMarksPaneView::new();
    let list = draw_marks(&mut view, &model, pane);
    assert!(list.is_empty());
}

#[test]
fn missing_datum_draws_nothing() {
    let (mut model, pane, series) = build_model();
    // Only the first half of the indexes has data.
    let data: Vec<SeriesDataItem> = (0..50)
        .map(|i| SeriesDataItem {
            time: TimePointIndex(i),
            value: 100.0 + i as f64,
        })
        .collect();
    model.set_series_data(series, data).unwrap();
    point_crosshair_at(&mut model, 80);

    let mut view = CrosshairMarksPaneView::new();
    let list = draw_marks(&mut view, &model, pane);
    assert!(list.is_empty());
}

#[test]
fn marker_fields_follow_model_state() {
    let (mut model, pane, series) = build_model();
    point_crosshair_at(&mut model, 10);

    let mut view = CrosshairMarksPaneView::new();
    let list = draw_marks(&mut view, &model, pane);

    // Halo behind the body: two fills per visible marker.
    assert_eq!(list.len(), 2);

    let expected_x = model
        .time_scale()
        .index_to_coordinate(TimePointIndex(10));
    let expected_y = model
        .series(series)
        .unwrap()
        .price_scale()
        .price_to_coordinate(110.0, 100.0);

    match list.commands()[0] {
        DrawCommand::FillCircle {
            center,
            radius,
            color,
        } => {
            // No border color set: the halo picks up the pane background.
            assert_eq!(color, model.theme().background_color_at_percent(0.0));
            assert!((radius - 6.0).abs() < 1e-6, "radius + border width");
            assert!((center.x - expected_x).abs() < 1e-3);
            assert!((center.y - expected_y).abs() < 1e-3);
        }
        other => panic!("expected halo fill, got {other:?}"),
    }
    match list.commands()[1] {
        DrawCommand::FillCircle { radius, color, .. } => {
            assert_eq!(color, SeriesOptions::default().color);
            assert!((radius - 4.0).abs() < 1e-6);
        }
        other => panic!("expected marker body, got {other:?}"),
    }
}

#[test]
fn border_color_overrides_background() {
    let (mut model, pane, series) = build_model();
    let red = Color::rgb(1.0, 0.0, 0.0);
    model
        .set_series_options(
            series,
            SeriesOptions {
                crosshair_marker_border_color: Some(red),
                ..SeriesOptions::default()
            },
        )
        .unwrap();
    point_crosshair_at(&mut model, 10);

    let mut view = CrosshairMarksPaneView::new();
    let list = draw_marks(&mut view, &model, pane);

    match list.commands()[0] {
        DrawCommand::FillCircle { color, .. } => assert_eq!(color, red),
        other => panic!("expected halo fill, got {other:?}"),
    }
}

#[test]
fn zero_border_width_keeps_the_halo() {
    let (mut model, pane, series) = build_model();
    model
        .set_series_options(
            series,
            SeriesOptions {
                crosshair_marker_border_width: 0.0,
                ..SeriesOptions::default()
            },
        )
        .unwrap();
    point_crosshair_at(&mut model, 10);

    let mut view = CrosshairMarksPaneView::new();
    let list = draw_marks(&mut view, &model, pane);

    // The halo is always drawn under the body, it just stops protruding.
    assert_eq!(list.len(), 2);
    match list.commands()[0] {
        DrawCommand::FillCircle { radius, color, .. } => {
            assert_eq!(color, model.theme().background_color_at_percent(0.0));
            assert!((radius - 4.0).abs() < 1e-6);
        }
        other => panic!("expected halo fill, got {other:?}"),
    }
}

#[test]
fn renderer_is_cached_until_update() {
    let (mut model, pane, _) = build_model();
    point_crosshair_at(&mut model, 10);

    let mut view = CrosshairMarksPaneView::new();
    let before = draw_marks(&mut view, &model, pane);

    // Move the crosshair without telling the view: the cached resolution
    // must survive.
    point_crosshair_at(&mut model, 20);
    let stale = draw_marks(&mut view, &model, pane);
    assert_eq!(before, stale, "resolution is cached per pane");

    view.update(&model, UpdateType::Data);
    let fresh = draw_marks(&mut view, &model, pane);
    assert_ne!(before, fresh, "update clears the per-pane cache");
}

#[test]
fn series_count_change_recreates_slots() {
    let (mut model, pane, _) = build_model();
    point_crosshair_at(&mut model, 10);

    let mut view = CrosshairMarksPaneView::new();
    assert_eq!(draw_marks(&mut view, &model, pane).len(), 2);

    let second = model.create_series(pane, SeriesOptions::default()).unwrap();
    let data: Vec<SeriesDataItem> = (0..100)
        .map(|i| SeriesDataItem {
            time: TimePointIndex(i),
            value: 50.0 + i as f64,
        })
        .collect();
    model.set_series_data(second, data).unwrap();
    model
        .set_series_price_range(second, PriceRange::new(50.0, 149.0))
        .unwrap();

    view.update(&model, UpdateType::Full);
    let list = draw_marks(&mut view, &model, pane);
    assert_eq!(list.len(), 4, "one marker per series, two fills each");
}

#[test]
fn marker_only_resolves_for_panes_containing_the_series() {
    let (mut model, _pane, _series) = build_model();
    let empty_pane = model.create_pane(150.0);
    point_crosshair_at(&mut model, 10);

    let mut view = CrosshairMarksPaneView::new();
    let list = draw_marks(&mut view, &model, empty_pane);
    assert!(list.is_empty(), "the series lives in the other pane");
}
