use chart_views::model::price_scale::{
    PriceRange, PriceScale, PriceScaleMargins, PriceScaleMode, PriceScaleOptions,
};
use chart_views::model::time_scale::{
    format_timestamp, pick_label_format, TickLabelFormat, TimeScale, TimeScaleOptions,
};
use chart_views::model::TimePointIndex;
use chrono_tz::Tz;

fn linear_scale(height: f32, min: f64, max: f64) -> PriceScale {
    let mut scale = PriceScale::new(PriceScaleOptions {
        mode: PriceScaleMode::Normal,
        invert_scale: false,
        margins: PriceScaleMargins { top: 0.0, bottom: 0.0 },
    });
    scale.set_height(height);
    scale.set_price_range(PriceRange::new(min, max));
    scale
}

#[test]
fn normal_mode_maps_prices_top_down() {
    let scale = linear_scale(100.0, 0.0, 100.0);

    assert_eq!(scale.price_to_coordinate(100.0, 0.0), 0.0);
    assert_eq!(scale.price_to_coordinate(0.0, 0.0), 100.0);
    assert_eq!(scale.price_to_coordinate(50.0, 0.0), 50.0);
}

#[test]
fn inverted_scale_flips_the_axis() {
    let mut scale = linear_scale(100.0, 0.0, 100.0);
    let mut options = scale.options().clone();
    options.invert_scale = true;
    scale.set_options(options);

    assert_eq!(scale.price_to_coordinate(100.0, 0.0), 100.0);
    assert_eq!(scale.price_to_coordinate(0.0, 0.0), 0.0);
}

#[test]
fn margins_compress_the_drawable_band() {
    let mut scale = PriceScale::new(PriceScaleOptions {
        mode: PriceScaleMode::Normal,
        invert_scale: false,
        margins: PriceScaleMargins { top: 0.1, bottom: 0.1 },
    });
    scale.set_height(100.0);
    scale.set_price_range(PriceRange::new(0.0, 100.0));

    assert!((scale.price_to_coordinate(100.0, 0.0) - 10.0).abs() < 1e-4);
    assert!((scale.price_to_coordinate(0.0, 0.0) - 90.0).abs() < 1e-4);
}

#[test]
fn coordinate_to_price_round_trips() {
    let scale = linear_scale(400.0, 12.5, 87.5);
    for price in [12.5, 20.0, 55.25, 87.5] {
        let coordinate = scale.price_to_coordinate(price, 12.5);
        let restored = scale.coordinate_to_price(coordinate, 12.5);
        assert!(
            (restored - price).abs() < 1e-3,
            "price {price} restored as {restored}"
        );
    }
}

#[test]
fn percentage_mode_is_relative_to_the_base_value() {
    let mut scale = PriceScale::new(PriceScaleOptions {
        mode: PriceScaleMode::Percentage,
        invert_scale: false,
        margins: PriceScaleMargins { top: 0.0, bottom: 0.0 },
    });
    scale.set_height(100.0);
    scale.set_price_range(PriceRange::new(100.0, 200.0));

    // 150 sits halfway between +0% and +100% of the base.
    assert!((scale.price_to_coordinate(150.0, 100.0) - 50.0).abs() < 1e-4);
    assert!((scale.price_to_coordinate(200.0, 100.0) - 0.0).abs() < 1e-4);
}

#[test]
fn indexed_to_100_mode_rebases_the_first_value() {
    let mut scale = PriceScale::new(PriceScaleOptions {
        mode: PriceScaleMode::IndexedTo100,
        invert_scale: false,
        margins: PriceScaleMargins { top: 0.0, bottom: 0.0 },
    });
    scale.set_height(100.0);
    scale.set_price_range(PriceRange::new(50.0, 150.0));

    // Base 50 maps to index 100; the range spans 100..300.
    assert!((scale.price_to_coordinate(50.0, 50.0) - 100.0).abs() < 1e-4);
    assert!((scale.price_to_coordinate(100.0, 50.0) - 50.0).abs() < 1e-4);
    assert!((scale.price_to_coordinate(150.0, 50.0) - 0.0).abs() < 1e-4);

    for price in [50.0, 75.0, 120.0, 150.0] {
        let coordinate = scale.price_to_coordinate(price, 50.0);
        let restored = scale.coordinate_to_price(coordinate, 50.0);
        assert!(
            (restored - price).abs() < 1e-3,
            "price {price} restored as {restored}"
        );
    }

    // A zero base value falls back to the raw price.
    assert!((scale.price_to_coordinate(150.0, 0.0) - 0.0).abs() < 1e-4);
    assert!((scale.price_to_coordinate(50.0, 0.0) - 100.0).abs() < 1e-4);
}

#[test]
fn logarithmic_mode_round_trips() {
    let mut scale = PriceScale::new(PriceScaleOptions {
        mode: PriceScaleMode::Logarithmic,
        invert_scale: false,
        margins: PriceScaleMargins { top: 0.0, bottom: 0.0 },
    });
    scale.set_height(500.0);
    scale.set_price_range(PriceRange::new(1.0, 10_000.0));

    for price in [1.0, 10.0, 500.0, 10_000.0] {
        let coordinate = scale.price_to_coordinate(price, 1.0);
        assert!(coordinate.is_finite());
        let restored = scale.coordinate_to_price(coordinate, 1.0);
        assert!(
            (restored - price).abs() / price < 1e-3,
            "price {price} restored as {restored}"
        );
    }
}

#[test]
fn flat_price_range_stays_finite() {
    let scale = linear_scale(100.0, 10.0, 10.0);
    let coordinate = scale.price_to_coordinate(10.0, 10.0);
    assert!(coordinate.is_finite());
    assert!((0.0..=100.0).contains(&coordinate));
}

#[test]
fn missing_price_range_maps_to_zero() {
    let mut scale = PriceScale::new(PriceScaleOptions::default());
    scale.set_height(100.0);
    assert_eq!(scale.price_to_coordinate(42.0, 42.0), 0.0);
}

fn build_time_scale() -> TimeScale {
    let mut scale = TimeScale::new(TimeScaleOptions::default());
    scale.set_width(800.0);
    scale.set_points((0..100).map(|i| i * 60).collect()).unwrap();
    scale
}

#[test]
fn base_index_sits_near_the_right_edge() {
    let scale = build_time_scale();
    // width - half a bar - 1, with the default zero right offset
    assert_eq!(
        scale.index_to_coordinate(TimePointIndex(99)),
        800.0 - 0.5 * 6.0 - 1.0
    );
}

#[test]
fn coordinate_to_index_round_trips() {
    let scale = build_time_scale();
    for index in [0, 13, 50, 99] {
        let x = scale.index_to_coordinate(TimePointIndex(index));
        assert_eq!(scale.coordinate_to_index(x), TimePointIndex(index));
    }
}

#[test]
fn zoom_keeps_the_index_under_the_pivot() {
    let mut scale = build_time_scale();
    let pivot = 400.0;
    let before = scale.coordinate_to_index(pivot);

    scale.zoom(pivot, 2.0);
    assert_eq!(scale.coordinate_to_index(pivot), before);

    scale.zoom(pivot, 0.25);
    assert_eq!(scale.coordinate_to_index(pivot), before);
}

#[test]
fn zoom_respects_the_minimum_bar_spacing() {
    let mut scale = build_time_scale();
    scale.zoom(400.0, 1e-6);
    assert_eq!(scale.bar_spacing(), TimeScaleOptions::default().min_bar_spacing);
}

#[test]
fn scroll_shifts_the_visible_window() {
    let mut scale = build_time_scale();
    let x_before = scale.index_to_coordinate(TimePointIndex(50));
    scale.scroll(10.0);
    let x_after = scale.index_to_coordinate(TimePointIndex(50));
    assert!((x_after - (x_before - 10.0 * scale.bar_spacing())).abs() < 1e-3);
}

#[test]
fn set_points_rejects_non_increasing_timestamps() {
    let mut scale = TimeScale::default();
    assert!(scale.set_points(vec![0, 60, 60]).is_err());
    assert!(scale.set_points(vec![0, 60, 30]).is_err());
    assert!(scale.set_points(vec![0, 60, 120]).is_ok());
}

#[test]
fn tick_indexes_stay_within_the_data() {
    let scale = build_time_scale();
    let ticks = scale.tick_indexes(10);
    assert!(!ticks.is_empty());
    assert!(ticks.len() <= 11);
    for tick in &ticks {
        assert!((0..100).contains(&tick.0));
    }
}

#[test]
fn label_format_follows_the_visible_span() {
    const DAY: f64 = 86_400.0;
    assert_eq!(pick_label_format(3.0 * 365.0 * DAY), TickLabelFormat::Year);
    assert_eq!(pick_label_format(90.0 * DAY), TickLabelFormat::MonthYear);
    assert_eq!(pick_label_format(2.0 * DAY), TickLabelFormat::DayMonth);
    assert_eq!(pick_label_format(600.0), TickLabelFormat::HourMin);
    assert_eq!(pick_label_format(60.0), TickLabelFormat::HourMinSec);
}

#[test]
fn timestamps_format_in_the_configured_timezone() {
    assert_eq!(
        format_timestamp(0, TickLabelFormat::HourMinSec, Tz::UTC),
        "00:00:00"
    );
    assert_eq!(format_timestamp(0, TickLabelFormat::Year, Tz::UTC), "1970");
    // UTC+1 in winter
    assert_eq!(
        format_timestamp(3600, TickLabelFormat::HourMin, Tz::Europe__Paris),
        "02:00"
    );
}

#[test]
fn index_labels_come_from_the_point_table() {
    let scale = build_time_scale();
    // ~133 one-minute bars visible: a span over five minutes, so hour:minute
    let label = scale.format_index_label(TimePointIndex(10)).unwrap();
    assert_eq!(label, "00:10");
    assert!(scale.format_index_label(TimePointIndex(1000)).is_none());
}
