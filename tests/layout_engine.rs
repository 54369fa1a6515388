//! End-to-end checks of the layout pipeline through the public API.

use waterfall_layout::layout::{RowOutcome, compute_bounds, position, reorder};
use waterfall_layout::{
    Bounds, LineSettings, Observation, TOTAL_CATEGORY, TotalRow, compute_layout,
};

fn obs(category: &str, value: f64) -> Observation {
    Observation::new(category, value)
}

#[test]
fn reorder_is_deterministic_and_sorts_unique_ordinals() {
    let rows = vec![
        obs("3 Gamma", 1.0),
        obs("1 Alpha", 2.0),
        obs("02 Beta", 3.0),
    ];
    let out = reorder(&rows);
    assert_eq!(out.series.len(), rows.len());
    let cats: Vec<&str> = out.series.iter().map(|o| o.category.as_str()).collect();
    assert_eq!(cats, vec!["1 Alpha", "02 Beta", "3 Gamma"]);
    assert!(out.outcomes.iter().all(|o| *o == RowOutcome::Kept));

    // Same input, same output.
    assert_eq!(reorder(&rows), out);
}

#[test]
fn reorder_is_idempotent_on_sorted_input() {
    let rows = vec![obs("1 A", 1.0), obs("2 B", 2.0), obs("3 C", 3.0)];
    let once = reorder(&rows).series;
    assert_eq!(once, rows);
    let twice = reorder(&once).series;
    assert_eq!(twice, once);
}

#[test]
fn duplicate_ordinal_last_occurrence_wins() {
    let rows = vec![obs("1 A", 5.0), obs("1 B", 9.0)];
    let out = reorder(&rows);
    assert_eq!(out.series.len(), 1);
    assert_eq!(out.series[0].category, "1 B");
    assert_eq!(out.series[0].value, 9.0);
    assert_eq!(
        out.outcomes,
        vec![RowOutcome::OverwrittenDuplicate, RowOutcome::Kept]
    );
}

#[test]
fn unparseable_categories_are_dropped() {
    let rows = vec![obs("Revenue", 5.0), obs("1 Costs", -2.0), obs("x2 Tax", 1.0)];
    let out = reorder(&rows);
    assert_eq!(out.series.len(), 1);
    assert_eq!(out.series[0].category, "1 Costs");
    assert_eq!(out.outcomes[0], RowOutcome::DroppedUnparseable);
    assert_eq!(out.outcomes[2], RowOutcome::DroppedUnparseable);
}

#[test]
fn bounds_floor_is_cumulative_but_ceiling_is_not() {
    let series = vec![obs("1 A", 10.0), obs("2 B", -20.0), obs("3 C", 5.0)];
    // Prefix sums: 10, -10, -5.
    let b = compute_bounds(&series);
    assert_eq!(b, Bounds { min: -10.0, max: 10.0 });
}

#[test]
fn positive_steps_plot_from_baseline_at_own_value() {
    let spans = position(&[obs("1 A", 10.0), obs("2 B", 20.0)]);
    assert_eq!((spans[0].top, spans[0].bottom), (10.0, 0.0));
    assert_eq!((spans[1].top, spans[1].bottom), (20.0, 0.0));
}

#[test]
fn negative_step_descends_from_previous_total() {
    let spans = position(&[obs("1 A", 10.0), obs("2 B", -4.0)]);
    assert_eq!((spans[0].top, spans[0].bottom), (10.0, 0.0));
    assert_eq!((spans[1].top, spans[1].bottom), (10.0, 6.0));
}

#[test]
fn total_bar_ignores_running_total() {
    let spans = position(&[obs("1 A", 10.0), obs("2 B", -4.0), obs(TOTAL_CATEGORY, 16.0)]);
    assert_eq!((spans[2].top, spans[2].bottom), (16.0, 0.0));

    // A row after the Total still sees the pre-Total running total.
    let spans = position(&[
        obs("1 A", 10.0),
        obs("2 B", -4.0),
        obs(TOTAL_CATEGORY, 16.0),
        obs("3 C", -1.0),
    ]);
    assert_eq!((spans[3].top, spans[3].bottom), (6.0, 5.0));
}

#[test]
fn empty_everything_is_empty_not_an_error() {
    assert!(reorder(&[]).series.is_empty());
    assert_eq!(compute_bounds(&[]), Bounds::ZERO);
    assert!(position(&[]).is_empty());

    let layout = compute_layout(&[], &LineSettings::default(), TotalRow::Append);
    assert!(layout.bars.is_empty());
    assert_eq!(layout.bounds, Bounds::ZERO);
}

#[test]
fn full_pipeline_appends_grey_total_bar() {
    let rows = vec![obs("2 Costs", -4.0), obs("1 Revenue", 10.0)];
    let layout = compute_layout(&rows, &LineSettings::default(), TotalRow::Append);

    let cats: Vec<&str> = layout.bars.iter().map(|b| b.category.as_str()).collect();
    assert_eq!(cats, vec!["1 Revenue", "2 Costs", TOTAL_CATEGORY]);

    let total = &layout.bars[2];
    assert_eq!(total.top, 6.0);
    assert_eq!(total.height, 6.0);
    assert_eq!(total.colour.to_hex(), "#777777");
}

#[test]
fn nan_measure_propagates_into_geometry() {
    let rows = vec![obs("1 A", f64::NAN), obs("2 B", -4.0)];
    let layout = compute_layout(&rows, &LineSettings::default(), TotalRow::Omit);
    // A NaN measure fails the >= 0 test and takes the descending branch:
    // the bar hangs from the running total (still 0) with NaN extent.
    assert_eq!(layout.bars[0].top, 0.0);
    assert!(layout.bars[0].height.is_nan());
    // The poisoned running total then reaches the next bar untouched.
    assert!(layout.bars[1].top.is_nan());
    // Bounds comparisons skip NaN, leaving the clamps in place.
    assert_eq!(layout.bounds.max, 0.0);
    assert_eq!(layout.bounds.min, 0.0);
}
