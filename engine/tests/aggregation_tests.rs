//! Integration tests for plan aggregation, ownership isolation, and the
//! end-to-end horizon pipeline.

use breedcal_engine::core::domain::{BandKind, Horizon, PlanRow};
use breedcal_engine::core::species::Species;
use breedcal_engine::services::aggregator::PlanWindowAggregator;
use breedcal_engine::services::horizon;
use chrono::NaiveDate;

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn wide_horizon() -> Horizon {
    Horizon::new(d("2024-01-01"), d("2027-01-01"))
}

fn plan_with_cycle(id: &str, species: Species, cycle_start: &str) -> PlanRow {
    let mut plan = PlanRow::new(id, id.to_uppercase(), species);
    plan.locked.cycle_start = Some(d(cycle_start));
    plan
}

#[test]
fn every_output_carries_its_own_plan_id() {
    let aggregator = PlanWindowAggregator::new();
    let plans = vec![
        plan_with_cycle("alpha", Species::Dog, "2025-01-01"),
        plan_with_cycle("bravo", Species::Dog, "2025-02-15"),
        plan_with_cycle("charlie", Species::Horse, "2025-03-10"),
    ];

    let horizon = wide_horizon();
    for plan in &plans {
        let rows = aggregator.stage_rows_for_plan(plan);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r.owner_plan_id == plan.id));

        let bands = aggregator
            .availability_for_plan(plan, &rows, &horizon)
            .unwrap();
        assert!(bands.iter().all(|b| b.owner_plan_id == plan.id));
    }

    // Merged portfolio output never attributes a band to the wrong plan
    let all_bands = aggregator.availability_for_plans(&plans, &horizon);
    assert_eq!(all_bands.len(), 12);
    for plan in &plans {
        assert_eq!(
            all_bands
                .iter()
                .filter(|b| b.owner_plan_id == plan.id)
                .count(),
            4
        );
    }
}

#[test]
fn plan_colors_are_stable_and_distinct_per_plan() {
    let aggregator = PlanWindowAggregator::new();
    let alpha = plan_with_cycle("alpha", Species::Dog, "2025-01-01");
    let bravo = plan_with_cycle("bravo", Species::Dog, "2025-01-01");

    let alpha_rows = aggregator.stage_rows_for_plan(&alpha);
    let alpha_rows_again = aggregator.stage_rows_for_plan(&alpha);
    let bravo_rows = aggregator.stage_rows_for_plan(&bravo);

    assert_eq!(alpha_rows[0].color_tag, alpha_rows_again[0].color_tag);
    assert_ne!(alpha_rows[0].color_tag, bravo_rows[0].color_tag);
}

#[test]
fn aggregation_is_idempotent_and_deep_equal() {
    let aggregator = PlanWindowAggregator::new();
    let mut plan = plan_with_cycle("plan-7", Species::Dog, "2025-01-01");
    plan.locked.placement_start = Some(d("2025-06-15"));

    let horizon = wide_horizon();
    let rows_a = aggregator.stage_rows_for_plan(&plan);
    let rows_b = aggregator.stage_rows_for_plan(&plan);
    assert_eq!(rows_a, rows_b);

    let bands_a = aggregator
        .availability_for_plan(&plan, &rows_a, &horizon)
        .unwrap();
    let bands_b = aggregator
        .availability_for_plan(&plan, &rows_b, &horizon)
        .unwrap();
    assert_eq!(bands_a, bands_b);
}

#[test]
fn plan_without_windows_gets_single_projected_marker() {
    let aggregator = PlanWindowAggregator::new();
    let mut plan = PlanRow::new("resting", "Resting female", Species::Dog);
    plan.expected.next_cycle_start = Some(d("2025-06-01"));

    let rows = aggregator.stage_rows_for_plan(&plan);
    assert!(rows.is_empty());

    let bands = aggregator
        .availability_for_plan(&plan, &rows, &wide_horizon())
        .unwrap();
    assert_eq!(bands.len(), 1);
    assert_eq!(bands[0].data.kind, BandKind::Unlikely);
    assert_eq!(bands[0].data.range.start, d("2025-06-01"));
    assert_eq!(bands[0].data.range.end, d("2025-06-02"));
    assert_eq!(bands[0].owner_plan_id, "resting");
}

#[test]
fn one_bad_plan_never_aborts_the_portfolio() {
    let aggregator = PlanWindowAggregator::new();
    let healthy = plan_with_cycle("healthy", Species::Dog, "2025-01-01");
    // No anchor and no expected date: contributes nothing, fails nothing
    let empty = PlanRow::new("empty", "Empty", Species::Cat);

    let bands = aggregator.availability_for_plans(&[empty, healthy], &wide_horizon());
    assert_eq!(bands.len(), 4);
    assert!(bands.iter().all(|b| b.owner_plan_id == "healthy"));
}

#[test]
fn full_pipeline_tightens_horizon_around_data() {
    let aggregator = PlanWindowAggregator::new();
    let plan = plan_with_cycle("plan-1", Species::Dog, "2025-03-01");

    // Base horizon starts a year before any data
    let base = Horizon::new(d("2024-01-01"), d("2025-04-01"));
    let rows = aggregator.stage_rows_for_plan(&plan);
    let bands = aggregator
        .availability_for_plan(&plan, &rows, &base)
        .unwrap();

    let tightened = horizon::tighten(&base, &rows, &bands, 1);

    // Start moved up close to the data, end extended to cover placement
    assert!(tightened.start > base.start);
    assert!(tightened.end > base.end);

    let earliest = rows
        .iter()
        .map(|r| r.data.range.start)
        .chain(bands.iter().map(|b| b.data.range.start))
        .min()
        .unwrap();
    let latest = rows
        .iter()
        .map(|r| r.data.range.end)
        .chain(bands.iter().map(|b| b.data.range.end))
        .max()
        .unwrap();

    assert!(tightened.start <= earliest);
    assert!(tightened.end >= latest);
}

#[test]
fn locked_dates_take_precedence_over_expected() {
    let aggregator = PlanWindowAggregator::new();

    let mut locked_plan = PlanRow::new("locked", "L", Species::Dog);
    locked_plan.locked.cycle_start = Some(d("2025-01-01"));
    locked_plan.expected.cycle_start = Some(d("2025-04-01"));

    let mut expected_plan = PlanRow::new("expected", "E", Species::Dog);
    expected_plan.expected.cycle_start = Some(d("2025-01-01"));

    let locked_rows = aggregator.stage_rows_for_plan(&locked_plan);
    let expected_rows = aggregator.stage_rows_for_plan(&expected_plan);

    // Same anchor date, so same ranges; the expected date on the locked plan
    // was ignored entirely
    for (a, b) in locked_rows.iter().zip(expected_rows.iter()) {
        assert_eq!(a.data, b.data);
    }
}
