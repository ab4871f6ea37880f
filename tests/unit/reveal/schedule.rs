use kurbo::Line;

use super::*;
use crate::illustration::geometry::Geometry;
use crate::reveal::sampler::ShapeSample;

fn set_of(lengths: &[f64], keep: usize) -> SilhouetteSet {
    let samples: Vec<_> = lengths
        .iter()
        .enumerate()
        .map(|(i, &length)| ShapeSample {
            shape: ShapeId(i as u32),
            length,
        })
        .collect();
    select(&samples, keep)
}

#[test]
fn duration_clamps_and_rounds() {
    let t = TimingConfig::default();
    assert_eq!(draw_duration_ms(0.0, &t), 800);
    assert_eq!(draw_duration_ms(10_000.0, &t), 2600);
    assert_eq!(draw_duration_ms(1000.0, &t), 1150);
    assert_eq!(draw_duration_ms(1500.0, &t), 1725);
    assert_eq!(draw_duration_ms(500.0, &t), 800);
}

#[test]
fn delays_stagger_by_rank_regardless_of_length() {
    let plan = schedule(&set_of(&[10.0, 4000.0, 30.0, 700.0], 25), &TimingConfig::default());
    let delays: Vec<_> = plan.entries.iter().map(|e| e.delay_ms).collect();
    assert_eq!(delays, vec![0, 140, 280, 420]);
    assert_eq!(plan.total_estimate_ms, 420 + 2200);
    assert_eq!(plan.fade_at_ms, 420 + 2200 - 700);
}

#[test]
fn worked_example_two_of_three() {
    let plan = schedule(&set_of(&[500.0, 1500.0, 500.0], 2), &TimingConfig::default());
    let got: Vec<_> = plan
        .entries
        .iter()
        .map(|e| (e.shape, e.rank, e.duration_ms, e.delay_ms))
        .collect();
    assert_eq!(
        got,
        vec![(ShapeId(1), 0, 1725, 0), (ShapeId(0), 1, 800, 140)]
    );
    assert_eq!(plan.total_estimate_ms, 2340);
    assert_eq!(plan.fade_at_ms, 1640);
}

#[test]
fn fade_start_saturates_at_zero() {
    let timing = TimingConfig {
        tail_ms: 100,
        fade_ms: 700,
        ..Default::default()
    };
    let plan = schedule(&set_of(&[50.0], 1), &timing);
    assert_eq!(plan.total_estimate_ms, 100);
    assert_eq!(plan.fade_at_ms, 0);
}

#[test]
fn empty_set_schedules_nothing() {
    let plan = schedule(&SilhouetteSet::default(), &TimingConfig::default());
    assert!(plan.is_empty());
    assert_eq!(plan.total_estimate_ms, 0);
    assert_eq!(plan.fade_at_ms, 0);
}

#[test]
fn plan_reveal_is_repeatable_and_reports_hidden() {
    let ill = Illustration::builder(2000.0, 2000.0)
        .shape(Geometry::Line(Line::new((0.0, 0.0), (500.0, 0.0))))
        .shape(Geometry::Line(Line::new((0.0, 0.0), (1500.0, 0.0))))
        .shape(Geometry::Line(Line::new((0.0, 0.0), (0.0, 500.0))))
        .shape(Geometry::Text)
        .build()
        .unwrap();
    let cfg = RevealConfig {
        keep: 2,
        ..Default::default()
    };

    let a = plan_reveal(&ill, &cfg);
    let b = plan_reveal(&ill, &cfg);
    assert_eq!(a, b);
    assert_eq!(a.measured, 3);
    assert_eq!(a.hidden, vec![ShapeId(2)]);
    assert_eq!(a.draw_end_ms(), 1725);
}

#[test]
fn inverted_duration_bounds_are_swapped() {
    let t = TimingConfig {
        min_duration_ms: 3000,
        max_duration_ms: 1000,
        ..Default::default()
    };
    assert_eq!(draw_duration_ms(0.0, &t), 1000);
    assert_eq!(draw_duration_ms(1500.0, &t), 1725);
    assert_eq!(draw_duration_ms(10_000.0, &t), 3000);
    assert_eq!(draw_duration_ms(f64::NAN, &t), 1000);
}
