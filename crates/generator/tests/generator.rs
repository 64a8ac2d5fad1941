use chrono::NaiveDate;
use core_types::PriceSeries;
use generator::{AnchorPoints, GeneratorError, SeriesGenerator, WalkParams};
use rand::SeedableRng;
use rand::rngs::StdRng;

const REFERENCE_TAIL: [i64; 5] = [70100, 69500, 70100, 71500, 72600];

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 9, 13).unwrap()
}

fn reference_series(seed: u64) -> PriceSeries {
    let generator = SeriesGenerator::new(WalkParams::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    generator
        .generate_anchored(
            start_date(),
            58100,
            734,
            &AnchorPoints::reference_closes(),
            &mut rng,
        )
        .unwrap()
}

#[test]
fn generated_series_has_requested_shape() {
    for seed in [0, 1, 7, 42, 2024] {
        let series = reference_series(seed);

        assert_eq!(series.len(), 734);
        assert_eq!(series.first().date, start_date());
        assert_eq!(series.first().price, 58100);
        for pair in series.points().windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
            assert_eq!(pair[0].index + 1, pair[1].index);
        }
        assert!(series.prices().all(|p| p > 0));
    }
}

#[test]
fn tail_matches_reference_closes_for_any_seed() {
    for seed in 0..20 {
        let series = reference_series(seed);
        let tail: Vec<i64> = series.points()[series.len() - 5..]
            .iter()
            .map(|p| p.price)
            .collect();
        assert_eq!(tail, REFERENCE_TAIL);
    }
}

#[test]
fn daily_moves_stay_within_noise_and_drift_bounds() {
    let generator = SeriesGenerator::new(WalkParams::default()).unwrap();
    let series = generator
        .generate_seeded(start_date(), 58100, 734, 99)
        .unwrap();

    // |change| <= noise + drift plus half a unit of rounding.
    for pair in series.points().windows(2) {
        let prev = pair[0].price as f64;
        let change = (pair[1].price as f64 - prev).abs();
        assert!(change <= prev * (0.02 + 0.00025) + 0.5);
    }
}

#[test]
fn same_seed_reproduces_series() {
    let generator = SeriesGenerator::new(WalkParams::default()).unwrap();
    let a = generator.generate_seeded(start_date(), 58100, 200, 11).unwrap();
    let b = generator.generate_seeded(start_date(), 58100, 200, 11).unwrap();
    let c = generator.generate_seeded(start_date(), 58100, 200, 12).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn single_point_series_is_the_start_price() {
    let generator = SeriesGenerator::default();
    let series = generator.generate_seeded(start_date(), 58100, 1, 0).unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(series.first().price, 58100);
}

#[test]
fn anchors_right_align_on_short_series() {
    let generator = SeriesGenerator::default();
    let mut rng = StdRng::seed_from_u64(3);
    let series = generator
        .generate_anchored(
            start_date(),
            58100,
            3,
            &AnchorPoints::reference_closes(),
            &mut rng,
        )
        .unwrap();

    assert_eq!(series.prices().collect::<Vec<_>>(), vec![70100, 71500, 72600]);
}

#[test]
fn anchors_replace_only_the_tail() {
    let generator = SeriesGenerator::default();
    let raw = generator.generate_seeded(start_date(), 58100, 50, 5).unwrap();
    let anchored = AnchorPoints::reference_closes().apply(&raw).unwrap();

    assert_eq!(raw.points()[..45], anchored.points()[..45]);
    assert_eq!(
        anchored.prices().skip(45).collect::<Vec<_>>(),
        REFERENCE_TAIL.to_vec()
    );
}

#[test]
fn empty_anchors_leave_series_untouched() {
    let generator = SeriesGenerator::default();
    let raw = generator.generate_seeded(start_date(), 58100, 10, 5).unwrap();

    assert_eq!(AnchorPoints::none().apply(&raw).unwrap(), raw);
}

#[test]
fn rejects_invalid_inputs() {
    let generator = SeriesGenerator::default();

    assert!(matches!(
        generator.generate_seeded(start_date(), 58100, 0, 1),
        Err(GeneratorError::InvalidInput(_))
    ));
    assert!(matches!(
        generator.generate_seeded(start_date(), 0, 10, 1),
        Err(GeneratorError::InvalidInput(_))
    ));
    assert!(matches!(
        generator.generate_seeded(start_date(), -5, 10, 1),
        Err(GeneratorError::InvalidInput(_))
    ));
    assert!(matches!(
        AnchorPoints::new(vec![100, 0]),
        Err(GeneratorError::InvalidInput(_))
    ));
}
