use bazi_chart::core::pillars::{day_pillar, days_since_epoch, hour_pillar, year_pillar};
use bazi_chart::{calculate_chart, BaziError, BirthInput, Branch, ChartEngine, Element, Stem};

#[test]
fn test_reference_day_pillar_matches_day_count() {
    let chart = calculate_chart(1990, 5, 15, Some(14)).unwrap();
    let days_diff = days_since_epoch(1990, 5, 15).unwrap();
    assert_eq!(days_diff, 33006);

    assert_eq!(chart.pillars.day.stem.index() as i64, days_diff.rem_euclid(10));
    assert_eq!(
        chart.pillars.day.branch.index() as i64,
        (4 + days_diff).rem_euclid(12)
    );
}

#[test]
fn test_known_charts() {
    // (y, m, d, h) -> year, month, day, hour, missing
    let cases = [
        ((1984, 2, 2, 0), ["甲子", "乙卯", "丙申", "戊子"], Element::Metal),
        ((2000, 1, 1, 12), ["庚辰", "丙寅", "戊子", "戊午"], Element::Wood),
        ((1900, 1, 1, 23), ["庚子", "丙寅", "甲辰", "甲子"], Element::Earth),
        ((2024, 2, 29, 12), ["甲辰", "乙卯", "癸巳", "戊午"], Element::Fire),
        ((1850, 3, 10, 7), ["庚戌", "戊辰", "庚寅", "庚辰"], Element::Wood),
        ((1, 1, 1, 12), ["辛酉", "戊寅", "己酉", "庚午"], Element::Wood),
    ];

    for ((y, m, d, h), expected, missing) in cases {
        let chart = calculate_chart(y, m, d, Some(h)).unwrap();
        let got = [
            chart.pillars.year.to_string(),
            chart.pillars.month.to_string(),
            chart.pillars.day.to_string(),
            chart.pillars.hour.to_string(),
        ];
        assert_eq!(got, expected.map(String::from), "chart for {y}-{m}-{d} {h}h");
        assert_eq!(chart.missing_element, missing, "missing for {y}-{m}-{d}");
        assert_eq!(chart.five_elements.total(), 4);
        assert_eq!(chart.day_master, chart.pillars.day.stem);
        assert_eq!(chart.day_master_element, chart.day_master.element());
    }
}

#[test]
fn test_year_pillar_ranges() {
    assert_eq!(year_pillar(1984).stem, Stem::Jia);
    assert_eq!(year_pillar(1984).branch, Branch::Zi);
    for year in -3000..3000 {
        let pillar = year_pillar(year);
        assert!(pillar.stem.index() <= 9);
        assert!(pillar.branch.index() <= 11);
    }
}

#[test]
fn test_zi_hour_spans_midnight() {
    for stem in Stem::ALL {
        assert_eq!(hour_pillar(stem, 23).branch, Branch::Zi);
        assert_eq!(hour_pillar(stem, 0).branch, Branch::Zi);
        assert_eq!(hour_pillar(stem, 23), hour_pillar(stem, 0));
        for hour in 0..24 {
            assert_eq!(hour_pillar(stem, hour), hour_pillar(stem, hour + 24));
        }
    }
}

#[test]
fn test_day_pillar_advances_one_step_per_day() {
    let a = day_pillar(2023, 12, 31).unwrap();
    let b = day_pillar(2024, 1, 1).unwrap();
    assert_eq!((a.stem.index() + 1) % 10, b.stem.index());
    assert_eq!((a.branch.index() + 1) % 12, b.branch.index());
}

#[test]
fn test_invalid_dates() {
    for (y, m, d) in [(2024, 2, 30), (2023, 2, 29), (2024, 4, 31), (1990, 13, 1)] {
        let err = calculate_chart(y, m, d, None).unwrap_err();
        assert!(matches!(err, BaziError::InvalidDate { .. }), "{y}-{m}-{d}");
        assert_eq!(err.status_code(), 400);
    }
}

#[test]
fn test_element_tally_invariants_over_a_year() {
    let engine = ChartEngine::new();
    for month in 1..=12 {
        for day in 1..=28 {
            for hour in [0, 5, 12, 23] {
                let chart = engine
                    .calculate(&BirthInput::new(1999, month, day, Some(hour)))
                    .unwrap();
                let tally = chart.five_elements;
                assert_eq!(tally.total(), 4);

                let min = tally.iter().map(|(_, c)| c).min().unwrap();
                let first_min = tally.iter().find(|&(_, c)| c == min).unwrap().0;
                assert_eq!(chart.missing_element, first_min);
            }
        }
    }
}

#[test]
fn test_calculation_is_idempotent() {
    let engine = ChartEngine::new();
    let input = BirthInput::new(1990, 5, 15, Some(14));
    let first = serde_json::to_string(&engine.calculate(&input).unwrap()).unwrap();
    let second = serde_json::to_string(&engine.calculate(&input).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_strict_engine_rejects_out_of_range() {
    let strict = ChartEngine::new().with_strict_ranges(true);
    let err = strict
        .calculate(&BirthInput::new(1990, 13, 1, Some(12)))
        .unwrap_err();
    match err {
        BaziError::OutOfRange { field, value, .. } => {
            assert_eq!(field, "month");
            assert_eq!(value, 13);
        }
        other => panic!("expected OutOfRange, got {:?}", other),
    }

    // the default hour is range-checked too
    let strict = strict.with_default_hour(-1);
    assert!(strict.calculate(&BirthInput::new(1990, 5, 15, None)).is_err());
}
