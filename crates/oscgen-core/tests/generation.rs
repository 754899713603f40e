//! End-to-end properties of generated oscillator sets.
//!
//! Sampling bounds and record counts are checked with proptest over random
//! configurations and seeds; the fixed-point cases (sentinels, the 3-4-5
//! triangle) bypass sampling through `Report::from_oscillators`.

use oscgen_core::{
    extremal_distances, Generator, GeneratorConfig, Oscillator, OscillatorKind, Point, Report,
    TABLE_HEADER,
};
use proptest::prelude::*;

#[track_caller]
fn render(report: &Report) -> String {
    let mut out = Vec::new();
    report.write_table(&mut out).expect("write to Vec");
    String::from_utf8(out).expect("utf8 table")
}

fn run(cfg: GeneratorConfig, seed: u64) -> String {
    render(&Generator::from_seed(cfg, Some(seed)).generate())
}

fn fixed(x: f64, y: f64) -> Oscillator {
    Oscillator {
        kind: OscillatorKind::Periodic,
        center: Point::planar(x, y),
        r: 8.0,
        omega0: 1.0,
        zeta: 0.5,
    }
}

#[test]
fn empty_run_reports_sentinels() {
    let cfg = GeneratorConfig {
        nosc: 0,
        ..GeneratorConfig::default()
    };
    let text = run(cfg, 11);
    assert_eq!(
        text,
        format!("{TABLE_HEADER}\n# max_dist = 0.000000\n# min_dist = 1856.000000\n")
    );
}

#[test]
fn single_oscillator_keeps_sentinels() {
    let cfg = GeneratorConfig {
        nosc: 1,
        ..GeneratorConfig::default()
    };
    let text = run(cfg, 12);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(!lines[1].starts_with('#'));
    assert_eq!(lines[2], "# max_dist = 0.000000");
    assert_eq!(lines[3], "# min_dist = 1856.000000");
}

#[test]
fn three_four_five() {
    let cfg = GeneratorConfig {
        nosc: 2,
        ..GeneratorConfig::default()
    };
    let report = Report::from_oscillators(cfg, vec![fixed(0.0, 0.0), fixed(3.0, 4.0)]);
    let text = render(&report);
    let tail: Vec<&str> = text.lines().skip(3).collect();
    assert_eq!(tail, ["# max_dist = 5.000000", "# min_dist = 5.000000"]);
}

#[test]
fn display_truncates_but_distance_uses_full_precision() {
    let report = Report::from_oscillators(
        GeneratorConfig::default(),
        vec![fixed(100.9, 100.0), fixed(100.0, 100.0)],
    );
    let text = render(&report);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[1].starts_with("periodic    100 100 0    "));
    assert!(lines[2].starts_with("periodic    100 100 0    "));
    assert!((report.stats.min - 0.9).abs() < 1e-12);
    assert_eq!(lines[4], "# min_dist = 0.900000");
}

#[test]
fn seeded_runs_are_byte_identical() {
    let cfg = GeneratorConfig::default();
    assert_eq!(run(cfg.clone(), 42), run(cfg.clone(), 42));
    assert_ne!(run(cfg.clone(), 42), run(cfg, 43));
}

#[test]
fn damped_fraction_tracks_dfrac() {
    let cfg = GeneratorConfig {
        nosc: 20_000,
        dfrac: 0.75,
        ..GeneratorConfig::default()
    };
    let mut g = Generator::from_seed(cfg, Some(5));
    let damped = (0..20_000)
        .filter(|_| g.sample_one().kind == OscillatorKind::Damped)
        .count();
    let frac = damped as f64 / 20_000.0;
    assert!((frac - 0.75).abs() < 0.02, "damped fraction {frac}");
}

#[test]
fn stats_ignore_generation_order() {
    let report = Generator::from_seed(
        GeneratorConfig {
            nosc: 24,
            ..GeneratorConfig::default()
        },
        Some(9),
    )
    .generate();
    let mut pts = report.centers();
    let width = report.config.sampling_bounds().width();
    pts.reverse();
    assert_eq!(extremal_distances(&pts, width), report.stats);
    pts.rotate_left(7);
    assert_eq!(extremal_distances(&pts, width), report.stats);
}

fn small_config() -> impl Strategy<Value = GeneratorConfig> {
    (
        0usize..40,
        256u32..4096,
        1.0f64..20.0,
        20.0f64..100.0,
        0.1f64..10.0,
        0.0f64..1.0,
    )
        .prop_map(|(nosc, nx, r0, r1, w0, dfrac)| GeneratorConfig {
            nosc,
            nx,
            ny: nx,
            r0,
            r1,
            w0,
            w1: w0 * 4.0,
            z0: 0.0,
            z1: 1.0,
            dfrac,
        })
}

proptest! {
    #[test]
    fn samples_stay_in_range(cfg in small_config(), seed in any::<u64>()) {
        let b = cfg.sampling_bounds();
        let report = Generator::from_seed(cfg.clone(), Some(seed)).generate();
        prop_assert_eq!(report.oscillators.len(), cfg.nosc);
        for o in &report.oscillators {
            prop_assert!(b.contains(o.center.x) && b.contains(o.center.y));
            prop_assert_eq!(o.center.z, 0.0);
            prop_assert!(o.r >= cfg.r0 && o.r <= cfg.r1);
            prop_assert!(o.omega0 >= cfg.w0 && o.omega0 <= cfg.w1);
            prop_assert!(o.zeta >= cfg.z0 && o.zeta <= cfg.z1);
        }
    }

    #[test]
    fn table_has_one_line_per_record(cfg in small_config(), seed in any::<u64>()) {
        let text = run(cfg.clone(), seed);
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), cfg.nosc + 3);
        prop_assert_eq!(lines[0], TABLE_HEADER);
        for line in &lines[1..=cfg.nosc] {
            let kind = line.split_whitespace().next().unwrap_or_default();
            prop_assert!(kind == "damped" || kind == "periodic");
            prop_assert_eq!(line.split_whitespace().count(), 7);
        }
        prop_assert!(lines[cfg.nosc + 1].starts_with("# max_dist = "));
        prop_assert!(lines[cfg.nosc + 2].starts_with("# min_dist = "));
    }
}
