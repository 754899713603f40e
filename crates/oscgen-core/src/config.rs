// crates/oscgen-core/src/config.rs

//! Generator configuration.
//!
//! A [`GeneratorConfig`] is a plain value: it is built once (defaults, a TOML
//! profile, CLI overrides) and handed to the generator by value. Nothing in it
//! is validated on the way in. Inverted ranges and an out-of-range `dfrac` are
//! sampled as given; [`GeneratorConfig::anomalies`] only describes them so a
//! caller can log them.

use std::f64::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Parameters for one generation run.
///
/// Missing fields in a profile fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of oscillators to generate.
    pub nosc: usize,
    /// Grid extent along x. Only used to derive the sampling bounds.
    pub nx: u32,
    /// Grid extent along y. Carried for consumers of the profile; both
    /// coordinates are sampled within the bounds derived from `nx`.
    pub ny: u32,
    /// Minimum splat width.
    pub r0: f64,
    /// Maximum splat width; also the margin kept from the grid edge.
    pub r1: f64,
    /// Minimum natural frequency (rad / unit time).
    pub w0: f64,
    /// Maximum natural frequency (rad / unit time).
    pub w1: f64,
    /// Minimum damping coefficient.
    pub z0: f64,
    /// Maximum damping coefficient.
    pub z1: f64,
    /// Probability that an oscillator is of the damped kind.
    pub dfrac: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            nosc: 128,
            nx: 2048,
            ny: 2048,
            r0: 8.0,
            r1: 96.0,
            w0: PI / 4.0,
            w1: 16.0 * PI,
            z0: 0.0,
            z1: 1.0,
            dfrac: 0.75,
        }
    }
}

/// Interval `[lo, hi]` that both center coordinates are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingBounds {
    /// Lower bound (`r1`).
    pub lo: f64,
    /// Upper bound (`nx - r1`).
    pub hi: f64,
}

impl SamplingBounds {
    /// `hi - lo`. Negative when the margin exceeds half the grid.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Whether `v` lies in `[lo, hi]`.
    #[inline]
    #[must_use]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.lo && v <= self.hi
    }
}

impl GeneratorConfig {
    /// Spatial sampling bounds: the grid shrunk by the largest splat width.
    #[must_use]
    pub fn sampling_bounds(&self) -> SamplingBounds {
        SamplingBounds {
            lo: self.r1,
            hi: f64::from(self.nx) - self.r1,
        }
    }

    /// Human-readable notes about degenerate settings.
    ///
    /// An empty vector means every range is ordered and `dfrac` is a
    /// probability. The generator runs regardless.
    #[must_use]
    pub fn anomalies(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.nx == 0 || self.ny == 0 {
            out.push(format!("grid has a zero dimension ({}x{})", self.nx, self.ny));
        }
        for (name, lo, hi) in [
            ("r", self.r0, self.r1),
            ("w", self.w0, self.w1),
            ("z", self.z0, self.z1),
        ] {
            if lo > hi {
                out.push(format!("{name} range is inverted ({name}0={lo} > {name}1={hi})"));
            }
        }
        let b = self.sampling_bounds();
        if b.lo > b.hi {
            out.push(format!(
                "sampling bounds are inverted (x0={} > x1={}); r1 exceeds half of nx",
                b.lo, b.hi
            ));
        }
        if !(0.0..=1.0).contains(&self.dfrac) {
            out.push(format!("dfrac {} is outside [0, 1]", self.dfrac));
        }
        out
    }
}

/// Read a [`GeneratorConfig`] from a TOML profile.
///
/// Any subset of fields may be given; the rest take their defaults.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading profile {}", path.display()))?;
    parse_profile(&text).with_context(|| format!("parsing profile {}", path.display()))
}

/// Parse a TOML profile from a string.
pub fn parse_profile(text: &str) -> Result<GeneratorConfig> {
    toml::from_str(text).context("invalid generator profile")
}
