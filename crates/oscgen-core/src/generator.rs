// crates/oscgen-core/src/generator.rs

//! Oscillator sampler.
//!
//! Each record draws, in order: `x`, `y`, `omega0`, `r`, `zeta`, then the
//! damped/periodic coin. Keeping that order fixed is what makes seeded runs
//! byte-reproducible.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::{GeneratorConfig, SamplingBounds};
use crate::format::{Oscillator, OscillatorKind, Point};
use crate::report::Report;

/// Samples oscillator records from a [`GeneratorConfig`].
#[derive(Debug)]
pub struct Generator<R> {
    cfg: GeneratorConfig,
    bounds: SamplingBounds,
    rng: R,
}

impl Generator<StdRng> {
    /// Seeded when `seed` is given, otherwise seeded from the OS.
    #[must_use]
    pub fn from_seed(cfg: GeneratorConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(cfg, rng)
    }
}

impl<R: Rng> Generator<R> {
    /// Use a caller-supplied RNG.
    pub fn with_rng(cfg: GeneratorConfig, rng: R) -> Self {
        let bounds = cfg.sampling_bounds();
        Self { cfg, bounds, rng }
    }

    /// Configuration this generator samples from.
    #[inline]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.cfg
    }

    /// Draw a single oscillator.
    pub fn sample_one(&mut self) -> Oscillator {
        let x = self.uniform(self.bounds.lo, self.bounds.hi);
        let y = self.uniform(self.bounds.lo, self.bounds.hi);
        let omega0 = self.uniform(self.cfg.w0, self.cfg.w1);
        let r = self.uniform(self.cfg.r0, self.cfg.r1);
        let zeta = self.uniform(self.cfg.z0, self.cfg.z1);
        let kind = if self.rng.random::<f64>() < self.cfg.dfrac {
            OscillatorKind::Damped
        } else {
            OscillatorKind::Periodic
        };
        Oscillator {
            kind,
            center: Point::planar(x, y),
            r,
            omega0,
            zeta,
        }
    }

    /// Draw `nosc` oscillators and compute their distance stats.
    pub fn generate(mut self) -> Report {
        let oscillators: Vec<Oscillator> = (0..self.cfg.nosc).map(|_| self.sample_one()).collect();
        Report::from_oscillators(self.cfg, oscillators)
    }

    /// `lo + (hi - lo) * u` with `u` in `[0, 1)`.
    ///
    /// Unlike `random_range`, an inverted interval is sampled instead of
    /// panicking, and `lo == hi` yields `lo`.
    #[inline]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (hi - lo).mul_add(self.rng.random::<f64>(), lo)
    }
}
