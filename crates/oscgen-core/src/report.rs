// crates/oscgen-core/src/report.rs

//! A finished generation run and its table rendering.

use std::io::Write;

use anyhow::{Context, Result};

use crate::config::GeneratorConfig;
use crate::distance::{extremal_distances, DistanceStats};
use crate::format::{Oscillator, Point, TABLE_HEADER};

/// Oscillators in generation order plus their distance stats.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Configuration the set was drawn from.
    pub config: GeneratorConfig,
    /// Records in generation order.
    pub oscillators: Vec<Oscillator>,
    /// Extremal pairwise center distances.
    pub stats: DistanceStats,
}

impl Report {
    /// Build a report from fixed records, computing stats with the
    /// sampling-width sentinel of `config`.
    #[must_use]
    pub fn from_oscillators(config: GeneratorConfig, oscillators: Vec<Oscillator>) -> Self {
        let sentinel = config.sampling_bounds().width();
        let stats = extremal_distances(&Self::centers_of(&oscillators), sentinel);
        Self {
            config,
            oscillators,
            stats,
        }
    }

    /// Centers in generation order.
    #[must_use]
    pub fn centers(&self) -> Vec<Point> {
        Self::centers_of(&self.oscillators)
    }

    fn centers_of(oscillators: &[Oscillator]) -> Vec<Point> {
        oscillators.iter().map(|o| o.center).collect()
    }

    /// Write header, one line per oscillator, then the two summary lines.
    pub fn write_table<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "{TABLE_HEADER}").context("write table header")?;
        for osc in &self.oscillators {
            osc.write_line(w).context("write oscillator line")?;
        }
        writeln!(w, "# max_dist = {:.6}", self.stats.max).context("write max_dist")?;
        writeln!(w, "# min_dist = {:.6}", self.stats.min).context("write min_dist")?;
        Ok(())
    }
}
