//! oscgen-core — randomized oscillator input sets for field simulators.
//!
//! An input set is a list of point sources ("oscillators", or splats) on a
//! 2D grid, each with a center, a spread radius, a natural frequency and a
//! damping coefficient. The simulator that consumes them lives elsewhere;
//! this crate only samples the parameters and renders them.
//!
//! - `config`: the immutable [`GeneratorConfig`] plus TOML profile loading.
//! - `format`: oscillator records and the tabular line format.
//! - `generator`: the seeded/unseeded sampler.
//! - `distance`: extremal pairwise distance over the generated centers.
//! - `report`: a finished run (records + stats) and its text rendering.
//!
//! ```
//! use oscgen_core::{Generator, GeneratorConfig};
//!
//! let cfg = GeneratorConfig { nosc: 4, ..GeneratorConfig::default() };
//! let report = Generator::from_seed(cfg, Some(7)).generate();
//!
//! let mut out = Vec::new();
//! report.write_table(&mut out)?;
//! assert_eq!(String::from_utf8(out)?.lines().count(), 4 + 3);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::doc_markdown,
    clippy::cast_possible_truncation
)]

/// Generator configuration, sampling bounds, and TOML profiles.
pub mod config;
/// Pairwise distance statistics over oscillator centers.
pub mod distance;
/// Oscillator records and their text rendering.
pub mod format;
/// Random sampling of oscillator records.
pub mod generator;
/// A completed generation run.
pub mod report;

pub use config::{GeneratorConfig, SamplingBounds};
pub use distance::{extremal_distances, DistanceStats};
pub use format::{Oscillator, OscillatorKind, Point, TABLE_HEADER};
pub use generator::Generator;
pub use report::Report;
