// crates/oscgen-core/src/format.rs

//! Oscillator records and the line-oriented table format.
//!
//! ```text
//! #type    center    r    omega0    zeta
//! damped    1021 377 0    42.118204    3.904116    0.613370
//! ```
//!
//! Center coordinates are printed truncated toward zero; the record keeps the
//! full-precision values and those are what the distance scan uses.

use std::fmt;
use std::io::{self, Write};

/// Header line of the table (without the trailing newline).
pub const TABLE_HEADER: &str = "#type    center    r    omega0    zeta";

/// Time-evolution regime of a point source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OscillatorKind {
    /// Decaying oscillation.
    Damped,
    /// Undamped, steady oscillation.
    Periodic,
}

impl OscillatorKind {
    /// Name as it appears in the table.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Damped => "damped",
            Self::Periodic => "periodic",
        }
    }
}

impl fmt::Display for OscillatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 3D point. The generator always sets `z = 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// x coordinate.
    pub x: f64,
    /// y coordinate.
    pub y: f64,
    /// z coordinate.
    pub z: f64,
}

impl Point {
    /// Point in the `z = 0` plane.
    #[inline]
    #[must_use]
    pub const fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Euclidean distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// One generated point source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    /// Damped or periodic.
    pub kind: OscillatorKind,
    /// Center on the grid.
    pub center: Point,
    /// Splat width.
    pub r: f64,
    /// Natural frequency.
    pub omega0: f64,
    /// Damping coefficient. Independent of `center.z`.
    pub zeta: f64,
}

impl Oscillator {
    /// Write this record as one table line, newline included.
    pub fn write_line<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "{self}")
    }
}

impl fmt::Display for Oscillator {
    /// `<type>    <x> <y> 0    <r>    <omega0>    <zeta>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}    {} {} {}    {:.6}    {:.6}    {:.6}",
            self.kind,
            truncated(self.center.x),
            truncated(self.center.y),
            0,
            self.r,
            self.omega0,
            self.zeta
        )
    }
}

/// Display-only truncation toward zero (saturating; NaN renders as 0).
#[inline]
fn truncated(v: f64) -> i64 {
    v as i64
}
