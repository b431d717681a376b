//! Matched positions and the sinks that collect them.

use crate::parser::schema::TraceRecord;
use crate::utils::error::OutputError;

/// Tolerance band around the target time
///
/// A sample matches when `|t - center| < tolerance`. The bound is strict on
/// both sides and NaN never matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWindow {
    pub center: f64,
    pub tolerance: f64,
}

impl MatchWindow {
    pub fn new(center: f64, tolerance: f64) -> Self {
        Self { center, tolerance }
    }

    pub fn contains(&self, time: f64) -> bool {
        (time - self.center).abs() < self.tolerance
    }
}

/// The projection of a trace record that ends up in the output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
    pub heading: Option<f64>,
}

impl From<&TraceRecord> for Position {
    fn from(record: &TraceRecord) -> Self {
        Self {
            lat: record.lat,
            lon: record.lon,
            heading: record.heading,
        }
    }
}

/// Destination for matched positions
///
/// The scanner pushes every match here in traversal order.
pub trait PositionSink {
    fn push(&mut self, position: Position) -> Result<(), OutputError>;
}

/// In-memory result set: three index-correlated columns
///
/// Storage is private so the columns can only grow together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions {
    lat: Vec<f64>,
    lon: Vec<f64>,
    heading: Vec<Option<f64>>,
}

impl Positions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lat: Vec::with_capacity(capacity),
            lon: Vec::with_capacity(capacity),
            heading: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, position: Position) {
        self.lat.push(position.lat);
        self.lon.push(position.lon);
        self.heading.push(position.heading);
    }

    pub fn len(&self) -> usize {
        self.lat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }

    pub fn lat(&self) -> &[f64] {
        &self.lat
    }

    pub fn lon(&self) -> &[f64] {
        &self.lon
    }

    pub fn heading(&self) -> &[Option<f64>] {
        &self.heading
    }

    pub fn get(&self, index: usize) -> Option<Position> {
        Some(Position {
            lat: *self.lat.get(index)?,
            lon: *self.lon.get(index)?,
            heading: *self.heading.get(index)?,
        })
    }

    /// Positions in traversal order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.lat
            .iter()
            .zip(&self.lon)
            .zip(&self.heading)
            .map(|((&lat, &lon), &heading)| Position { lat, lon, heading })
    }

    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>, Vec<Option<f64>>) {
        (self.lat, self.lon, self.heading)
    }
}

impl PositionSink for Positions {
    fn push(&mut self, position: Position) -> Result<(), OutputError> {
        Positions::push(self, position);
        Ok(())
    }
}

impl FromIterator<Position> for Positions {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut positions = Positions::new();
        for position in iter {
            positions.push(position);
        }
        positions
    }
}
