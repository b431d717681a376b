//! Named schema for readsb per-aircraft trace files.
//!
//! A trace file looks like
//! `{"icao": "...", "timestamp": 1754006400.0, "trace": [[offset, lat, lon, alt, gs, track, ...], ...]}`.
//! Records are positional arrays; [`TraceRecord`] gives the positions we
//! use a name and keeps everything else as raw JSON.

use crate::utils::config::MIN_RECORD_FIELDS;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// One decompressed trace file
#[derive(Debug, Clone, Deserialize)]
pub struct TraceFile {
    /// Base epoch time; record offsets are relative to it
    pub timestamp: f64,

    /// Samples in file order
    pub trace: Vec<TraceRecord>,

    /// ICAO hex address, when the file carries one
    #[serde(default)]
    pub icao: Option<String>,
}

/// A single position sample from a trace
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRecord {
    /// Seconds since the file timestamp (field 0)
    pub offset: f64,
    /// Latitude in degrees (field 1)
    pub lat: f64,
    /// Longitude in degrees (field 2)
    pub lon: f64,
    /// Field 3, passed through without interpretation
    pub field3: Value,
    /// Field 4, passed through without interpretation
    pub field4: Value,
    /// Heading in degrees (field 5); `null` in the file becomes `None`
    pub heading: Option<f64>,
    /// Fields 6 and beyond
    pub extra: Vec<Value>,
}

impl TraceRecord {
    /// Absolute epoch time of this sample given its file's base timestamp
    pub fn absolute_time(&self, base: f64) -> f64 {
        base + self.offset
    }
}

impl TraceFile {
    /// Earliest and latest record offsets, or `None` for an empty trace
    pub fn offset_span(&self) -> Option<(f64, f64)> {
        self.trace.iter().fold(None, |span, record| match span {
            None => Some((record.offset, record.offset)),
            Some((lo, hi)) => Some((lo.min(record.offset), hi.max(record.offset))),
        })
    }
}

impl<'de> Deserialize<'de> for TraceRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TraceRecordVisitor)
    }
}

struct TraceRecordVisitor;

impl<'de> Visitor<'de> for TraceRecordVisitor {
    type Value = TraceRecord;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a trace record with at least {} fields", MIN_RECORD_FIELDS)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<TraceRecord, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let offset = next_field(&mut seq, 0)?;
        let lat = next_field(&mut seq, 1)?;
        let lon = next_field(&mut seq, 2)?;
        let field3 = next_field(&mut seq, 3)?;
        let field4 = next_field(&mut seq, 4)?;
        let heading = next_field(&mut seq, 5)?;

        let mut extra = Vec::new();
        while let Some(value) = seq.next_element::<Value>()? {
            extra.push(value);
        }

        Ok(TraceRecord {
            offset,
            lat,
            lon,
            field3,
            field4,
            heading,
            extra,
        })
    }
}

fn next_field<'de, A, T>(seq: &mut A, index: usize) -> Result<T, A::Error>
where
    A: SeqAccess<'de>,
    T: Deserialize<'de>,
{
    seq.next_element()?
        .ok_or_else(|| de::Error::invalid_length(index, &TraceRecordVisitor))
}
