//! Reader for the line-oriented road map format.
//!
//! An input consists of three counted sections, in order:
//!
//! ```text
//! # Locations: count, then "<id> <name>" (the name may contain spaces)
//! 3
//! 0 Irvine
//! 1 Tustin
//! 2 Costa Mesa
//! # Roads: count, then "<from> <to> <miles> <miles per hour>"
//! 2
//! 0 1 6.5 55
//! 1 2 4.0 45
//! # Trips: count, then "<start> <end> <d|t>"
//! 1
//! 0 2 t
//! ```
//!
//! Blank lines and lines whose first non-blank character is `#` are ignored anywhere.
//! Every syntax problem is reported as [`Error::Malformed`](crate::Error::Malformed) with
//! the 1-based line number. Duplicate locations or roads, and roads between unknown
//! locations, are rejected by the graph itself.

use std::{fs, io::Read, path::Path, str::FromStr};

use crate::{
    graph::VertexId,
    roadmap::{RoadMap, RoadSegment, Trip, TripMetric},
    Result,
};

/// A parsed road map together with the trips requested against it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadMapInput {
    /// The road network
    pub map: RoadMap,
    /// Trips in input order
    pub trips: Vec<Trip>,
}

impl RoadMapInput {
    /// Parses a road map and its trips from text.
    ///
    /// # Errors
    ///
    /// - [`Error::Malformed`](crate::Error::Malformed) on syntax errors, missing sections
    ///   or trailing content
    /// - [`Error::DuplicateVertex`](crate::Error::DuplicateVertex),
    ///   [`Error::DuplicateEdge`](crate::Error::DuplicateEdge) or
    ///   [`Error::VertexNotFound`](crate::Error::VertexNotFound) when a location or road
    ///   cannot be added to the map
    pub fn parse(input: &str) -> Result<Self> {
        let mut records = Records::new(input);

        let mut map = RoadMap::new();
        let locations = records.read_count("location count")?;
        for _ in 0..locations {
            let (line, text) = records.expect_record("location")?;
            let (id, name) = parse_location(line, text)?;
            map.add_vertex(id, name)?;
        }

        let roads = records.read_count("road count")?;
        for _ in 0..roads {
            let (line, text) = records.expect_record("road")?;
            let (from, to, segment) = parse_road(line, text)?;
            map.add_edge(from, to, segment)?;
        }

        let trip_count = records.read_count("trip count")?;
        let mut trips = Vec::with_capacity(trip_count);
        for _ in 0..trip_count {
            let (line, text) = records.expect_record("trip")?;
            trips.push(parse_trip(line, text)?);
        }

        if let Some((line, _)) = records.next() {
            return Err(malformed_error!(line, "Unexpected content after the last trip"));
        }

        log::debug!(
            "read road map with {} locations, {} roads and {} trips",
            map.vertex_count(),
            map.edge_count(),
            trips.len()
        );

        Ok(RoadMapInput { map, trips })
    }

    /// Reads and parses a road map from any reader, such as standard input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if reading fails, otherwise the errors of
    /// [`parse`](Self::parse).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }

    /// Reads and parses a road map from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read, otherwise the
    /// errors of [`parse`](Self::parse).
    pub fn from_file(path: &Path) -> Result<Self> {
        let input = fs::read_to_string(path)?;
        Self::parse(&input)
    }
}

/// Iterator over the meaningful lines of an input, with their 1-based line numbers.
struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    last_line: usize,
}

impl<'a> Records<'a> {
    fn new(input: &'a str) -> Self {
        Records {
            lines: input.lines().enumerate(),
            last_line: 0,
        }
    }

    /// Returns the next record, or a malformed error naming what was expected.
    fn expect_record(&mut self, what: &str) -> Result<(usize, &'a str)> {
        match self.next() {
            Some(record) => Ok(record),
            None => Err(malformed_error!(
                self.last_line + 1,
                "Unexpected end of input, expected {}",
                what
            )),
        }
    }

    fn read_count(&mut self, what: &str) -> Result<usize> {
        let (line, text) = self.expect_record(what)?;
        text.parse::<usize>()
            .map_err(|_| malformed_error!(line, "Invalid {} '{}'", what, text))
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, raw) in self.lines.by_ref() {
            self.last_line = index + 1;
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            return Some((index + 1, text));
        }
        None
    }
}

/// Parses the next whitespace-separated field of a record.
fn field<'a, T, I>(line: usize, fields: &mut I, what: &str) -> Result<T>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let Some(text) = fields.next() else {
        return Err(malformed_error!(line, "Missing {}", what));
    };
    text.parse()
        .map_err(|_| malformed_error!(line, "Invalid {} '{}'", what, text))
}

fn no_trailing<'a, I>(line: usize, fields: &mut I) -> Result<()>
where
    I: Iterator<Item = &'a str>,
{
    match fields.next() {
        Some(extra) => Err(malformed_error!(line, "Unexpected trailing field '{}'", extra)),
        None => Ok(()),
    }
}

fn parse_location(line: usize, text: &str) -> Result<(VertexId, String)> {
    let (id, name) = text
        .split_once(char::is_whitespace)
        .ok_or_else(|| malformed_error!(line, "Location needs an id and a name"))?;
    let id: i64 = id
        .parse()
        .map_err(|_| malformed_error!(line, "Invalid location id '{}'", id))?;

    Ok((VertexId::new(id), name.trim().to_string()))
}

fn parse_road(line: usize, text: &str) -> Result<(VertexId, VertexId, RoadSegment)> {
    let mut fields = text.split_whitespace();
    let from: i64 = field(line, &mut fields, "road source")?;
    let to: i64 = field(line, &mut fields, "road destination")?;
    let miles: f64 = field(line, &mut fields, "road length")?;
    let miles_per_hour: f64 = field(line, &mut fields, "speed limit")?;
    no_trailing(line, &mut fields)?;

    if !miles.is_finite() || miles < 0.0 {
        return Err(malformed_error!(
            line,
            "Road length must be a non-negative number, got {}",
            miles
        ));
    }
    if !miles_per_hour.is_finite() || miles_per_hour <= 0.0 {
        return Err(malformed_error!(
            line,
            "Speed limit must be a positive number, got {}",
            miles_per_hour
        ));
    }

    Ok((
        VertexId::new(from),
        VertexId::new(to),
        RoadSegment::new(miles, miles_per_hour),
    ))
}

fn parse_trip(line: usize, text: &str) -> Result<Trip> {
    let mut fields = text.split_whitespace();
    let start: i64 = field(line, &mut fields, "trip start")?;
    let end: i64 = field(line, &mut fields, "trip end")?;
    let metric: TripMetric = field(line, &mut fields, "trip metric")?;
    no_trailing(line, &mut fields)?;

    Ok(Trip {
        start: VertexId::new(start),
        end: VertexId::new(end),
        metric,
    })
}
