//! Road map trip planning on top of [`Digraph`](crate::graph::Digraph).
//!
//! A road map is a directed graph whose vertices are named locations and whose edges are
//! one-way road segments carrying a length and a speed limit. Trips ask for the shortest
//! route between two locations, measured either by distance or by driving time.
//!
//! # Key Components
//!
//! - [`RoadMap`] - The graph type: location names on vertices, [`RoadSegment`]s on edges
//! - [`RoadMapInput`] - Parser for the line-oriented road map and trip format
//! - [`plan_trip`] / [`TripReport`] - Route computation and its console rendering
//!
//! # Examples
//!
//! ```rust
//! use roadgraph::roadmap::{plan_trip, RoadMapInput};
//!
//! let input = RoadMapInput::parse(
//!     "2\n0 Irvine\n1 Tustin\n2\n0 1 6.5 55\n1 0 6.5 55\n1\n0 1 d\n",
//! )?;
//! assert!(input.map.is_strongly_connected());
//!
//! let report = plan_trip(&input.map, &input.trips[0])?.expect("route exists");
//! assert_eq!(report.total_miles, 6.5);
//! # Ok::<(), roadgraph::Error>(())
//! ```

mod reader;
mod report;

pub use reader::RoadMapInput;
pub use report::{plan_trip, DrivingTime, Leg, TripReport};

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::graph::{Digraph, VertexId};

/// A directed road map: location names on vertices, road segments on edges.
pub type RoadMap = Digraph<String, RoadSegment>;

/// A one-way stretch of road between two adjacent locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoadSegment {
    /// Length of the segment in miles
    pub miles: f64,
    /// Speed limit on the segment in miles per hour
    pub miles_per_hour: f64,
}

impl RoadSegment {
    /// Creates a new road segment.
    #[must_use]
    pub const fn new(miles: f64, miles_per_hour: f64) -> Self {
        RoadSegment {
            miles,
            miles_per_hour,
        }
    }

    /// Time needed to drive the segment at its speed limit, in hours.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.miles / self.miles_per_hour
    }
}

/// What a trip minimizes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, EnumIter, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum TripMetric {
    /// Shortest total length in miles
    #[strum(to_string = "distance", serialize = "d")]
    Distance,
    /// Shortest total driving time at the posted speed limits
    #[strum(to_string = "time", serialize = "t")]
    Time,
}

impl TripMetric {
    /// The edge weight this metric minimizes for one road segment.
    #[must_use]
    pub fn weight(self, segment: &RoadSegment) -> f64 {
        match self {
            TripMetric::Distance => segment.miles,
            TripMetric::Time => segment.hours(),
        }
    }
}

/// A request for the best route between two locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trip {
    /// Location the trip starts at
    pub start: VertexId,
    /// Location the trip ends at
    pub end: VertexId,
    /// What the route should minimize
    pub metric: TripMetric,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_segment_hours() {
        let segment = RoadSegment::new(30.0, 60.0);
        assert_eq!(segment.hours(), 0.5);
    }

    #[test]
    fn test_metric_parsing() {
        assert_eq!(TripMetric::from_str("d").unwrap(), TripMetric::Distance);
        assert_eq!(TripMetric::from_str("t").unwrap(), TripMetric::Time);
        assert_eq!(TripMetric::from_str("D").unwrap(), TripMetric::Distance);
        assert_eq!(TripMetric::from_str("time").unwrap(), TripMetric::Time);
        assert!(TripMetric::from_str("x").is_err());
    }

    #[test]
    fn test_metric_display_round_trips() {
        for metric in TripMetric::iter() {
            assert_eq!(TripMetric::from_str(&metric.to_string()).unwrap(), metric);
        }
    }

    #[test]
    fn test_metric_weight() {
        let segment = RoadSegment::new(10.0, 40.0);
        assert_eq!(TripMetric::Distance.weight(&segment), 10.0);
        assert_eq!(TripMetric::Time.weight(&segment), 0.25);
    }
}
