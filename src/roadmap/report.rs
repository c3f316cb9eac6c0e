//! Trip planning and the console trip report.
//!
//! [`plan_trip`] runs a shortest-path query over a [`RoadMap`] with the weight selected by
//! the trip's [`TripMetric`], then walks the resulting predecessor chain into a list of
//! [`Leg`]s. The [`TripReport`] `Display` implementation renders the route in the
//! traditional console layout:
//!
//! ```text
//! Shortest driving time from Irvine to Costa Mesa
//!   Begin at Irvine
//!   Continue to Tustin (6.5 miles @ 55.0mph = 7 mins 5.5 secs)
//!   Continue to Costa Mesa (4.0 miles @ 45.0mph = 5 mins 20.0 secs)
//! Total time: 12 mins 25.5 secs
//! ```

use std::fmt;

use serde::Serialize;

use crate::{
    roadmap::{RoadMap, Trip, TripMetric},
    Result,
};

/// One road segment driven as part of a trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    /// Name of the location this leg arrives at
    pub to: String,
    /// Length of the segment in miles
    pub miles: f64,
    /// Speed limit on the segment in miles per hour
    pub miles_per_hour: f64,
    /// Driving time for the segment in hours
    pub hours: f64,
}

/// The planned route for one trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    /// Name of the start location
    pub from: String,
    /// Name of the destination
    pub to: String,
    /// What the route minimizes
    pub metric: TripMetric,
    /// Segments in driving order; empty when start and destination coincide
    pub legs: Vec<Leg>,
    /// Sum of all leg lengths in miles
    pub total_miles: f64,
    /// Sum of all leg driving times in hours
    pub total_hours: f64,
}

/// A driving time in hours, displayed as hours, minutes and seconds.
///
/// Leading zero units are dropped: `0.5` hours displays as `30 mins 0.0 secs`, and a few
/// seconds display as `4.0 secs`. Seconds are shown with one decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrivingTime(pub f64);

impl fmt::Display for DrivingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0.trunc();
        let fraction = self.0 - hours;
        let minutes = (fraction * 60.0).trunc();
        let seconds = (fraction - minutes / 60.0) * 3600.0;

        if hours != 0.0 {
            write!(f, "{hours:.0} hrs {minutes:.0} mins {seconds:.1} secs")
        } else if minutes != 0.0 {
            write!(f, "{minutes:.0} mins {seconds:.1} secs")
        } else {
            write!(f, "{seconds:.1} secs")
        }
    }
}

impl fmt::Display for TripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.metric {
            TripMetric::Distance => {
                writeln!(f, "Shortest distance from {} to {}", self.from, self.to)?;
            }
            TripMetric::Time => {
                writeln!(f, "Shortest driving time from {} to {}", self.from, self.to)?;
            }
        }
        writeln!(f, "  Begin at {}", self.from)?;

        for leg in &self.legs {
            match self.metric {
                TripMetric::Distance => {
                    writeln!(f, "  Continue to {} ({:.1} miles)", leg.to, leg.miles)?;
                }
                TripMetric::Time => writeln!(
                    f,
                    "  Continue to {} ({:.1} miles @ {:.1}mph = {})",
                    leg.to,
                    leg.miles,
                    leg.miles_per_hour,
                    DrivingTime(leg.hours)
                )?,
            }
        }

        match self.metric {
            TripMetric::Distance => write!(f, "Total distance: {:.1} miles", self.total_miles),
            TripMetric::Time => write!(f, "Total time: {}", DrivingTime(self.total_hours)),
        }
    }
}

/// Plans the best route for a trip.
///
/// # Returns
///
/// `Ok(Some(report))` with the route, or `Ok(None)` if the destination cannot be reached
/// from the start. A map that is strongly connected never yields `None`.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if the trip names a
/// location that is not on the map.
pub fn plan_trip(map: &RoadMap, trip: &Trip) -> Result<Option<TripReport>> {
    let from = map.vertex_info(trip.start)?;
    let to = map.vertex_info(trip.end)?;

    let metric = trip.metric;
    let tree = map.shortest_path_tree(trip.start, |segment| metric.weight(segment))?;
    let Some(path) = tree.path_to(trip.end) else {
        log::debug!("no route from {} to {}", trip.start, trip.end);
        return Ok(None);
    };

    let mut legs = Vec::with_capacity(path.len().saturating_sub(1));
    for hop in path.windows(2) {
        let segment = map.edge_info(hop[0], hop[1])?;
        legs.push(Leg {
            to: map.vertex_info(hop[1])?,
            miles: segment.miles,
            miles_per_hour: segment.miles_per_hour,
            hours: segment.hours(),
        });
    }

    // Summing an empty iterator of floats yields -0.0
    let total_miles = legs.iter().fold(0.0, |total, leg| total + leg.miles);
    let total_hours = legs.iter().fold(0.0, |total, leg| total + leg.hours);

    Ok(Some(TripReport {
        from,
        to,
        metric,
        legs,
        total_miles,
        total_hours,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        roadmap::{RoadMapInput, RoadSegment},
        test::v,
        Error,
    };

    /// Irvine -> Tustin -> Costa Mesa is shorter, Irvine -> Costa Mesa is faster.
    fn create_orange_county() -> RoadMap {
        let mut map = RoadMap::new();
        map.add_vertex(v(0), "Irvine".to_string()).unwrap();
        map.add_vertex(v(1), "Tustin".to_string()).unwrap();
        map.add_vertex(v(2), "Costa Mesa".to_string()).unwrap();
        map.add_edge(v(0), v(1), RoadSegment::new(6.5, 55.0)).unwrap();
        map.add_edge(v(1), v(2), RoadSegment::new(4.0, 45.0)).unwrap();
        map.add_edge(v(0), v(2), RoadSegment::new(12.0, 65.0)).unwrap();
        map.add_edge(v(2), v(0), RoadSegment::new(12.0, 65.0)).unwrap();
        map
    }

    fn trip(start: i64, end: i64, metric: TripMetric) -> Trip {
        Trip {
            start: v(start),
            end: v(end),
            metric,
        }
    }

    #[test]
    fn test_driving_time_format() {
        assert_eq!(DrivingTime(0.5).to_string(), "30 mins 0.0 secs");
        assert_eq!(DrivingTime(1.25).to_string(), "1 hrs 15 mins 0.0 secs");
        assert_eq!(DrivingTime(2.0).to_string(), "2 hrs 0 mins 0.0 secs");
        assert_eq!(DrivingTime(4.0 / 3600.0).to_string(), "4.0 secs");
        assert_eq!(DrivingTime(0.0).to_string(), "0.0 secs");
        assert_eq!(DrivingTime(6.5 / 55.0).to_string(), "7 mins 5.5 secs");
    }

    #[test]
    fn test_distance_report() {
        let map = create_orange_county();
        let report = plan_trip(&map, &trip(0, 2, TripMetric::Distance))
            .unwrap()
            .unwrap();

        assert_eq!(report.legs.len(), 2);
        assert_eq!(report.total_miles, 10.5);
        assert_eq!(
            report.to_string(),
            "Shortest distance from Irvine to Costa Mesa\n\
             \x20 Begin at Irvine\n\
             \x20 Continue to Tustin (6.5 miles)\n\
             \x20 Continue to Costa Mesa (4.0 miles)\n\
             Total distance: 10.5 miles"
        );
    }

    #[test]
    fn test_time_report() {
        let map = create_orange_county();
        let report = plan_trip(&map, &trip(0, 2, TripMetric::Time))
            .unwrap()
            .unwrap();

        assert_eq!(report.legs.len(), 1);
        assert_eq!(report.legs[0].to, "Costa Mesa");
        assert_eq!(
            report.to_string(),
            "Shortest driving time from Irvine to Costa Mesa\n\
             \x20 Begin at Irvine\n\
             \x20 Continue to Costa Mesa (12.0 miles @ 65.0mph = 11 mins 4.6 secs)\n\
             Total time: 11 mins 4.6 secs"
        );
    }

    #[test]
    fn test_trip_to_self() {
        let map = create_orange_county();
        let report = plan_trip(&map, &trip(1, 1, TripMetric::Distance))
            .unwrap()
            .unwrap();

        assert!(report.legs.is_empty());
        assert_eq!(
            report.to_string(),
            "Shortest distance from Tustin to Tustin\n  Begin at Tustin\nTotal distance: 0.0 miles"
        );

        let report = plan_trip(&map, &trip(1, 1, TripMetric::Time))
            .unwrap()
            .unwrap();
        assert!(report.total_hours.is_sign_positive());
        assert_eq!(
            report.to_string(),
            "Shortest driving time from Tustin to Tustin\n  Begin at Tustin\nTotal time: 0.0 secs"
        );
    }

    #[test]
    fn test_unreachable_destination() {
        let mut map = create_orange_county();
        map.add_vertex(v(3), "Catalina".to_string()).unwrap();
        assert_eq!(plan_trip(&map, &trip(0, 3, TripMetric::Time)).unwrap(), None);
    }

    #[test]
    fn test_unknown_location() {
        let map = create_orange_county();
        assert!(matches!(
            plan_trip(&map, &trip(0, 9, TripMetric::Distance)),
            Err(Error::VertexNotFound(id)) if id == v(9)
        ));
        assert!(matches!(
            plan_trip(&map, &trip(9, 0, TripMetric::Distance)),
            Err(Error::VertexNotFound(id)) if id == v(9)
        ));
    }

    #[test]
    fn test_report_from_parsed_input() {
        let input = RoadMapInput::parse(
            "3\n0 Irvine\n1 Tustin\n2 Costa Mesa\n\
             3\n0 1 6.5 55\n1 2 4.0 45\n2 0 5.0 65\n\
             1\n0 2 t\n",
        )
        .unwrap();
        let report = plan_trip(&input.map, &input.trips[0]).unwrap().unwrap();

        assert_eq!(
            report.to_string(),
            "Shortest driving time from Irvine to Costa Mesa\n\
             \x20 Begin at Irvine\n\
             \x20 Continue to Tustin (6.5 miles @ 55.0mph = 7 mins 5.5 secs)\n\
             \x20 Continue to Costa Mesa (4.0 miles @ 45.0mph = 5 mins 20.0 secs)\n\
             Total time: 12 mins 25.5 secs"
        );
    }
}
