use std::{
    io::{self, Write},
    path::Path,
};

use anyhow::Context;
use roadgraph::roadmap::{plan_trip, RoadMapInput, TripReport};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_input, location_name},
    output::{emit, Render},
};

#[derive(Debug, Serialize)]
pub struct PlanOutput {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<usize>,
    pub trips: Vec<TripReport>,
}

impl Render for PlanOutput {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        if !self.connected {
            return writeln!(out, "Disconnected Map");
        }

        for report in &self.trips {
            writeln!(out, "{report}")?;
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Plans every trip of a strongly connected map; a disconnected map plans nothing.
pub fn plan(input: &RoadMapInput) -> anyhow::Result<PlanOutput> {
    if !input.map.is_strongly_connected() {
        let components = input.map.strongly_connected_components().len();
        log::debug!("road map splits into {components} strongly connected components");

        return Ok(PlanOutput {
            connected: false,
            components: Some(components),
            trips: Vec::new(),
        });
    }

    let mut trips = Vec::with_capacity(input.trips.len());
    for trip in &input.trips {
        let report = plan_trip(&input.map, trip)
            .with_context(|| format!("failed to plan trip from {} to {}", trip.start, trip.end))?;
        match report {
            Some(report) => trips.push(report),
            None => log::warn!(
                "no route from {} to {}",
                location_name(input, trip.start),
                location_name(input, trip.end)
            ),
        }
    }

    Ok(PlanOutput {
        connected: true,
        components: None,
        trips,
    })
}

pub fn run(path: Option<&Path>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let input = load_input(path)?;
    emit(&plan(&input)?, opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(output: &PlanOutput) -> String {
        let mut out = Vec::new();
        output.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_disconnected_map() {
        let input =
            RoadMapInput::parse(include_str!("../../../tests/roadmaps/disconnected.txt")).unwrap();
        let output = plan(&input).unwrap();

        assert!(!output.connected);
        assert_eq!(output.components, Some(2));
        assert!(output.trips.is_empty());
        assert_eq!(rendered(&output), "Disconnected Map\n");
    }

    #[test]
    fn test_reports_separated_by_blank_lines() {
        let input = RoadMapInput::parse(
            "2\n0 Irvine\n1 Tustin\n2\n0 1 6.5 55\n1 0 6.5 55\n2\n0 1 d\n1 1 d\n",
        )
        .unwrap();
        let output = plan(&input).unwrap();

        assert_eq!(output.trips.len(), 2);
        assert_eq!(
            rendered(&output),
            "Shortest distance from Irvine to Tustin\n\
             \x20 Begin at Irvine\n\
             \x20 Continue to Tustin (6.5 miles)\n\
             Total distance: 6.5 miles\n\
             \n\
             Shortest distance from Tustin to Tustin\n\
             \x20 Begin at Tustin\n\
             Total distance: 0.0 miles\n\
             \n"
        );
    }

    #[test]
    fn test_unknown_trip_location_is_an_error() {
        let input = RoadMapInput::parse("1\n0 Irvine\n1\n0 0 1 1\n1\n0 4 t\n").unwrap();
        let error = plan(&input).unwrap_err();
        assert!(error.to_string().contains("failed to plan trip from 0 to 4"));
    }
}
