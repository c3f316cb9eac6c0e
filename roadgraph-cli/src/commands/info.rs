use std::{
    io::{self, Write},
    path::Path,
};

use roadgraph::{roadmap::RoadMapInput, VertexId};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_input, location_name},
    output::{emit, plain_table, write_table, Render},
};

#[derive(Debug, Serialize)]
pub struct MapInfo {
    pub location_count: usize,
    pub road_count: usize,
    pub trip_count: usize,
    pub strongly_connected: bool,
    pub components: Vec<Vec<String>>,
    pub locations: Vec<LocationInfo>,
}

#[derive(Debug, Serialize)]
pub struct LocationInfo {
    pub id: VertexId,
    pub name: String,
    pub roads_out: usize,
}

impl Render for MapInfo {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Locations:          {}", self.location_count)?;
        writeln!(out, "Roads:              {}", self.road_count)?;
        writeln!(out, "Trips:              {}", self.trip_count)?;
        let connected = if self.strongly_connected { "yes" } else { "no" };
        writeln!(out, "Strongly connected: {connected}")?;
        writeln!(out, "Components:         {}", self.components.len())?;

        if !self.locations.is_empty() {
            writeln!(out, "\nLocations:")?;
            let mut table = plain_table(&["Id", "Name", "Roads out"], &[0, 2]);
            for location in &self.locations {
                table.add_row(vec![
                    location.id.to_string(),
                    location.name.clone(),
                    location.roads_out.to_string(),
                ]);
            }
            write_table(out, &table, "  ")?;
        }

        if self.components.len() > 1 {
            writeln!(out, "\nComponents:")?;
            for (index, component) in self.components.iter().enumerate() {
                writeln!(out, "  {}: {}", index + 1, component.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Summarizes a road map: counts, connectivity and the locations by id.
pub fn describe(input: &RoadMapInput) -> anyhow::Result<MapInfo> {
    let map = &input.map;

    let components: Vec<Vec<String>> = map
        .strongly_connected_components()
        .into_iter()
        .map(|component| {
            component
                .into_iter()
                .map(|id| location_name(input, id))
                .collect()
        })
        .collect();

    let mut locations = Vec::with_capacity(map.vertex_count());
    for id in map.vertices() {
        locations.push(LocationInfo {
            id,
            name: map.vertex_info(id)?,
            roads_out: map.out_degree(id)?,
        });
    }

    Ok(MapInfo {
        location_count: map.vertex_count(),
        road_count: map.edge_count(),
        trip_count: input.trips.len(),
        strongly_connected: map.is_strongly_connected(),
        components,
        locations,
    })
}

pub fn run(path: Option<&Path>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let input = load_input(path)?;
    emit(&describe(&input)?, opts)
}
