use std::path::Path;

use anyhow::Context;
use roadgraph::roadmap::RoadMapInput;

/// Load road map input from a file, or from standard input when no path is given.
pub fn load_input(path: Option<&Path>) -> anyhow::Result<RoadMapInput> {
    match path {
        Some(path) => RoadMapInput::from_file(path)
            .with_context(|| format!("failed to load road map: {}", path.display())),
        None => RoadMapInput::from_reader(std::io::stdin().lock())
            .context("failed to load road map from standard input"),
    }
}

/// Display name for a location id, falling back to the bare id.
pub fn location_name(input: &RoadMapInput, id: roadgraph::VertexId) -> String {
    input
        .map
        .vertex_info(id)
        .unwrap_or_else(|_| id.to_string())
}
