use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::{NetworkGraph, PathError, Segment, StationId};

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    pub stations: Vec<StationId>,
    pub distance: u64,
}

/// Shortest-path queries over a graph built once from a snapshot of
/// segments.
#[derive(Debug, Clone)]
pub struct PathFinder {
    graph: NetworkGraph,
}

impl PathFinder {
    pub fn new<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> Self {
        PathFinder {
            graph: NetworkGraph::from_segments(segments),
        }
    }

    /// Return the minimum-distance route from `start` to `destination`.
    ///
    /// Every segment is walkable in both directions. When several routes
    /// share the minimum distance, any one of them is returned.
    pub fn find(&self, start: StationId, destination: StationId) -> Result<Path, PathError> {
        if start == destination {
            return Err(PathError::SameEndpoints { station_id: start });
        }
        let start_index = self
            .graph
            .index_of(start)
            .ok_or(PathError::StationNotFound { station_id: start })?;
        let destination_index =
            self.graph
                .index_of(destination)
                .ok_or(PathError::StationNotFound {
                    station_id: destination,
                })?;

        // A zero heuristic turns A* into Dijkstra, with the route attached.
        let (distance, indices) = petgraph::algo::astar(
            self.graph.inner(),
            start_index,
            |finish| finish == destination_index,
            |edge| u64::from(*edge.weight()),
            |_| 0,
        )
        .ok_or(PathError::Unreachable { start, destination })?;

        let stations = indices
            .into_iter()
            .filter_map(|index| self.graph.station_at(index))
            .collect();

        Ok(Path { stations, distance })
    }
}

/// Build a graph from `segments` and query it once.
pub fn find_shortest_path<'a>(
    segments: impl IntoIterator<Item = &'a Segment>,
    start: StationId,
    destination: StationId,
) -> Result<Path, PathError> {
    tracing::info!("Searching shortest path from {} to {}", start, destination);
    PathFinder::new(segments).find(start, destination)
}
