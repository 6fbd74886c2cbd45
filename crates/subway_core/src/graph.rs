use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::{Segment, StationId};

/// Undirected multigraph over every segment handed to it. Segments sharing
/// both endpoints stay separate edges.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    graph: UnGraph<StationId, u32>,
    node_indices: HashMap<StationId, NodeIndex>,
}

impl NetworkGraph {
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> Self {
        let mut network = NetworkGraph::default();
        for segment in segments {
            let up = network.node(segment.up_station);
            let down = network.node(segment.down_station);
            network.graph.add_edge(up, down, segment.distance);
        }
        network
    }

    fn node(&mut self, station: StationId) -> NodeIndex {
        if let Some(index) = self.node_indices.get(&station) {
            return *index;
        }
        let index = self.graph.add_node(station);
        self.node_indices.insert(station, index);
        index
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn segment_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.node_indices.contains_key(&station)
    }

    pub(crate) fn index_of(&self, station: StationId) -> Option<NodeIndex> {
        self.node_indices.get(&station).copied()
    }

    pub(crate) fn station_at(&self, index: NodeIndex) -> Option<StationId> {
        self.graph.node_weight(index).copied()
    }

    pub(crate) fn inner(&self) -> &UnGraph<StationId, u32> {
        &self.graph
    }
}
