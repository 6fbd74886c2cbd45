use serde::Serialize;

use crate::{LineId, LineTopology, Segment, StationId, TopologyError};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    topology: LineTopology,
}

impl Line {
    /// Create a line made of a single segment from `up_station` to
    /// `down_station`.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<Self, TopologyError> {
        let id = LineId::new();
        let topology = LineTopology::new(id, up_station, down_station, distance)?;
        let line = Line {
            id,
            name: name.into(),
            color: color.into(),
            topology,
        };
        tracing::info!("Created line {} ({})", line.name, line.id);
        Ok(line)
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn topology(&self) -> &LineTopology {
        &self.topology
    }

    pub fn segments(&self) -> &[Segment] {
        self.topology.segments()
    }

    pub fn stations(&self) -> Vec<StationId> {
        self.topology.stations()
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.topology.contains(station)
    }

    pub fn last_station(&self) -> StationId {
        self.topology.last_station()
    }

    pub fn total_distance(&self) -> u64 {
        self.topology.total_distance()
    }

    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    pub fn add_segment(
        &mut self,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<(), TopologyError> {
        tracing::info!(
            "Adding segment {} -> {} ({}) to line {}",
            up_station,
            down_station,
            distance,
            self.name
        );
        self.topology.insert(up_station, down_station, distance)
    }

    pub fn remove_station(&mut self, station: StationId) -> Result<(), TopologyError> {
        tracing::info!("Removing station {} from line {}", station, self.name);
        self.topology.remove(station)
    }
}
