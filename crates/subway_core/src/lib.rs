mod graph;
mod line;
mod models;
mod path;
mod topology;

pub use crate::graph::NetworkGraph;
pub use crate::line::Line;
pub use crate::models::*;
pub use crate::path::{Path, PathFinder, find_shortest_path};
pub use crate::topology::LineTopology;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("Up station and down station are both {station_id}")]
    IdenticalEndpoints { station_id: StationId },
    #[error("Segment distance must be greater than zero")]
    InvalidDistance,
    #[error("Stations {up_station} and {down_station} are both already registered on the line")]
    BothStationsRegistered {
        up_station: StationId,
        down_station: StationId,
    },
    #[error("Neither {up_station} nor {down_station} is registered on the line")]
    NeitherStationRegistered {
        up_station: StationId,
        down_station: StationId,
    },
    #[error(
        "New segment distance {distance} must be less than the {existing} of the segment it splits"
    )]
    DistanceNotShorter { distance: u32, existing: u32 },
    #[error("Cannot remove the only segment of line {line_id}")]
    OnlyOneSegment { line_id: LineId },
    #[error("Station {station_id} is not registered on the line")]
    StationNotInTopology { station_id: StationId },
    #[error("Merged segment distance overflows")]
    DistanceOverflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Start and destination must differ, both are {station_id}")]
    SameEndpoints { station_id: StationId },
    #[error("Station {station_id} not found in the network")]
    StationNotFound { station_id: StationId },
    #[error("No path exists from {start} to {destination}")]
    Unreachable {
        start: StationId,
        destination: StationId,
    },
}
