//! In-memory registry of stations and lines.
//!
//! `Network` resolves ids for its callers and hands the core exactly the data
//! each operation needs: one line's topology for mutations, every line's
//! segments for path queries.

use serde::{Deserialize, Serialize};
use subway_core::{Line, LineId, PathError, Station, StationId, TopologyError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Station {station_id} not found")]
    StationNotFound { station_id: StationId },
    #[error("Station named {name:?} not found")]
    StationNameNotFound { name: String },
    #[error("Station {station_id} is still used by line {line_id}")]
    StationInUse {
        station_id: StationId,
        line_id: LineId,
    },
    #[error("Line {line_id} not found")]
    LineNotFound { line_id: LineId },
    #[error("Line named {name:?} not found")]
    LineNameNotFound { name: String },
    #[error(transparent)]
    Topology(#[from] TopologyError),
    #[error(transparent)]
    Path(#[from] PathError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLine {
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLine {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSegment {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<Station>,
    pub distance: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResponse {
    pub stations: Vec<Station>,
    pub distance: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    lines: Vec<Line>,
}

impl Network {
    pub fn new() -> Self {
        Network::default()
    }

    pub fn create_station(&mut self, name: impl Into<String>) -> Station {
        let station = Station::new(name);
        tracing::info!("Created station {} ({})", station.name(), station.id());
        self.stations.push(station.clone());
        station
    }

    /// Stations in creation order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, station_id: StationId) -> Result<&Station, EngineError> {
        self.stations
            .iter()
            .find(|station| station.id() == station_id)
            .ok_or(EngineError::StationNotFound { station_id })
    }

    pub fn station_by_name(&self, name: &str) -> Result<&Station, EngineError> {
        self.stations
            .iter()
            .find(|station| station.name() == name)
            .ok_or_else(|| EngineError::StationNameNotFound { name: name.into() })
    }

    /// Delete a station no line references anymore.
    pub fn delete_station(&mut self, station_id: StationId) -> Result<(), EngineError> {
        tracing::info!("Deleting station {}", station_id);
        self.station(station_id)?;
        if let Some(line) = self.lines.iter().find(|line| line.contains(station_id)) {
            return Err(EngineError::StationInUse {
                station_id,
                line_id: line.id(),
            });
        }
        self.stations.retain(|station| station.id() != station_id);
        Ok(())
    }

    pub fn create_line(&mut self, request: CreateLine) -> Result<&Line, EngineError> {
        self.station(request.up_station_id)?;
        self.station(request.down_station_id)?;

        let line = Line::new(
            request.name,
            request.color,
            request.up_station_id,
            request.down_station_id,
            request.distance,
        )?;
        self.lines.push(line);
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Lines in creation order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, line_id: LineId) -> Result<&Line, EngineError> {
        self.lines
            .iter()
            .find(|line| line.id() == line_id)
            .ok_or(EngineError::LineNotFound { line_id })
    }

    pub fn line_by_name(&self, name: &str) -> Result<&Line, EngineError> {
        self.lines
            .iter()
            .find(|line| line.name() == name)
            .ok_or_else(|| EngineError::LineNameNotFound { name: name.into() })
    }

    fn line_mut(&mut self, line_id: LineId) -> Result<&mut Line, EngineError> {
        self.lines
            .iter_mut()
            .find(|line| line.id() == line_id)
            .ok_or(EngineError::LineNotFound { line_id })
    }

    pub fn update_line(&mut self, line_id: LineId, request: UpdateLine) -> Result<(), EngineError> {
        tracing::info!("Updating line {}", line_id);
        self.line_mut(line_id)?.update(request.name, request.color);
        Ok(())
    }

    pub fn delete_line(&mut self, line_id: LineId) -> Result<(), EngineError> {
        tracing::info!("Deleting line {}", line_id);
        self.line(line_id)?;
        self.lines.retain(|line| line.id() != line_id);
        Ok(())
    }

    pub fn add_segment(&mut self, line_id: LineId, request: AddSegment) -> Result<(), EngineError> {
        self.station(request.up_station_id)?;
        self.station(request.down_station_id)?;

        self.line_mut(line_id)?.add_segment(
            request.up_station_id,
            request.down_station_id,
            request.distance,
        )?;
        Ok(())
    }

    pub fn remove_station_from_line(
        &mut self,
        line_id: LineId,
        station_id: StationId,
    ) -> Result<(), EngineError> {
        self.line_mut(line_id)?.remove_station(station_id)?;
        Ok(())
    }

    /// The line with its stations resolved, in chain order.
    pub fn line_response(&self, line_id: LineId) -> Result<LineResponse, EngineError> {
        let line = self.line(line_id)?;
        Ok(LineResponse {
            id: line.id(),
            name: line.name().into(),
            color: line.color().into(),
            stations: self.resolve(&line.stations())?,
            distance: line.total_distance(),
        })
    }

    /// Shortest route between two registered stations across every line.
    pub fn shortest_path(
        &self,
        start_id: StationId,
        destination_id: StationId,
    ) -> Result<PathResponse, EngineError> {
        if start_id == destination_id {
            return Err(PathError::SameEndpoints {
                station_id: start_id,
            }
            .into());
        }
        self.station(start_id)?;
        self.station(destination_id)?;

        let segments = self.lines.iter().flat_map(|line| line.segments());
        let path = subway_core::find_shortest_path(segments, start_id, destination_id)?;

        Ok(PathResponse {
            stations: self.resolve(&path.stations)?,
            distance: path.distance,
        })
    }

    fn resolve(&self, station_ids: &[StationId]) -> Result<Vec<Station>, EngineError> {
        station_ids
            .iter()
            .map(|station_id| self.station(*station_id).cloned())
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn names(stations: &[Station]) -> Vec<&str> {
        stations.iter().map(|s| s.name()).collect()
    }

    fn default_network() -> (Network, Vec<StationId>) {
        let mut network = Network::new();
        let ids = ["Gangnam", "Yangjae", "Pangyo", "Jeongja"]
            .into_iter()
            .map(|name| network.create_station(name).id())
            .collect();
        (network, ids)
    }

    fn create_line(
        network: &mut Network,
        name: &str,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> LineId {
        network
            .create_line(CreateLine {
                name: name.into(),
                color: "red".into(),
                up_station_id: up,
                down_station_id: down,
                distance,
            })
            .expect("Could not create the line")
            .id()
    }

    #[test]
    fn test_create_and_list_stations() {
        let (network, ids) = default_network();

        assert_eq!(
            names(network.stations()),
            vec!["Gangnam", "Yangjae", "Pangyo", "Jeongja"]
        );
        assert_eq!(network.station(ids[1]).unwrap().name(), "Yangjae");
        assert_eq!(network.station_by_name("Pangyo").unwrap().id(), ids[2]);
        assert!(matches!(
            network.station_by_name("Seoul"),
            Err(EngineError::StationNameNotFound { .. })
        ));
    }

    #[test]
    fn test_create_line_with_unknown_station() {
        let (mut network, ids) = default_network();
        let unknown = StationId::new();

        let result = network.create_line(CreateLine {
            name: "Shinbundang".into(),
            color: "red".into(),
            up_station_id: ids[0],
            down_station_id: unknown,
            distance: 10,
        });

        match result {
            Err(EngineError::StationNotFound { station_id }) => assert_eq!(station_id, unknown),
            _ => panic!("Expected StationNotFound error"),
        }
        assert!(network.lines().is_empty());
    }

    #[test]
    fn test_create_line_with_identical_stations() {
        let (mut network, ids) = default_network();

        let result = network.create_line(CreateLine {
            name: "Shinbundang".into(),
            color: "red".into(),
            up_station_id: ids[0],
            down_station_id: ids[0],
            distance: 10,
        });

        assert!(matches!(
            result,
            Err(EngineError::Topology(TopologyError::IdenticalEndpoints { .. }))
        ));
    }

    #[test]
    fn test_line_segments_round_trip() {
        let (mut network, ids) = default_network();
        let line_id = create_line(&mut network, "Shinbundang", ids[0], ids[1], 10);

        network
            .add_segment(
                line_id,
                AddSegment {
                    up_station_id: ids[1],
                    down_station_id: ids[3],
                    distance: 8,
                },
            )
            .expect("Could not append");
        network
            .add_segment(
                line_id,
                AddSegment {
                    up_station_id: ids[2],
                    down_station_id: ids[3],
                    distance: 3,
                },
            )
            .expect("Could not split");

        let response = network.line_response(line_id).unwrap();
        assert_eq!(
            names(&response.stations),
            vec!["Gangnam", "Yangjae", "Pangyo", "Jeongja"]
        );
        assert_eq!(response.distance, 18);

        network
            .remove_station_from_line(line_id, ids[2])
            .expect("Could not remove");
        let response = network.line_response(line_id).unwrap();
        assert_eq!(names(&response.stations), vec!["Gangnam", "Yangjae", "Jeongja"]);
        assert_eq!(response.distance, 18);
    }

    #[test]
    fn test_topology_errors_surface() {
        let (mut network, ids) = default_network();
        let line_id = create_line(&mut network, "Shinbundang", ids[0], ids[1], 10);

        let result = network.add_segment(
            line_id,
            AddSegment {
                up_station_id: ids[2],
                down_station_id: ids[3],
                distance: 3,
            },
        );
        assert!(matches!(
            result,
            Err(EngineError::Topology(
                TopologyError::NeitherStationRegistered { .. }
            ))
        ));

        let result = network.remove_station_from_line(line_id, ids[0]);
        assert!(matches!(
            result,
            Err(EngineError::Topology(TopologyError::OnlyOneSegment { .. }))
        ));

        let result = network.remove_station_from_line(LineId::new(), ids[0]);
        assert!(matches!(result, Err(EngineError::LineNotFound { .. })));
    }

    #[test]
    fn test_update_and_delete_line() {
        let (mut network, ids) = default_network();
        let line_id = create_line(&mut network, "Shinbundang", ids[0], ids[1], 10);

        network
            .update_line(
                line_id,
                UpdateLine {
                    name: "Sinbundang".into(),
                    color: "crimson".into(),
                },
            )
            .unwrap();
        let line = network.line_by_name("Sinbundang").unwrap();
        assert_eq!(line.color(), "crimson");

        network.delete_line(line_id).unwrap();
        assert!(network.lines().is_empty());
        assert!(matches!(
            network.delete_line(line_id),
            Err(EngineError::LineNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_station() {
        let (mut network, ids) = default_network();
        let line_id = create_line(&mut network, "Shinbundang", ids[0], ids[1], 10);

        match network.delete_station(ids[1]) {
            Err(EngineError::StationInUse {
                station_id,
                line_id: used_by,
            }) => {
                assert_eq!(station_id, ids[1]);
                assert_eq!(used_by, line_id);
            }
            _ => panic!("Expected StationInUse error"),
        }

        network.delete_station(ids[3]).expect("Could not delete");
        assert_eq!(network.stations().len(), 3);
        assert!(matches!(
            network.delete_station(ids[3]),
            Err(EngineError::StationNotFound { .. })
        ));
    }

    #[test]
    fn test_shortest_path_across_lines() {
        let (mut network, ids) = default_network();
        let line_1 = create_line(&mut network, "Line 1", ids[0], ids[1], 8);
        network
            .add_segment(
                line_1,
                AddSegment {
                    up_station_id: ids[1],
                    down_station_id: ids[2],
                    distance: 5,
                },
            )
            .unwrap();
        create_line(&mut network, "Line 2", ids[2], ids[3], 4);

        let path = network.shortest_path(ids[0], ids[3]).expect("Could not find path");

        assert_eq!(
            names(&path.stations),
            vec!["Gangnam", "Yangjae", "Pangyo", "Jeongja"]
        );
        assert_eq!(path.distance, 17);
    }

    #[test]
    fn test_shortest_path_errors() {
        let (mut network, ids) = default_network();
        create_line(&mut network, "Line 1", ids[0], ids[1], 8);

        assert!(matches!(
            network.shortest_path(ids[0], ids[0]),
            Err(EngineError::Path(PathError::SameEndpoints { .. }))
        ));
        assert!(matches!(
            network.shortest_path(ids[0], StationId::new()),
            Err(EngineError::StationNotFound { .. })
        ));
        // Registered but on no line
        assert!(matches!(
            network.shortest_path(ids[0], ids[3]),
            Err(EngineError::Path(PathError::StationNotFound { .. }))
        ));

        create_line(&mut network, "Line 2", ids[2], ids[3], 4);
        assert!(matches!(
            network.shortest_path(ids[0], ids[3]),
            Err(EngineError::Path(PathError::Unreachable { .. }))
        ));
    }

    #[test]
    fn test_path_response_serialization() {
        let (mut network, ids) = default_network();
        create_line(&mut network, "Line 1", ids[0], ids[1], 8);

        let path = network.shortest_path(ids[0], ids[1]).unwrap();
        let json = serde_json::to_value(&path).unwrap();

        assert_eq!(json["distance"], 8);
        assert_eq!(json["stations"][0]["name"], "Gangnam");
        assert_eq!(json["stations"][1]["id"], ids[1].to_string());
    }
}
