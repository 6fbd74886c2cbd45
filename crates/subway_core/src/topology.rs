use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::{LineId, Segment, StationId, TopologyError};

/// The segments of one line, kept as a single unbranched chain.
///
/// Segments are stored in chain order, from the upstream terminal to the
/// downstream terminal. `positions` maps every station of the chain to its
/// index in the station sequence, so station `p` is the up station of segment
/// `p` and the down station of segment `p - 1`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTopology {
    line_id: LineId,
    segments: Vec<Segment>,
    #[serde(skip)]
    positions: HashMap<StationId, usize>,
}

fn validate_endpoints(
    up_station: StationId,
    down_station: StationId,
    distance: u32,
) -> Result<(), TopologyError> {
    if up_station == down_station {
        return Err(TopologyError::IdenticalEndpoints {
            station_id: up_station,
        });
    }
    if distance == 0 {
        return Err(TopologyError::InvalidDistance);
    }
    Ok(())
}

/// Distance left over for the second half of `existing` once a segment of
/// `distance` is carved out of it.
fn split_remainder(existing: &Segment, distance: u32) -> Result<u32, TopologyError> {
    if distance < existing.distance {
        Ok(existing.distance - distance)
    } else {
        Err(TopologyError::DistanceNotShorter {
            distance,
            existing: existing.distance,
        })
    }
}

impl LineTopology {
    pub(crate) fn new(
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<Self, TopologyError> {
        validate_endpoints(up_station, down_station, distance)?;
        let mut topology = LineTopology {
            line_id,
            segments: vec![Segment::new(line_id, up_station, down_station, distance)],
            positions: HashMap::new(),
        };
        topology.reindex();
        Ok(topology)
    }

    pub fn line_id(&self) -> LineId {
        self.line_id
    }

    /// Segments in chain order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Stations from the upstream terminal to the downstream terminal.
    pub fn stations(&self) -> Vec<StationId> {
        let mut stations = Vec::with_capacity(self.segments.len() + 1);
        stations.push(self.first_station());
        stations.extend(self.segments.iter().map(|segment| segment.down_station));
        stations
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.positions.contains_key(&station)
    }

    pub fn first_station(&self) -> StationId {
        self.segments[0].up_station
    }

    pub fn last_station(&self) -> StationId {
        self.segments[self.segments.len() - 1].down_station
    }

    /// Sum of all segment distances.
    pub fn total_distance(&self) -> u64 {
        self.segments
            .iter()
            .map(|segment| u64::from(segment.distance))
            .sum()
    }

    /// Whether the segments form exactly one simple path: consecutive
    /// segments share a station, no station repeats and every distance is
    /// positive.
    pub fn is_well_formed(&self) -> bool {
        if self.segments.is_empty() {
            return false;
        }
        let linked = self
            .segments
            .windows(2)
            .all(|pair| pair[0].down_station == pair[1].up_station);
        let valid_segments = self
            .segments
            .iter()
            .all(|segment| segment.distance > 0 && segment.up_station != segment.down_station);
        let distinct: HashSet<StationId> = self.stations().into_iter().collect();

        linked
            && valid_segments
            && distinct.len() == self.segments.len() + 1
            && self.positions.len() == distinct.len()
    }

    /// Insert a segment sharing exactly one station with the chain.
    ///
    /// A segment hanging off a terminal extends the line. Otherwise the
    /// existing segment on the new station's side is split in two, which
    /// requires `distance` to be strictly shorter than that segment.
    pub fn insert(
        &mut self,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<(), TopologyError> {
        validate_endpoints(up_station, down_station, distance)?;

        let up_position = self.positions.get(&up_station).copied();
        let down_position = self.positions.get(&down_station).copied();

        match (up_position, down_position) {
            (Some(_), Some(_)) => {
                return Err(TopologyError::BothStationsRegistered {
                    up_station,
                    down_station,
                });
            }
            (None, None) => {
                return Err(TopologyError::NeitherStationRegistered {
                    up_station,
                    down_station,
                });
            }
            (Some(position), None) => {
                self.insert_after(position, up_station, down_station, distance)?
            }
            (None, Some(position)) => {
                self.insert_before(position, up_station, down_station, distance)?
            }
        }

        self.reindex();
        debug_assert!(self.is_well_formed());
        tracing::debug!(
            "Line {} now has {} segments",
            self.line_id,
            self.segments.len()
        );
        Ok(())
    }

    /// `up_station` is on the chain at `position`, `down_station` is new.
    fn insert_after(
        &mut self,
        position: usize,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<(), TopologyError> {
        let new_segment = Segment::new(self.line_id, up_station, down_station, distance);
        if position == self.segments.len() {
            self.segments.push(new_segment);
            return Ok(());
        }

        let existing = &self.segments[position];
        let remaining = split_remainder(existing, distance)?;
        let tail = Segment::new(self.line_id, down_station, existing.down_station, remaining);

        self.segments[position] = new_segment;
        self.segments.insert(position + 1, tail);
        Ok(())
    }

    /// `down_station` is on the chain at `position`, `up_station` is new.
    fn insert_before(
        &mut self,
        position: usize,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<(), TopologyError> {
        let new_segment = Segment::new(self.line_id, up_station, down_station, distance);
        if position == 0 {
            self.segments.insert(0, new_segment);
            return Ok(());
        }

        let existing = &self.segments[position - 1];
        let remaining = split_remainder(existing, distance)?;
        let head = Segment::new(self.line_id, existing.up_station, up_station, remaining);

        self.segments[position - 1] = head;
        self.segments.insert(position, new_segment);
        Ok(())
    }

    /// Remove a station from the chain.
    ///
    /// A terminal takes its only segment with it. An interior station merges
    /// its two segments into one spanning both neighbours.
    pub fn remove(&mut self, station: StationId) -> Result<(), TopologyError> {
        if self.segments.len() == 1 {
            return Err(TopologyError::OnlyOneSegment { line_id: self.line_id });
        }
        let Some(position) = self.positions.get(&station).copied() else {
            return Err(TopologyError::StationNotInTopology { station_id: station });
        };

        if position == 0 {
            self.segments.remove(0);
        } else if position == self.segments.len() {
            self.segments.pop();
        } else {
            let upstream = &self.segments[position - 1];
            let downstream = &self.segments[position];
            let distance = upstream
                .distance
                .checked_add(downstream.distance)
                .ok_or(TopologyError::DistanceOverflow)?;
            let merged = Segment::new(
                self.line_id,
                upstream.up_station,
                downstream.down_station,
                distance,
            );

            self.segments[position - 1] = merged;
            self.segments.remove(position);
        }

        self.reindex();
        debug_assert!(self.is_well_formed());
        tracing::debug!(
            "Line {} now has {} segments",
            self.line_id,
            self.segments.len()
        );
        Ok(())
    }

    fn reindex(&mut self) {
        self.positions = self
            .stations()
            .into_iter()
            .enumerate()
            .map(|(position, station)| (station, position))
            .collect();
    }
}
