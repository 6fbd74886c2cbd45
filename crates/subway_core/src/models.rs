use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct StationId(uuid::Uuid);

impl StationId {
    pub fn new() -> Self {
        StationId(uuid::Uuid::new_v4())
    }
}

impl Default for StationId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<uuid::Uuid> for StationId {
    fn from(id: uuid::Uuid) -> Self {
        StationId(id)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(transparent)]
pub struct LineId(uuid::Uuid);

impl LineId {
    pub fn new() -> Self {
        LineId(uuid::Uuid::new_v4())
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<uuid::Uuid> for LineId {
    fn from(id: uuid::Uuid) -> Self {
        LineId(id)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A stop in the network. Two stations are the same station when their ids
/// match, whatever their names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Station {
            id: StationId::new(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// An edge of a line, oriented from `up_station` to `down_station`.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub(crate) line_id: LineId,
    pub(crate) up_station: StationId,
    pub(crate) down_station: StationId,
    pub(crate) distance: u32,
}

impl Segment {
    pub(crate) fn new(
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Self {
        Segment {
            line_id,
            up_station,
            down_station,
            distance,
        }
    }

    pub fn line_id(&self) -> LineId {
        self.line_id
    }

    pub fn up_station(&self) -> StationId {
        self.up_station
    }

    pub fn down_station(&self) -> StationId {
        self.down_station
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }
}
