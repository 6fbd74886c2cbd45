use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use subway_engine::{AddSegment, CreateLine, Network};

/// Network definition loaded at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Station names, each registered once
    pub stations: Vec<String>,
    #[serde(default)]
    pub lines: Vec<LineConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineConfig {
    pub name: String,
    pub color: String,
    /// The first section creates the line, the others are inserted in order
    pub sections: Vec<SectionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    pub up: String,
    pub down: String,
    pub distance: u32,
}

impl NetworkConfig {
    pub fn build(&self) -> anyhow::Result<Network> {
        let mut network = Network::new();
        for name in &self.stations {
            if network.station_by_name(name).is_ok() {
                bail!("Station '{}' is declared twice", name);
            }
            network.create_station(name.as_str());
        }

        for line in &self.lines {
            let Some((first, rest)) = line.sections.split_first() else {
                bail!("Line '{}' has no sections", line.name);
            };
            let request = CreateLine {
                name: line.name.clone(),
                color: line.color.clone(),
                up_station_id: network.station_by_name(&first.up)?.id(),
                down_station_id: network.station_by_name(&first.down)?.id(),
                distance: first.distance,
            };
            let line_id = network
                .create_line(request)
                .with_context(|| format!("Failed to create line '{}'", line.name))?
                .id();

            for section in rest {
                let request = AddSegment {
                    up_station_id: network.station_by_name(&section.up)?.id(),
                    down_station_id: network.station_by_name(&section.down)?.id(),
                    distance: section.distance,
                };
                network.add_segment(line_id, request).with_context(|| {
                    format!(
                        "Failed to add section {} -> {} to line '{}'",
                        section.up, section.down, line.name
                    )
                })?;
            }
        }

        Ok(network)
    }
}
