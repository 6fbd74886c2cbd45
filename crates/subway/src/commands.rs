use clap::Subcommand;
use serde_json::Value;
use subway_engine::{LineResponse, Network};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shortest route between two stations, across all lines
    Path {
        /// Name of the start station
        #[arg(long)]
        from: String,
        /// Name of the destination station
        #[arg(long)]
        to: String,
    },
    /// Stations of one line, from terminal to terminal
    Line {
        /// Name of the line
        name: String,
    },
    /// Every line with its stations
    Lines,
}

pub fn run(network: &Network, command: Command) -> anyhow::Result<Value> {
    let output = match command {
        Command::Path { from, to } => {
            let start = network.station_by_name(&from)?.id();
            let destination = network.station_by_name(&to)?.id();
            serde_json::to_value(network.shortest_path(start, destination)?)?
        }
        Command::Line { name } => {
            let line = network.line_by_name(&name)?;
            serde_json::to_value(network.line_response(line.id())?)?
        }
        Command::Lines => {
            let lines = network
                .lines()
                .iter()
                .map(|line| network.line_response(line.id()))
                .collect::<Result<Vec<LineResponse>, _>>()?;
            serde_json::to_value(lines)?
        }
    };
    Ok(output)
}
