use std::path::PathBuf;

use clap::Parser;
use cutstock::packing::Heuristic;
use log::LevelFilter;

/// Packs a cutting job onto panels or bars and writes the plan as JSON and SVG
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON file describing the stock and the parts to cut
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder to write `sol_<stem>.json` and the SVGs to, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the heuristic choice of the config
    #[arg(long, value_name = "[bssf, blsf, baf, bl, contact]")]
    pub heuristic: Option<Heuristic>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
