use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Folder containing the shape asset SVG files
    #[arg(short, long, value_name = "FOLDER")]
    pub assets_folder: PathBuf,
    /// Folder the composition JSON and SVG documents are written to
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Shuffle order and re-roll rotation/scale with this seed
    #[arg(short, long, value_name = "SEED")]
    pub randomize_seed: Option<u64>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
