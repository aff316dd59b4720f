use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, value_name = "FILE", env = "GRIDCELLS_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON5 dataset with `columns` and `rows`; a mock task list is shown when absent
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Number of mock rows, overrides `mock-rows` from the config
    #[arg(short, long, value_name = "N")]
    pub rows: Option<usize>,

    /// Mock data seed, overrides `mock-seed` from the config
    #[arg(short, long, value_name = "N")]
    pub seed: Option<u64>,

    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 4.0)]
    pub tick_rate: f64,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 30.0)]
    pub frame_rate: f64,
}
