use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory the rendered charts are written to.
    #[arg(long, default_value = "charts")]
    pub out_dir: PathBuf,
}
