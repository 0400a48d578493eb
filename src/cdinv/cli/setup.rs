use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cdinv", bin_name = "cdinv", version)]
#[command(about = "Menu-driven CD inventory backed by a binary file", long_about = None)]
pub struct Cli {
    /// Inventory file (overrides data_file from cdinv.json)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Log to stderr; repeat for more detail (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
