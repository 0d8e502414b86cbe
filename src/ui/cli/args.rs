// Fri Oct 16 2026 - Alex

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prx-trampgen")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Generate late-binding trampolines for the NID-exported symbols of a PRX", long_about = None)]
pub struct Args {
    /// Module image to scan
    #[arg(long)]
    pub prx: PathBuf,

    /// Module handle token pasted verbatim into the generated lookups
    #[arg(long)]
    pub module_id: String,

    /// Library index a symbol must carry to be bound
    #[arg(long)]
    pub library_index: String,
}

impl Args {
    pub fn into_config(self) -> Config {
        Config::new(self.prx, self.module_id, self.library_index)
    }
}
