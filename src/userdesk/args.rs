use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "userdesk")]
#[command(about = "Terminal admin panel for user records", long_about = None)]
pub struct Cli {
    /// Manage records through a remote REST endpoint (base URL)
    #[arg(long, value_name = "URL", conflicts_with = "local")]
    pub remote: Option<String>,

    /// Force the local store even if the config names a remote endpoint
    #[arg(long)]
    pub local: bool,

    /// Directory for the local store and config
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Records per page in the list view
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,
}
