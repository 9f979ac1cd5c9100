pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "upages")]
#[command(about = "Render child-page fragments from [pages] shortcode tags", long_about = None)]
pub struct Cli {
    /// Path to an alternate config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one shortcode invocation
    Render {
        /// Site file (.toml or .json) describing the page tree
        #[arg(long)]
        site: PathBuf,

        /// Parent page id
        #[arg(long)]
        id: Option<String>,

        /// Thumbnail size token
        #[arg(long)]
        size: Option<String>,

        /// Column count
        #[arg(long)]
        col: Option<String>,
    },
    /// Expand every [pages] tag in a document
    Expand {
        /// Site file (.toml or .json) describing the page tree
        #[arg(long)]
        site: PathBuf,

        /// Document containing [pages] tags
        document: PathBuf,
    },
    /// List the pages in a site file
    List {
        /// Site file (.toml or .json) describing the page tree
        #[arg(long)]
        site: PathBuf,
    },
}
