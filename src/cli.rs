use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::classify::ResolutionPolicy;
use crate::core::Taxonomy;
use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "bandmap")]
#[command(about = "Proficiency band classification and topic analysis engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an attempt from a JSON file
    Evaluate {
        /// Attempt file ({"student_id", "exam_id", "topic_scores"})
        path: PathBuf,

        /// Model artifact path (overrides the configured path)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Resolution policy (overrides the configured policy)
        #[arg(long, value_enum)]
        policy: Option<ResolutionPolicy>,

        /// Band taxonomy (overrides the configured taxonomy)
        #[arg(long, value_enum)]
        taxonomy: Option<Taxonomy>,
    },

    /// Run the HTTP evaluation service
    Serve {
        /// Model artifact path (overrides the configured path)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Bind address (overrides the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
