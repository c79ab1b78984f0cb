use clap::Subcommand;
use std::path::PathBuf;

pub mod batch;
pub mod chars;
pub mod convert;
pub mod inspect;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a font descriptor file
    Convert {
        /// Source BMFont XML descriptor
        source: PathBuf,

        /// Destination file (defaults to the source name with a .fnt extension)
        destination: Option<PathBuf>,

        /// Output format (laya or fnt; auto-detected from the destination extension if not specified)
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Batch convert all descriptors in a directory
    Batch {
        /// Source directory containing XML descriptors
        #[arg(short, long)]
        source: PathBuf,

        /// Destination directory
        #[arg(short, long)]
        dest: PathBuf,

        /// Output format (laya or fnt)
        #[arg(short, long, default_value = "fnt")]
        to: String,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Inspect a descriptor and print a summary
    Inspect {
        /// Descriptor file to inspect
        path: PathBuf,

        /// Write the full document as JSON to a file (prints a summary if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List glyph rectangles extracted for preview overlays
    Chars {
        /// Descriptor file to read
        path: PathBuf,

        /// Maximum entries to display
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                source,
                destination,
                to,
            } => convert::execute(source, destination.as_deref(), to.as_deref()),
            Commands::Batch {
                source,
                dest,
                to,
                quiet,
            } => batch::execute(source, dest, to, *quiet),
            Commands::Inspect { path, output } => inspect::execute(path, output.as_deref()),
            Commands::Chars { path, limit } => chars::execute(path, *limit),
        }
    }
}
