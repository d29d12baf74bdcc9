use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bilingual page toggler for data-es/data-en annotated documents
#[derive(Parser, Debug)]
#[command(name = "lang-toggle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run in interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Page document for interactive mode (built-in sample when omitted)
    #[arg(short, long)]
    pub page: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a page document
    Render {
        /// Page document (.toml or .json)
        file: PathBuf,

        /// Click the toggle control this many times before rendering
        #[arg(short, long, default_value = "0")]
        clicks: u32,
    },

    /// List the translatable elements of a page
    Elements {
        /// Page document (.toml or .json)
        file: PathBuf,
    },

    /// Report elements missing one of the two language values
    Check {
        /// Page document (.toml or .json)
        file: PathBuf,
    },

    /// Print the built-in sample page document
    Sample {
        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        write: Option<PathBuf>,
    },
}
