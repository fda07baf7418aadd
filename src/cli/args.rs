use clap::{Parser, Subcommand};

use crate::output::OutputMode;

#[derive(Parser, Debug)]
#[command(name = "filetr")]
#[command(about = "Bounded-excerpt file translation CLI")]
#[command(version)]
pub struct Args {
    /// File to translate
    pub file: Option<String>,

    /// Destination language (ISO 639-1 code or English name)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Translation module (google, mymemory)
    #[arg(short = 'm', long)]
    pub module: Option<String>,

    /// Where to send the translation
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputMode>,

    /// Stop reading once this many characters accumulate
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// Stop reading once this many words accumulate
    #[arg(long)]
    pub max_words: Option<usize>,

    /// Stop reading once this many sentences accumulate
    #[arg(long)]
    pub max_sentences: Option<usize>,

    /// Suppress status output on stderr
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the supported-language table
    Languages {
        /// Sample text to translate into every listed language
        #[arg(long = "translate")]
        translate: Option<String>,

        /// Where to send the table
        #[arg(short = 'o', long, value_enum)]
        output: Option<OutputMode>,

        /// Cap the number of rows
        #[arg(long)]
        limit: Option<usize>,

        /// Translation module for the sample column
        #[arg(short = 'm', long)]
        module: Option<String>,
    },
    /// Detect the language of a file
    Detect {
        /// File to inspect
        file: String,

        /// Translation module (google, mymemory)
        #[arg(short = 'm', long)]
        module: Option<String>,
    },
    /// One-shot interactive translation prompt
    Prompt {
        /// Translation module (google, mymemory)
        #[arg(short = 'm', long)]
        module: Option<String>,
    },
    /// Configure filetr defaults
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
