extern crate clap;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use lemma::{TieBreak, WordClass};

use crate::dataset::Format;

#[derive(Debug, Parser)]
#[command(name = "lemma-bin", version, about = "Rule-based Danish lemmatizer")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lemmatize words of one word class.
    Lemmatize(Lemmatize),

    /// Learn exceptions and print them.
    Train(Train),

    /// Train on one dataset and measure accuracy on another.
    Evaluate(Evaluate),
}

#[derive(Debug, Args)]
pub struct Lemmatize {
    #[arg(long, short = 'c')]
    pub class: WordClass,

    /// Training data for exceptions; rules only when omitted.
    #[arg(long, short = 't')]
    pub train: Option<PathBuf>,

    #[arg(long, short = 'f', value_enum, default_value_t = Format::Tsv)]
    pub format: Format,

    #[arg(long, value_enum, default_value_t = TieBreakArg::MostFrequent)]
    pub tie_break: TieBreakArg,

    /// Print every candidate instead of a single lemma.
    #[arg(long, short = 'a')]
    pub all: bool,

    #[arg(long)]
    pub json: bool,

    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Args)]
pub struct Train {
    #[arg(long, short = 't')]
    pub train: PathBuf,

    #[arg(long, short = 'f', value_enum, default_value_t = Format::Tsv)]
    pub format: Format,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct Evaluate {
    #[arg(long, short = 't')]
    pub train: PathBuf,

    #[arg(long, short = 'e')]
    pub test: PathBuf,

    #[arg(long, short = 'f', value_enum, default_value_t = Format::Tsv)]
    pub format: Format,

    #[arg(long, value_enum, default_value_t = TieBreakArg::MostFrequent)]
    pub tie_break: TieBreakArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    MostFrequent,
    FirstObserved,
    Alphabetical,
    Reject,
}

impl From<TieBreakArg> for TieBreak {
    fn from(value: TieBreakArg) -> Self {
        match value {
            TieBreakArg::MostFrequent => TieBreak::MostFrequent,
            TieBreakArg::FirstObserved => TieBreak::FirstObserved,
            TieBreakArg::Alphabetical => TieBreak::Alphabetical,
            TieBreakArg::Reject => TieBreak::Reject,
        }
    }
}
