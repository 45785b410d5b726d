use std::path::PathBuf;

use clap::Parser;
use otter_res::config::{Config, PairSelection};

/// Decides whether a query is entailed by a knowledge base of clauses, by resolution refutation
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The problem file: a query, a count of clauses, then the clauses
    #[arg(short, long, default_value = "IO/Input.txt")]
    pub input: PathBuf,

    /// The file to write the trace to
    #[arg(short, long, default_value = "IO/Output.txt")]
    pub output: PathBuf,

    /// Which pairs of clauses to resolve each round
    #[arg(long, default_value_t, value_enum)]
    pub pairs: PairSelection,

    /// Give up after this many rounds, reporting UNKNOWN
    #[arg(long)]
    pub round_limit: Option<usize>,

    /// Display a proof of the empty clause, if the query is entailed
    #[arg(long, default_value_t = false)]
    pub proof: bool,
}

impl Args {
    /// The config of a context, as requested.
    ///
    /// A request outside the bounds of some option is noted and ignored.
    pub fn config(&self) -> Config {
        let mut config = Config::default();

        let (min, max) = config.pair_selection.min_max();
        match min <= self.pairs && self.pairs <= max {
            true => {
                println!("c {} set to: {}", config.pair_selection.name, self.pairs);
                config.pair_selection.value = self.pairs;
            }
            false => println!("c {} requires a value between {min} and {max}", config.pair_selection.name),
        }

        config.record_derivations.value = self.proof;

        if let Some(limit) = self.round_limit {
            println!("c round_limit set to: {limit}");
            config.round_limit = Some(limit);
        }

        config
    }
}
