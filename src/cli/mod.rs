// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the nur-search command-line interface.
//!
//! Three subcommands: `search` to run one query against a corpus file,
//! `inspect` to summarize a corpus, and `topics` to list the emotion chips.
//! The semantic service is optional; without an endpoint, smart search runs
//! on keyword matches alone.

pub mod display;

use clap::{Parser, Subcommand};
use nur_search::config::DEFAULT_SEMANTIC_TIMEOUT_SECS;
use nur_search::{RevelationFilter, SemanticConfig};

#[derive(Parser)]
#[command(
    name = "nur-search",
    about = "Find Surahs by feeling or keyword, with optional semantic search",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus and display merged results
    Search {
        /// Path to corpus JSON ({ "surahs": [...], "verses": [...] })
        corpus: String,

        /// Free-text query. May be empty when topics are given.
        #[arg(default_value = "")]
        query: String,

        /// Topic chip id (repeatable), used when the query is empty
        #[arg(short, long = "topic")]
        topics: Vec<String>,

        /// Literal mode: filter Surah names only, no semantic search
        #[arg(long)]
        literal: bool,

        /// Keep only Surahs from this revelation period
        #[arg(long, default_value = "all", value_parser = parse_revelation)]
        revelation: RevelationFilter,

        #[command(flatten)]
        semantic: SemanticArgs,

        /// Print results as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Summarize a corpus file
    Inspect {
        /// Path to corpus JSON
        corpus: String,
    },

    /// List the topic chips and their search labels
    Topics,
}

/// Semantic service connection, from flags or environment.
#[derive(clap::Args, Debug, Clone)]
pub struct SemanticArgs {
    /// Semantic search endpoint URL
    #[arg(long, env = "NUR_SEARCH_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Bearer token for the semantic endpoint
    #[arg(long, env = "NUR_SEARCH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Semantic request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_SEMANTIC_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl From<SemanticArgs> for SemanticConfig {
    fn from(args: SemanticArgs) -> Self {
        SemanticConfig {
            endpoint: args.endpoint,
            token: args.token,
            timeout_secs: args.timeout_secs,
        }
    }
}

fn parse_revelation(value: &str) -> Result<RevelationFilter, String> {
    value.parse()
}
