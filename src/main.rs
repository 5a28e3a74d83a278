// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use nur_search::{
    Corpus, RevelationFilter, RevelationType, SearchConfig, SearchRequest, SearchResolver,
    SearchResult, SemanticConfig, TopicCatalog,
};

mod cli;
use cli::display::{self, Role};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            corpus,
            query,
            topics,
            literal,
            revelation,
            semantic,
            json,
        } => {
            let request = SearchRequest::new(query)
                .with_topics(topics)
                .smart(!literal)
                .revelation(revelation);
            run_search(&corpus, request, semantic.into(), json).await
        }
        Commands::Inspect { corpus } => run_inspect(&corpus),
        Commands::Topics => {
            run_topics();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

async fn run_search(
    corpus_path: &str,
    request: SearchRequest,
    semantic_config: SemanticConfig,
    json: bool,
) -> CliResult {
    let corpus = Arc::new(Corpus::load(corpus_path)?);
    let config = SearchConfig::default().with_semantic(semantic_config);
    let resolver = SearchResolver::from_config(Arc::clone(&corpus), config)?;

    let start = Instant::now();
    let results = resolver.resolve(&request).await;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let combined = resolver.combined_query(&request.query, request.topics.as_slice());
    print_results(&corpus, &combined, &request, &results, elapsed_ms);
    Ok(())
}

fn print_results(
    corpus: &Corpus,
    combined: &str,
    request: &SearchRequest,
    results: &[SearchResult],
    elapsed_ms: f64,
) {
    let mode = if request.smart_mode {
        "smart"
    } else {
        "literal"
    };
    let mut header = format!("\"{}\" ({})", combined, mode);
    if request.revelation != RevelationFilter::All {
        header.push_str(&format!(" {:?} only", request.revelation));
    }

    display::section_top(&display::truncate(&header, display::BOX_WIDTH - 6));
    if results.is_empty() {
        display::row(&display::paint(Role::Muted, "No Surahs found."));
    }
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            display::section_mid();
        }
        let surah = corpus.surah(result.surah_id());
        display::row(&format!(
            "{} {}",
            display::source_badge(result),
            display::surah_title(result, surah)
        ));
        display::row(&display::truncate(result.reason(), display::BOX_WIDTH - 2));
        if let Some(verse_ref) = result.verse_ref() {
            display::row(&display::paint(
                Role::Muted,
                &display::truncate(&format!("Verses: {}", verse_ref), display::BOX_WIDTH - 2),
            ));
        }
    }
    display::section_bot();
    println!(
        "{} result(s) in {}",
        results.len(),
        display::timing_ms(elapsed_ms)
    );
}

fn run_inspect(corpus_path: &str) -> CliResult {
    let corpus = Corpus::load(corpus_path)?;

    display::section_top("Corpus");
    display::row(&format!("Path:    {}", corpus_path));
    display::row(&format!("Surahs:  {}", corpus.len()));
    display::row(&format!("Verses:  {}", corpus.verses().len()));
    for revelation in [RevelationType::Makkah, RevelationType::Madinah] {
        display::row(&format!(
            "{}: {}",
            display::revelation_label(revelation),
            corpus.count_revealed_in(revelation)
        ));
    }

    let empty: Vec<String> = corpus
        .surahs()
        .iter()
        .filter(|s| corpus.verses_of(s.id).is_empty())
        .map(|s| s.id.to_string())
        .collect();
    if !empty.is_empty() {
        display::section_mid();
        display::row(&display::paint(
            Role::Warning,
            &display::truncate(
                &format!("Surahs without verses: {}", empty.join(", ")),
                display::BOX_WIDTH - 2,
            ),
        ));
    }
    display::section_bot();
    Ok(())
}

fn run_topics() {
    let catalog = TopicCatalog::default();
    display::section_top("Topics");
    for chip in catalog.chips() {
        display::row(&format!(
            "{:<10} {}",
            chip.id,
            display::paint(Role::Heading, &chip.label)
        ));
    }
    display::section_bot();
}
