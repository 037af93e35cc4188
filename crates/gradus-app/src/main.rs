use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use gradus_config::Config;
use gradus_core::{Tokenizer, WordLevel};
use gradus_dictionary::{CssExtractor, HttpFetcher, PageResolver};
use tokio_util::sync::CancellationToken;

mod io;
mod pool;
mod progress;

#[cfg(test)]
mod tests;

/// Download CEFR levels for words and phrasal verbs so you know which of
/// the words you jotted down are most important to learn.
#[derive(Parser)]
#[command(name = "gradus", version, about)]
struct Cli {
    /// Words or phrases to look up
    words: Vec<String>,

    /// Read words from a text file, one word or phrase per line
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// File the sorted levels are written to
    #[arg(short, long, default_value = "words_and_levels.txt")]
    output: PathBuf,

    /// Suppress progress and the final listing
    #[arg(short, long)]
    silent: bool,

    /// Keep words exactly as written instead of accepting the dictionary's
    /// spelling suggestions
    #[arg(short, long)]
    fix: bool,

    /// Look up every phrasal-verb prefix, not only the longest one
    #[arg(short, long)]
    many: bool,

    /// Longest phrasal verb to capture, in words
    #[arg(long)]
    max: Option<usize>,

    /// Concurrent dictionary fetches
    #[arg(short, long)]
    threads: Option<usize>,

    /// Config file, loaded on start and written back on success
    #[arg(short, long, default_value = "gradus.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli);

    let words = collect_words(&cli, &config)?;
    if words.is_empty() {
        tracing::warn!("nothing to look up");
        return Ok(());
    }

    let fetcher = HttpFetcher::new(Duration::from_secs(config.network.timeout_seconds))
        .context("failed to build the HTTP client")?;
    let resolver = PageResolver::new(
        Arc::new(fetcher),
        Arc::new(CssExtractor),
        config.dictionary.clone(),
        config.phrasal.separator,
    )
    .context("an extraction pattern in the config does not compile")?;

    let total = words.len();
    tracing::debug!("resolving levels for {} candidates", total);

    let completed = Arc::new(AtomicUsize::new(0));
    let cancel = CancellationToken::new();
    let reporter = (!config.silent && atty::is(atty::Stream::Stdout)).then(|| {
        tokio::spawn(progress::report_progress(
            total,
            Arc::clone(&completed),
            cancel.clone(),
        ))
    });

    let results = pool::resolve_all(
        words,
        Arc::new(resolver),
        config.network.max_fetches,
        completed,
    )
    .await?;

    cancel.cancel();
    if let Some(handle) = reporter {
        if let Err(e) = handle.await {
            tracing::error!("progress reporter panicked: {}", e);
        }
    }

    let entries = gradus_core::sort_and_dedup(results);

    if !config.silent {
        present(&entries);
    }
    io::write_levels(&cli.output, &entries)
        .with_context(|| format!("problem saving results to {}", cli.output.display()))?;

    // keep the effective options around for the next run
    if let Err(e) = config.dump(&cli.config) {
        tracing::debug!("could not write the config back: {}", e);
    }

    Ok(())
}

/// Load the config file if there is one, then let CLI flags override it.
fn load_config(cli: &Cli) -> Config {
    let mut config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!("no usable config at {}: {}", cli.config.display(), e);
            Config::new()
        }
    };

    if cli.silent {
        config.silent = true;
    }
    if cli.fix {
        config.dictionary.keep_original_words = true;
    }
    if cli.many {
        config.phrasal.all_variants = true;
    }
    if let Some(max) = cli.max {
        config.phrasal.max_words = max;
    }
    if let Some(threads) = cli.threads {
        config.network.max_fetches = threads;
    }

    config
}

/// Tokenize the input file (if any) and the positional words.
fn collect_words(cli: &Cli, config: &Config) -> Result<HashSet<String>> {
    let mut tokenizer = Tokenizer::new(&config.phrasal);

    if let Some(path) = &cli.input {
        io::read_words(path, &mut tokenizer)?;
    }
    for word in &cli.words {
        tokenizer.push_line(word);
    }

    Ok(tokenizer.into_words())
}

fn present(entries: &[WordLevel]) {
    if entries.is_empty() {
        return;
    }

    println!("\rDownloaded words:");
    for entry in entries {
        println!("{}: {}", entry.level, entry.word);
    }
}
