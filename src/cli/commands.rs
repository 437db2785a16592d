//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::corpus::TextCorpus;
use crate::matcher::Match;
use crate::phonetic::encode;
use crate::search::{PhoneticSearch, SearchOutcome};

use super::args::{Commands, OutputFormat};
use super::paths::{config_file_path_with_override, PersistentConfig};

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Find {
            file,
            word,
            top_k,
            initial_groups,
            min_group_size,
            min_groups,
            seed,
            show_codes,
            output,
        } => {
            let overrides = PersistentConfig {
                top_k,
                initial_groups,
                min_group_size,
                min_groups,
                seed,
                ..PersistentConfig::default()
            };
            cmd_find(&file, &word, &overrides, config_path, show_codes, output)
        }
        Commands::Encode { words } => cmd_encode(&words),
        Commands::Settings {
            set_top_k,
            set_initial_groups,
            set_min_group_size,
            set_min_groups,
            set_batch_size,
            set_seed,
            reset,
        } => {
            let updates = PersistentConfig {
                top_k: set_top_k,
                initial_groups: set_initial_groups,
                min_group_size: set_min_group_size,
                min_groups: set_min_groups,
                batch_size: set_batch_size,
                seed: set_seed,
                ..PersistentConfig::default()
            };
            cmd_settings(&updates, reset, config_path)
        }
    }
}

/// Find command
fn cmd_find(
    file: &Path,
    word: &str,
    overrides: &PersistentConfig,
    config_path: Option<&Path>,
    show_codes: bool,
    output: OutputFormat,
) -> Result<()> {
    let config = PersistentConfig::load_from(config_path)?
        .merge_with_cli(overrides)
        .resolve();

    let corpus = TextCorpus::load(file)
        .with_context(|| format!("Could not load corpus {}", file.display()))?;

    let search = PhoneticSearch::build(corpus.tokens(), &config).context("Invalid settings")?;
    let partitioning = search.partitioning();
    tracing::info!(
        tokens = corpus.total_tokens(),
        entries = partitioning.len(),
        groups = partitioning.group_count(),
        degraded = partitioning.is_degraded(),
        "corpus ready"
    );

    match search.find(word) {
        SearchOutcome::NoPhoneticContent => {
            println!(
                "{}: {} contains no letters, nothing to match",
                "Notice".yellow().bold(),
                format!("{:?}", word).cyan()
            );
        }
        SearchOutcome::Matches { query, matches } => match output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            }
            OutputFormat::Text => {
                println!(
                    "Top matches for {} ({}):",
                    query.word.cyan(),
                    query.code.to_string().yellow()
                );
                println!();
                print_matches(&matches, show_codes);
            }
        },
    }

    Ok(())
}

fn print_matches(matches: &[Match], show_codes: bool) {
    if matches.is_empty() {
        println!("{}", "No matches found".yellow());
        return;
    }

    for (i, m) in matches.iter().enumerate() {
        if show_codes {
            println!("   {}. {} ({}, d={})", i + 1, m.word.green(), m.code, m.distance);
        } else {
            println!("   {}. {}", i + 1, m.word.green());
        }
    }
    println!();
    println!("{} match(es) found", matches.len());
}

/// Encode command
fn cmd_encode(words: &[String]) -> Result<()> {
    for word in words {
        match encode(word) {
            Some(encoded) => println!("{}\t{}", encoded.code.to_string().green(), word),
            None => println!("{}\t{}", "----".yellow(), word),
        }
    }
    Ok(())
}

/// Settings command
fn cmd_settings(updates: &PersistentConfig, reset: bool, config_path: Option<&Path>) -> Result<()> {
    if reset {
        let config = PersistentConfig::default();
        let path = config.save_to(config_path)?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!("  File: {}", path.display().to_string().cyan());
        println!();
        print_config(&config);
        return Ok(());
    }

    let current = PersistentConfig::load_from(config_path)?;
    let config = current.merge_with_cli(updates);

    if config != current {
        config
            .resolve()
            .partition_config()
            .context("Refusing to save invalid settings")?;
        let path = config.save_to(config_path)?;
        println!("{}", "Configuration saved".green().bold());
        println!("  File: {}", path.display().to_string().cyan());
    } else {
        let path = config_file_path_with_override(config_path)?;
        println!("  File: {}", path.display().to_string().cyan());
    }

    println!();
    print_config(&config);

    Ok(())
}

fn print_config(config: &PersistentConfig) {
    let resolved = config.resolve();
    let mark = |set: bool| if set { "" } else { " (default)" };

    println!("{}", "Current Configuration:".bold().underline());
    println!();
    println!(
        "  Top K:            {}{}",
        resolved.top_k.to_string().yellow(),
        mark(config.top_k.is_some())
    );
    println!(
        "  Initial groups:   {}{}",
        resolved.initial_groups.to_string().yellow(),
        mark(config.initial_groups.is_some())
    );
    println!(
        "  Min group size:   {}{}",
        resolved.min_group_size.to_string().yellow(),
        mark(config.min_group_size.is_some())
    );
    println!(
        "  Min groups:       {}{}",
        resolved.min_groups.to_string().yellow(),
        mark(config.min_groups.is_some())
    );
    println!(
        "  Batch size:       {}{}",
        resolved.batch_size.to_string().yellow(),
        mark(config.batch_size.is_some())
    );
    println!(
        "  Seed:             {}{}",
        resolved.seed.to_string().yellow(),
        mark(config.seed.is_some())
    );
    println!(
        "  Max iterations:   {}{}",
        resolved.max_iterations.to_string().yellow(),
        mark(config.max_iterations.is_some())
    );
    println!(
        "  Restarts:         {}{}",
        resolved.restarts.to_string().yellow(),
        mark(config.restarts.is_some())
    );
}
