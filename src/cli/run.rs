use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use super::args::{Arguments, Command, ExtractCommand};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};
use crate::extract::{Message, extract_angular};
use crate::pot::PotCatalog;
use crate::scanner::scan_templates;

/// Success mark for consistent output formatting
const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn run(Arguments { command }: Arguments, verbose: bool) -> Result<()> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd, verbose),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn extract(cmd: ExtractCommand, verbose: bool) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(source_root) = &cmd.common.source_root {
        config.source_root = source_root.to_string_lossy().into_owned();
    }

    let files = scan_templates(&config)?;
    let base = Path::new(&config.source_root).to_path_buf();

    // Per-file extraction is independent; reassembly below keeps the
    // scanner's sorted order so the catalog is deterministic.
    let extracted: Vec<(String, Vec<Message>)> = files
        .par_iter()
        .map(|path| {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template: {}", path.display()))?;
            let relative = path.strip_prefix(&base).unwrap_or(path);
            let messages: Vec<Message> =
                extract_angular(&source, &[], &[], &HashMap::new()).collect();
            Ok((relative.to_string_lossy().into_owned(), messages))
        })
        .collect::<Result<_>>()?;

    let mut catalog = PotCatalog::new();
    for (path, messages) in &extracted {
        if verbose {
            eprintln!(
                "{} {}: {} message(s)",
                "scanned".dimmed(),
                path,
                messages.len()
            );
        }
        for message in messages {
            catalog.add_message(path, message);
        }
    }

    let rendered = catalog.render();
    match &cmd.output {
        Some(output) => fs::write(output, &rendered)
            .with_context(|| format!("Failed to write catalog: {}", output.display()))?,
        None => print!("{}", rendered),
    }

    eprintln!(
        "{} Extracted {} message(s) from {} file(s)",
        SUCCESS_MARK.green(),
        catalog.len(),
        files.len()
    );
    Ok(())
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    eprintln!("{} Created {}", SUCCESS_MARK.green(), CONFIG_FILE_NAME);
    Ok(())
}
