// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod naming;
pub mod output;
pub mod report;
pub mod scanner;
pub mod transform;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use self::cli::Cli;
use self::config::resolve_config;
use self::naming::NameResolver;
use self::output::{OutputWriter, SpriteDocument};
use self::scanner::Scanner;
use self::transform::Pipeline;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    init_logger(args.debug);

    // 2. Resolve Configuration
    let config = resolve_config(args)?;

    if config.debug {
        print!("{}", report::config_table(&config));
    }

    // 3. Discover Inputs
    let scanner = Scanner::new(&config)?;
    let files = scanner.scan()?;

    log::info!("processing {} icons", files.len());

    // 4. Resolve Names
    // Collision handling needs the whole batch, so every name is fixed
    // before the first file is written.
    let resolver = NameResolver::new(&files);
    let mut renames = Vec::new();
    let names: Vec<String> = files
        .iter()
        .rev()
        .map(|file| {
            let resolution = resolver.resolve(file);
            if let Some(record) = resolution.rename {
                renames.push(record);
            }
            resolution.name
        })
        .collect();

    // 5. Transform & Write
    let writer = OutputWriter::prepare(&config)?;
    let pipeline = Pipeline::new(&config);

    let mut sprite = SpriteDocument::new();
    let mut example_name = String::new();

    for (file, name) in files.iter().rev().zip(&names) {
        let raw = fs::read_to_string(&file.path)
            .with_context(|| format!("failed to read {}", file.path.display()))?;

        let cleaned = pipeline.clean(&raw, name);
        sprite.push(pipeline.spritize(&cleaned));

        if config.icons {
            writer.write_icon(name, &cleaned)?;
        }

        if example_name.is_empty() {
            example_name = name.clone();
        }

        log::debug!("processed {} as {}", file.relative_path.display(), name);
    }

    if config.sprite {
        writer.write_sprite(&sprite.finalize(), &example_name)?;
    }

    // 6. Report
    report::print_summary(&writer, &config, &renames);

    Ok(())
}

fn init_logger(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
