// Declare modules
pub mod article;
pub mod cli;
pub mod config;
pub mod models;
pub mod scanner;
pub mod sidebar;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::fs;
use std::path::Path;

use self::cli::{Cli, Command};
use self::config::{resolve_config, SiteConfig, DOCS_DIR, SIDEBAR_FILE};
use self::models::Node;
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Locate the content root
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let docs_dir = current_dir.join(DOCS_DIR);

    // 3. Resolve Configuration (compiled-in defaults + optional overrides)
    let config = resolve_config(&docs_dir)?;

    // 4. Dispatch
    match args.command {
        Command::Sidebar => generate_sidebar(&docs_dir, &config),
        Command::New { category, title } => new_article(&docs_dir, &config, &category, &title.join(" ")),
    }
}

/// Rescan the docs tree and rewrite the sidebar file.
fn generate_sidebar(docs_dir: &Path, config: &SiteConfig) -> Result<()> {
    log::info!("🔍 Scanning {}", docs_dir.display());
    let scanner = Scanner::new(docs_dir.to_path_buf(), config);
    let nodes = scanner.scan();

    log::info!("📝 Generating sidebar...");
    let content = sidebar::generate(&nodes, config);

    let output_path = docs_dir.join(SIDEBAR_FILE);
    fs::write(&output_path, content)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    let total: usize = nodes.iter().map(Node::document_count).sum();
    log::info!("✅ Sidebar written to {}", output_path.display());
    log::info!("📊 {total} articles indexed");
    Ok(())
}

fn new_article(docs_dir: &Path, config: &SiteConfig, category: &str, title: &str) -> Result<()> {
    let created = article::create(docs_dir, config, category, title)?;

    println!("✅ Article created");
    println!("📄 File: {}", created.file_path.display());
    println!("🔗 Path: {}", created.site_path);
    Ok(())
}
