//! Scaffolding of new article files from a category shorthand and a title.

use crate::app::config::SiteConfig;
use anyhow::{bail, Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Characters that are invalid in filenames on at least one platform.
const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Result of a successful scaffold.
#[derive(Debug)]
pub struct NewArticle {
    pub file_path: PathBuf,
    /// Root-absolute path the article is served under.
    pub site_path: String,
}

/// Turn a title into a filesystem-safe filename stem: reserved characters
/// and ASCII punctuation are dropped, whitespace runs collapse to a single
/// underscore, and the result is truncated to 50 characters. Non-ASCII
/// titles keep their characters.
pub fn sanitize_title(title: &str) -> String {
    let mut name = String::new();
    let mut in_whitespace = false;

    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
            continue;
        }
        if RESERVED.contains(&c) {
            continue;
        }
        if c.is_ascii() && !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_' | '.') {
            continue;
        }
        // A stripped character must not restart the whitespace run, so
        // "a / b" collapses to a_b rather than a__b.
        in_whitespace = false;
        name.push(c);
    }

    name.chars().take(50).collect()
}

/// Fixed article template: top heading, creation-date line, and the
/// boilerplate section skeleton.
pub fn render_template(title: &str, date: &str) -> String {
    format!(
        "# {title}\n\n\
         > 📅 Created: {date}\n\n\
         ## Overview\n\n\
         Write a short summary here...\n\n\
         ## Content\n\n\
         ### Part one\n\n\
         ...\n\n\
         ### Part two\n\n\
         ...\n\n\
         ## Summary\n\n\
         Key takeaways...\n\n\
         ## References\n\n\
         - [Reference](https://example.com)\n"
    )
}

/// Create a new article under the directory mapped from `category_key`.
///
/// Fails on an unknown shorthand or a pre-existing target file; the mapped
/// subdirectory is created when absent.
pub fn create(
    docs_dir: &Path,
    config: &SiteConfig,
    category_key: &str,
    title: &str,
) -> Result<NewArticle> {
    let key = category_key.to_lowercase();
    let Some(rel_dir) = config.article_dirs.get(&key) else {
        let mut available: Vec<_> = config.article_dirs.keys().map(String::as_str).collect();
        available.sort_unstable();
        bail!(
            "Unknown category '{category_key}' (available: {})",
            available.join(", ")
        );
    };

    let category_dir = docs_dir.join(rel_dir);
    if !category_dir.exists() {
        fs::create_dir_all(&category_dir)
            .with_context(|| format!("Failed to create {}", category_dir.display()))?;
        log::info!("📁 Created directory: {rel_dir}");
    }

    let file_name = format!("{}.md", sanitize_title(title));
    let file_path = category_dir.join(&file_name);
    if file_path.exists() {
        bail!("File already exists: {}", file_path.display());
    }

    let date = Local::now().format("%Y-%m-%d").to_string();
    fs::write(&file_path, render_template(title, &date))
        .with_context(|| format!("Failed to write {}", file_path.display()))?;

    Ok(NewArticle {
        file_path,
        site_path: format!("/{rel_dir}/{file_name}"),
    })
}
