//! Directory walking and title extraction for the docs tree.
//!
//! The walk is best-effort: an unreadable directory contributes nothing and
//! is logged, but never aborts the run. Directories with no qualifying
//! Markdown files anywhere beneath them produce no node at all.

use crate::app::config::{SiteConfig, MARKDOWN_EXT};
use crate::app::models::{Category, Document, Node};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());

pub struct Scanner<'a> {
    root: PathBuf,
    config: &'a SiteConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(root: PathBuf, config: &'a SiteConfig) -> Self {
        Self { root, config }
    }

    /// Walk the docs tree and build the category/document node sequence.
    pub fn scan(&self) -> Vec<Node> {
        self.scan_dir(&self.root, "")
    }

    fn scan_dir(&self, dir: &Path, rel_prefix: &str) -> Vec<Node> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("⚠️ Skipping {}: {}", dir.display(), err);
                return Vec::new();
            }
        };

        let mut entries: Vec<_> = entries.filter_map(Result::ok).collect();
        // Readdir order is filesystem-dependent; sort by name so the
        // generated sidebar is stable across machines.
        entries.sort_by_key(|entry| entry.file_name());

        let mut nodes = Vec::new();
        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            let rel_path = if rel_prefix.is_empty() {
                name.clone()
            } else {
                format!("{rel_prefix}/{name}")
            };

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(err) => {
                    log::warn!("⚠️ Skipping {}: {}", entry.path().display(), err);
                    continue;
                }
            };

            if file_type.is_dir() {
                // Substring match, deliberately: "my-assets-folder" is
                // ignored because it contains "assets".
                if self
                    .config
                    .ignore_dirs
                    .iter()
                    .any(|ignored| name.contains(ignored.as_str()))
                {
                    continue;
                }
                let children = self.scan_dir(&entry.path(), &rel_path);
                if !children.is_empty() {
                    nodes.push(Node::Category(Category {
                        name,
                        path: rel_path,
                        children,
                    }));
                }
            } else if file_type.is_file() && name.ends_with(MARKDOWN_EXT) {
                if self.config.ignore_files.iter().any(|ignored| ignored == &name) {
                    continue;
                }
                let title = extract_title(&entry.path());
                nodes.push(Node::Document(Document {
                    name,
                    path: rel_path,
                    title,
                }));
            }
        }

        nodes
    }
}

/// Display title for a document: the first `# ` heading found anywhere in
/// the file, or the filename (extension stripped, `-`/`_` turned into
/// spaces) when there is none or the file cannot be read. Never fails.
pub fn extract_title(path: &Path) -> String {
    if let Ok(content) = fs::read_to_string(path) {
        if let Some(caps) = HEADING_RE.captures(&content) {
            return caps[1].trim().to_string();
        }
    }

    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.replace(['-', '_'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn title_from_first_heading() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "a.md", "# Java Basics\n\ntext\n");
        assert_eq!(extract_title(&temp_dir.path().join("a.md")), "Java Basics");
    }

    #[test]
    fn title_from_heading_deep_in_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "a.md",
            "preamble\n\nsome text\n\n#   Deep Title  \nmore\n",
        );
        assert_eq!(extract_title(&temp_dir.path().join("a.md")), "Deep Title");
    }

    #[test]
    fn title_falls_back_to_filename() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "deep_dive.md", "no heading here\n");
        assert_eq!(extract_title(&temp_dir.path().join("deep_dive.md")), "deep dive");

        write(temp_dir.path(), "getting-started.md", "## only h2\n");
        assert_eq!(
            extract_title(&temp_dir.path().join("getting-started.md")),
            "getting started"
        );
    }

    #[test]
    fn title_fallback_on_unreadable_file() {
        assert_eq!(
            extract_title(Path::new("/nonexistent/some-missing_file.md")),
            "some missing file"
        );
    }

    #[test]
    fn scan_builds_nested_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "java/intro.md", "# Java Basics\n");
        write(temp_dir.path(), "java/sub/deep_dive.md", "no heading\n");

        let config = SiteConfig::default();
        let nodes = Scanner::new(temp_dir.path().to_path_buf(), &config).scan();

        assert_eq!(nodes.len(), 1);
        let Node::Category(java) = &nodes[0] else {
            panic!("expected a category");
        };
        assert_eq!(java.name, "java");
        assert_eq!(java.path, "java");
        assert_eq!(java.children.len(), 2);

        let docs = nodes[0].documents();
        let paths: Vec<_> = docs.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, ["java/intro.md", "java/sub/deep_dive.md"]);
        let titles: Vec<_> = docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["Java Basics", "deep dive"]);
    }

    #[test]
    fn empty_directories_produce_no_node() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("empty")).unwrap();
        write(temp_dir.path(), "nested/only/notes.txt", "not markdown\n");

        let config = SiteConfig::default();
        let nodes = Scanner::new(temp_dir.path().to_path_buf(), &config).scan();
        assert!(nodes.is_empty());
    }

    #[test]
    fn ignore_dirs_match_by_substring() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "my-assets-folder/page.md", "# Hidden\n");
        write(temp_dir.path(), "java/intro.md", "# Kept\n");

        let config = SiteConfig::default();
        let nodes = Scanner::new(temp_dir.path().to_path_buf(), &config).scan();

        assert_eq!(nodes.len(), 1);
        let Node::Category(category) = &nodes[0] else {
            panic!("expected a category");
        };
        assert_eq!(category.name, "java");
    }

    #[test]
    fn ignore_files_match_exactly() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "java/README.md", "# Readme\n");
        write(temp_dir.path(), "java/README-extra.md", "# Kept\n");

        let config = SiteConfig::default();
        let nodes = Scanner::new(temp_dir.path().to_path_buf(), &config).scan();

        let docs = nodes[0].documents();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "README-extra.md");
    }

    #[test]
    fn non_markdown_files_are_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "java/diagram.png", "binary-ish\n");
        write(temp_dir.path(), "java/intro.md", "# Intro\n");

        let config = SiteConfig::default();
        let nodes = Scanner::new(temp_dir.path().to_path_buf(), &config).scan();
        assert_eq!(nodes[0].document_count(), 1);
    }

    #[test]
    fn entries_are_sorted_by_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "java/zebra.md", "# Z\n");
        write(temp_dir.path(), "java/alpha.md", "# A\n");
        write(temp_dir.path(), "java/mid.md", "# M\n");

        let config = SiteConfig::default();
        let nodes = Scanner::new(temp_dir.path().to_path_buf(), &config).scan();

        let names: Vec<_> = nodes[0].documents().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["alpha.md", "mid.md", "zebra.md"]);
    }

    #[test]
    fn missing_root_yields_empty_scan() {
        let config = SiteConfig::default();
        let nodes = Scanner::new(PathBuf::from("/nonexistent/docs"), &config).scan();
        assert!(nodes.is_empty());
    }
}
