use crate::app::models::CategoryMeta;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Content root, relative to the invocation directory.
pub const DOCS_DIR: &str = "docs";
/// Generated navigation file, inside the content root.
pub const SIDEBAR_FILE: &str = "_sidebar.md";
/// Optional override file, inside the content root.
pub const CONFIG_FILE: &str = ".mdnav.toml";
pub const MARKDOWN_EXT: &str = ".md";
/// Icon for directories absent from the category map.
pub const FALLBACK_ICON: &str = "📁";

const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("java", "Java", "☕"),
    ("spring", "Spring", "🌱"),
    ("springboot", "SpringBoot", "🚀"),
    ("programmingLanguage", "编程语言", "💻"),
    ("golang_study", "Golang", "🐹"),
    ("linux", "Linux", "🐧"),
    ("mac", "Mac", "🍎"),
    ("nginx", "Nginx", "🌐"),
    ("mybatis", "MyBatis", "🗃️"),
    ("nodejs", "Node.js", "📦"),
    ("data_structure_algorithms", "数据结构与算法", "🔢"),
    ("binary_tree", "二叉树", "🌳"),
    ("tree", "树", "🌲"),
    ("leetcode", "LeetCode", "💡"),
    ("interview", "面试", "📝"),
    ("vscode", "VSCode", "🛠️"),
];

/// Directories whose name *contains* any of these are skipped entirely.
const DEFAULT_IGNORE_DIRS: &[&str] = &["images", "assets", ".git", "node_modules", "scripts"];

/// Files skipped by exact name match.
const DEFAULT_IGNORE_FILES: &[&str] =
    &["_sidebar.md", "_navbar.md", ".nojekyll", "index.html", "README.md"];

/// Shorthand accepted by `mdnav new`, mapped to a directory under the root.
const DEFAULT_ARTICLE_DIRS: &[(&str, &str)] = &[
    ("java", "java"),
    ("spring", "spring"),
    ("springboot", "springboot"),
    ("go", "programmingLanguage/golang_study"),
    ("golang", "programmingLanguage/golang_study"),
    ("linux", "linux"),
    ("mac", "mac"),
    ("nginx", "nginx"),
    ("mybatis", "mybatis"),
    ("node", "nodejs"),
    ("nodejs", "nodejs"),
    ("algo", "data_structure_algorithms"),
    ("leetcode", "leetcode"),
    ("interview", "interview"),
    ("vscode", "vscode"),
];

/// Immutable site configuration, resolved once at startup and passed
/// explicitly into the scanner, renderer, and scaffolder.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory name -> display name and icon for the sidebar group.
    pub categories: HashMap<String, CategoryMeta>,
    pub ignore_dirs: Vec<String>,
    pub ignore_files: Vec<String>,
    /// Category shorthand -> relative subdirectory for new articles.
    pub article_dirs: HashMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|(key, name, icon)| {
                    (
                        (*key).to_string(),
                        CategoryMeta {
                            name: (*name).to_string(),
                            icon: (*icon).to_string(),
                        },
                    )
                })
                .collect(),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| (*s).to_string()).collect(),
            ignore_files: DEFAULT_IGNORE_FILES.iter().map(|s| (*s).to_string()).collect(),
            article_dirs: DEFAULT_ARTICLE_DIRS
                .iter()
                .map(|(key, dir)| ((*key).to_string(), (*dir).to_string()))
                .collect(),
        }
    }
}

/// On-disk override format; every table is optional.
#[derive(Deserialize, Debug, Default)]
struct ConfigFile {
    categories: Option<HashMap<String, CategoryMeta>>,
    ignore_dirs: Option<Vec<String>>,
    ignore_files: Option<Vec<String>>,
    article_dirs: Option<HashMap<String, String>>,
}

fn merge_vecs(base: &mut Vec<String>, extra: Option<Vec<String>>) {
    if let Some(mut items) = extra {
        base.append(&mut items);
    }
    // Deduplicate while keeping order
    let mut seen = HashSet::new();
    base.retain(|item| seen.insert(item.clone()));
}

fn merge(config: &mut SiteConfig, overrides: ConfigFile) {
    if let Some(categories) = overrides.categories {
        config.categories.extend(categories);
    }
    merge_vecs(&mut config.ignore_dirs, overrides.ignore_dirs);
    merge_vecs(&mut config.ignore_files, overrides.ignore_files);
    if let Some(article_dirs) = overrides.article_dirs {
        config.article_dirs.extend(article_dirs);
    }
}

/// Compiled-in defaults, with `.mdnav.toml` from the docs root merged on
/// top when present. A missing file is not an error; a malformed one is.
pub fn resolve_config(docs_dir: &Path) -> Result<SiteConfig> {
    let mut config = SiteConfig::default();

    let path = docs_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(config);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let overrides: ConfigFile =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;

    merge(&mut config, overrides);
    Ok(config)
}
