use serde::Deserialize;

/// Display metadata for one navigation group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryMeta {
    pub name: String,
    pub icon: String,
}

/// A Markdown content file discovered during the scan.
#[derive(Debug)]
pub struct Document {
    /// Filename, extension included.
    pub name: String,
    /// Slash-joined path relative to the docs root, extension included.
    pub path: String,
    /// Display title, from the file's first `#` heading or the filename.
    pub title: String,
}

/// A directory that (transitively) contains at least one document.
#[derive(Debug)]
pub struct Category {
    pub name: String,
    pub path: String,
    pub children: Vec<Node>,
}

/// One entry in the scanned content tree.
///
/// The tree is strictly hierarchical: a category exclusively owns its
/// children, and the whole structure is rebuilt from scratch on every run.
#[derive(Debug)]
pub enum Node {
    Category(Category),
    Document(Document),
}

impl Node {
    /// Total number of documents anywhere beneath this node.
    pub fn document_count(&self) -> usize {
        match self {
            Node::Document(_) => 1,
            Node::Category(category) => {
                category.children.iter().map(Node::document_count).sum()
            }
        }
    }

    /// Pre-order list of every document in this subtree, discarding the
    /// intermediate directory levels. A document flattens to itself.
    pub fn documents(&self) -> Vec<&Document> {
        let mut docs = Vec::new();
        self.collect_documents(&mut docs);
        docs
    }

    fn collect_documents<'a>(&'a self, out: &mut Vec<&'a Document>) {
        match self {
            Node::Document(doc) => out.push(doc),
            Node::Category(category) => {
                for child in &category.children {
                    child.collect_documents(out);
                }
            }
        }
    }
}
