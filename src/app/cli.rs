use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Maintenance tools for the Markdown docs site"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rescan the docs tree and regenerate the navigation sidebar
    Sidebar,

    /// Create a new article from a category shorthand and a title
    New {
        /// Category shorthand (e.g. java, linux, algo)
        category: String,

        /// Article title; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
}
