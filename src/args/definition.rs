//! Command-line argument definition and processing.

use clap::Parser;

/// Dashsea - A fast, friendly TUI for reading and searching the DashSteam automotive blog
#[derive(Parser, Debug)]
#[command(name = "dashsea")]
#[command(version)]
#[command(about = "A fast, friendly TUI for reading and searching the DashSteam automotive blog", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Search posts from the command line and print matches
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print one post (plain text) by its slug
    #[arg(short, long)]
    pub post: Option<String>,

    /// List the available categories
    #[arg(long)]
    pub categories: bool,

    /// Open a specific view at startup (home, blogs, about, contact)
    #[arg(long)]
    pub view: Option<String>,
}

/// What: Process command-line arguments and handle early-exit modes.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Returns the startup view override for the TUI when no early-exit mode
///   matched; early-exit modes terminate the process themselves.
///
/// Details:
/// - `--search`, `--post`, and `--categories` fetch once, print to stdout,
///   and exit with a nonzero code on failure.
pub async fn process_args(args: &Args) -> Option<crate::state::View> {
    use super::handlers;

    if let Some(query) = &args.search {
        handlers::handle_search(query).await;
    }
    if let Some(slug) = &args.post {
        handlers::handle_post(slug).await;
    }
    if args.categories {
        handlers::handle_categories().await;
    }

    args.view.as_deref().and_then(crate::state::View::from_config_key)
}
