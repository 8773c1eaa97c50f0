use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repofinder", version, about = "Search GitHub repositories from the terminal")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "REPOFINDER_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Search API base URL (overrides config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Show debug logs on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    /// Standalone HTML page
    Html,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search repositories by keyword
    #[command(visible_alias = "s")]
    Search {
        /// Search terms (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Interactive search session reading queries from stdin
    ///
    /// Plain lines are submitted as searches. Lines starting with '/' navigate
    /// ('/' is the search page). ':open N' opens result N in the browser,
    /// ':help' lists commands and ':quit' exits.
    #[command(visible_alias = "i")]
    Interactive,
    /// Render the page for a route path (e.g. '/')
    View {
        /// Route path
        #[arg(default_value = "/")]
        path: String,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "repofinder", &mut std::io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_joins_words() {
        let cli = Cli::parse_from(["repofinder", "search", "web", "framework"]);
        match cli.command {
            Commands::Search { query } => assert_eq!(query.join(" "), "web framework"),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "repofinder",
            "view",
            "/missing",
            "--format",
            "html",
            "--api-url",
            "http://localhost:1",
        ]);
        assert_eq!(cli.format, OutputFormat::Html);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:1"));
        assert!(matches!(cli.command, Commands::View { ref path } if path == "/missing"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
