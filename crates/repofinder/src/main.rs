mod card;
mod cli;
mod color;
mod config;
mod html;
mod not_found;
mod notifier;
mod output;
mod page;
mod router;
mod session;
mod strings;

#[cfg(test)]
mod page_tests;

use anyhow::{bail, Result};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use github_backend::GitHubClient;
use notifier::TerminalNotifier;
use output::{output_error, output_not_found, output_page};
use page::{SearchPage, SubmitOutcome};
use router::Route;
use session::Session;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            output_error(&e, cli.format);
            ExitCode::from(1)
        }
    }
}

/// Logs go to stderr so they never mix with rendered output.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "repofinder=debug,github_backend=debug"
    } else {
        "repofinder=warn,github_backend=warn"
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    if let Commands::Completions { shell } = &cli.command {
        Cli::generate_completions(*shell);
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.api_url.clone());
    config.validate()?;
    tracing::debug!(api_url = %config.api_url, "configuration loaded");

    let client = GitHubClient::with_base_url(&config.api_url).with_user_agent(&config.user_agent);

    match &cli.command {
        Commands::Search { query } => handle_search(&client, &query.join(" "), cli.format),
        Commands::Interactive => handle_interactive(&client, cli.format),
        Commands::View { path } => handle_view(&client, path, cli.format),
        Commands::Completions { .. } => unreachable!("completions are handled before config"),
    }
}

fn handle_search(client: &GitHubClient, query: &str, format: OutputFormat) -> Result<ExitCode> {
    let text = format == OutputFormat::Text;
    let notifier = TerminalNotifier::new(text, text);
    let mut page = SearchPage::new(client, &notifier);

    let outcome = page.submit_search(query);
    output_page(&page, notifier.take_notifications(), format);

    Ok(match outcome {
        SubmitOutcome::Loaded(_) => ExitCode::SUCCESS,
        SubmitOutcome::Rejected | SubmitOutcome::Failed => ExitCode::from(1),
    })
}

fn handle_interactive(client: &GitHubClient, format: OutputFormat) -> Result<ExitCode> {
    if format != OutputFormat::Text {
        bail!("Interactive mode only supports text output");
    }

    let notifier = TerminalNotifier::new(true, true);
    let page = SearchPage::new(client, &notifier);
    let opener = |url: &str| open::that(url);

    let stdout = std::io::stdout();
    let mut session = Session::new(page, stdout.lock(), &opener);
    session.run(std::io::stdin().lock())?;
    Ok(ExitCode::SUCCESS)
}

fn handle_view(client: &GitHubClient, path: &str, format: OutputFormat) -> Result<ExitCode> {
    match Route::resolve(path) {
        Route::Search => {
            let notifier = TerminalNotifier::new(false, false);
            let page = SearchPage::new(client, &notifier);
            match format {
                // The empty page has nothing below the form, so print the title
                OutputFormat::Text => println!("{}", strings::APP_TITLE),
                _ => output_page(&page, Vec::new(), format),
            }
            Ok(ExitCode::SUCCESS)
        }
        Route::NotFound(path) => {
            output_not_found(&path, format);
            Ok(ExitCode::from(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_keeps_warnings() {
        assert_eq!(default_log_filter(false), "repofinder=warn,github_backend=warn");
        assert!(default_log_filter(true).contains("repofinder=debug"));
        // Both directives must parse, or the subscriber would drop them
        EnvFilter::try_new(default_log_filter(false)).unwrap();
        EnvFilter::try_new(default_log_filter(true)).unwrap();
    }
}
