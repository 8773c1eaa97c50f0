//! Interactive search session over a line-based input

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::not_found::NotFoundView;
use crate::page::SearchPage;
use crate::router::Route;
use crate::strings;

/// Opens an external link in a new browsing context
pub type LinkOpener<'a> = &'a dyn Fn(&str) -> std::io::Result<()>;

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Query(String),
    Navigate(String),
    Open(usize),
    Help,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.starts_with('/') {
        return Input::Navigate(trimmed.to_string());
    }
    let Some(command) = trimmed.strip_prefix(':') else {
        // Queries are forwarded as typed
        return Input::Query(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("q" | "quit" | "exit"), None) => Input::Quit,
        (Some("h" | "help"), None) => Input::Help,
        (Some("o" | "open"), Some(n)) => match n.parse() {
            Ok(n) => Input::Open(n),
            Err(_) => Input::Unknown(trimmed.to_string()),
        },
        _ => Input::Unknown(trimmed.to_string()),
    }
}

const HELP: &str = "\
  <terms>    search repositories
  /path      navigate ('/' is the search page)
  :open N    open result N in the browser
  :help      show this help
  :quit      exit";

/// Drives a SearchPage from lines of input, the terminal stand-in for the
/// form, the router and the card links.
pub struct Session<'a, W: Write> {
    page: SearchPage<'a>,
    route: Route,
    out: W,
    opener: LinkOpener<'a>,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(page: SearchPage<'a>, out: W, opener: LinkOpener<'a>) -> Self {
        Self {
            page,
            route: Route::Search,
            out,
            opener,
        }
    }

    /// Read lines until end of input or `:quit`
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        writeln!(self.out, "{}", strings::APP_TITLE.white().bold())?;
        writeln!(self.out, "{}", "Type search terms, or :help".dimmed())?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if !self.handle(&line)? {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Handle one line; returns false when the session should end
    fn handle(&mut self, line: &str) -> Result<bool> {
        match parse_input(line) {
            Input::Quit => return Ok(false),
            Input::Help => writeln!(self.out, "{}", HELP)?,
            Input::Unknown(command) => {
                writeln!(self.out, "Unknown command: {} (try :help)", command)?
            }
            Input::Navigate(path) => {
                self.route = Route::resolve(&path);
                debug!(path = self.route.path(), "navigated");
                self.render_route()?;
            }
            Input::Query(query) => match &self.route {
                Route::Search => {
                    self.page.submit_search(&query);
                    let rendered = self.page.render_text();
                    if !rendered.is_empty() {
                        writeln!(self.out, "{}", rendered)?;
                    }
                }
                Route::NotFound(_) => writeln!(
                    self.out,
                    "{}: {}",
                    strings::BACK_HOME.cyan(),
                    Route::HOME
                )?,
            },
            Input::Open(position) => self.open_result(position)?,
        }
        Ok(true)
    }

    fn render_route(&mut self) -> Result<()> {
        match &self.route {
            Route::Search => {
                writeln!(self.out, "{}", strings::APP_TITLE.white().bold())?;
                if !self.page.form().query().is_empty() {
                    writeln!(
                        self.out,
                        "{}: {}",
                        strings::SEARCH_LABEL.dimmed(),
                        self.page.form().query()
                    )?;
                }
                let rendered = self.page.render_text();
                if !rendered.is_empty() {
                    writeln!(self.out, "{}", rendered)?;
                }
            }
            Route::NotFound(path) => {
                writeln!(self.out, "{}", NotFoundView::new(path).render_text())?;
            }
        }
        Ok(())
    }

    fn open_result(&mut self, position: usize) -> Result<()> {
        let url = position
            .checked_sub(1)
            .and_then(|i| self.page.results().get(i))
            .map(|repo| repo.url.clone());

        match url {
            Some(url) => {
                (self.opener)(&url).with_context(|| format!("Failed to open {}", url))?;
                writeln!(self.out, "Opened {}", url)?;
            }
            None => writeln!(
                self.out,
                "No result #{} ({} shown)",
                position,
                self.page.results().len()
            )?,
        }
        Ok(())
    }
}
