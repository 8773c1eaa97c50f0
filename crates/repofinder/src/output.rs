use crate::cli::OutputFormat;
use crate::html;
use crate::not_found::NotFoundView;
use crate::page::SearchPage;
use colored::Colorize;
use search_core::Notification;
use serde::Serialize;

/// Print the search page in the requested format
pub fn output_page(page: &SearchPage<'_>, notifications: Vec<Notification>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&page.view(notifications)) {
                println!("{}", json);
            }
        }
        OutputFormat::Html => {
            print!("{}", html::document(&page.render_html(&notifications)));
        }
        OutputFormat::Text => {
            // Notifications were already echoed to stderr
            let rendered = page.render_text();
            if !rendered.is_empty() {
                println!("{}", rendered);
            }
        }
    }
}

#[derive(Serialize)]
struct JsonNotFound<'a> {
    status: u16,
    path: &'a str,
    home: &'a str,
}

/// Print the fallback view for an unknown route
pub fn output_not_found(path: &str, format: OutputFormat) {
    let view = NotFoundView::new(path);
    match format {
        OutputFormat::Json => {
            let json = JsonNotFound {
                status: 404,
                path,
                home: view.home_target(),
            };
            if let Ok(json) = serde_json::to_string_pretty(&json) {
                println!("{}", json);
            }
        }
        OutputFormat::Html => print!("{}", html::document(&view.render_html())),
        OutputFormat::Text => println!("{}", view.render_text()),
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: "error".to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err)
                .unwrap_or_else(|_| format!(r#"{{"error": true, "message": "{}"}}"#, err))
        }
        OutputFormat::Text | OutputFormat::Html => {
            format!("{}: {:#}", "Error".red().bold(), err)
        }
    };
    eprintln!("{}", message);
}
