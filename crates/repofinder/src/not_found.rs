use colored::Colorize;

use crate::html::escape;
use crate::router::Route;
use crate::strings;

/// Static fallback shown for paths no route matches
pub struct NotFoundView<'a> {
    path: &'a str,
}

impl<'a> NotFoundView<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }

    /// Where the single navigation action leads
    pub fn home_target(&self) -> &'static str {
        Route::HOME
    }

    pub fn render_text(&self) -> String {
        format!(
            "{}\n{}\n{}\n  {}\n\n{} {}",
            strings::NOT_FOUND_CODE.red().bold(),
            strings::NOT_FOUND_TITLE.white().bold(),
            strings::NOT_FOUND_MESSAGE.dimmed(),
            self.path.dimmed(),
            format!("{}:", strings::BACK_HOME).cyan(),
            self.home_target()
        )
    }

    pub fn render_html(&self) -> String {
        format!(
            "<main class=\"not-found\">\n<h1>{code}</h1>\n<h2>{title}</h2>\n<p>{message}</p>\n\
             <a class=\"button\" href=\"{home}\">{back}</a>\n</main>",
            code = strings::NOT_FOUND_CODE,
            title = escape(strings::NOT_FOUND_TITLE),
            message = escape(strings::NOT_FOUND_MESSAGE),
            home = self.home_target(),
            back = escape(strings::BACK_HOME),
        )
    }
}
