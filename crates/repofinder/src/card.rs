//! Card rendering for a single search result

use colored::Colorize;
use search_core::RepositorySummary;

use crate::html::escape;
use crate::strings;

/// Stateless renderer for one repository.
///
/// Rendering is total: missing optional fields fall back to a placeholder
/// (description) or are left out (language badge).
pub struct ProjectCard<'a> {
    repository: &'a RepositorySummary,
}

impl<'a> ProjectCard<'a> {
    pub fn new(repository: &'a RepositorySummary) -> Self {
        Self { repository }
    }

    /// Render key, unique per repository
    pub fn key(&self) -> u64 {
        self.repository.id
    }

    /// Terminal rendering. `position` is the 1-based number shown in front of
    /// the name, used by `:open N` in interactive mode.
    pub fn render_text(&self, position: usize) -> String {
        let repo = self.repository;

        let mut output = format!(
            "{} {}  {}",
            format!("[{}]", position).dimmed(),
            repo.name.cyan().bold(),
            format!("@{}", repo.owner.login).white(),
        );
        // Terminals can't draw the avatar, so its URL stands in for it
        if !repo.owner.avatar_url.is_empty() {
            output.push_str(&format!("\n    {}", repo.owner.avatar_url.dimmed()));
        }
        output.push_str(&format!(
            "\n    {}",
            match repo.description() {
                Some(desc) => desc.to_string(),
                None => strings::NO_DESCRIPTION.dimmed().italic().to_string(),
            }
        ));

        output.push_str(&format!(
            "\n    {} {}",
            strings::STAR_ICON.yellow(),
            repo.star_count
        ));
        if let Some(language) = repo.language() {
            output.push_str(&format!("   {}", format!("[{}]", language).magenta()));
        }

        output.push_str(&format!(
            "\n    {}: {}",
            strings::VIEW_PROJECT.dimmed(),
            repo.url.blue().underline()
        ));
        output
    }

    /// HTML rendering; the outbound link opens in a new browsing context
    pub fn render_html(&self) -> String {
        let repo = self.repository;

        let description = match repo.description() {
            Some(desc) => format!("<p class=\"description\">{}</p>", escape(desc)),
            None => format!(
                "<p class=\"description placeholder\">{}</p>",
                escape(strings::NO_DESCRIPTION)
            ),
        };
        let language = repo
            .language()
            .map(|l| format!("<span class=\"badge language\">{}</span>", escape(l)))
            .unwrap_or_default();

        format!(
            "<article class=\"card\" data-key=\"{key}\">\n\
             <div class=\"owner\"><img src=\"{avatar}\" alt=\"{login}\">\
             <div><h3>{name}</h3><p class=\"login\">{login}</p></div></div>\n\
             {description}\n\
             <div class=\"meta\"><span class=\"stars\"><span class=\"icon\">{star}</span> {stars}</span>{language}</div>\n\
             <a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{view}</a>\n\
             </article>",
            key = self.key(),
            avatar = escape(&repo.owner.avatar_url),
            login = escape(&repo.owner.login),
            name = escape(&repo.name),
            description = description,
            star = strings::STAR_ICON,
            stars = repo.star_count,
            language = language,
            url = escape(&repo.url),
            view = escape(strings::VIEW_PROJECT),
        )
    }
}
