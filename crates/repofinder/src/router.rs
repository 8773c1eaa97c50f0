/// Pages the application can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The search form and its results, at `/`
    Search,
    /// Catch-all for every other path
    NotFound(String),
}

impl Route {
    pub const HOME: &'static str = "/";

    /// Resolve a path. Query strings and fragments are ignored; the empty
    /// path counts as home.
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim();
        let bare = trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        match bare {
            "" | Self::HOME => Route::Search,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Search => Self::HOME,
            Route::NotFound(path) => path,
        }
    }
}
