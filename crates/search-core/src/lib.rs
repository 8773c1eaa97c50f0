pub mod error;
pub mod models;
pub mod traits;

pub use error::{Result, SearchError};
pub use models::*;
pub use traits::{Notifier, RepositorySearch};
