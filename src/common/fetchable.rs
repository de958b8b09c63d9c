use std::fmt;

/// What went wrong while fetching; coarse on purpose, pages only need to
/// know whether to render a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    NotFound,
    Database,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Database => write!(f, "database error"),
        }
    }
}

/// The one fetch lifecycle shared by every page: a request is started,
/// then resolves to either data or a failure. One shape instead of a
/// per-page loading/error/data triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetchable<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> Fetchable<T> {
    pub fn from_result(result: Result<T, sqlx::Error>) -> Self {
        match result {
            Ok(value) => Fetchable::Loaded(value),
            Err(sqlx::Error::RowNotFound) => Fetchable::Failed(FetchError::NotFound),
            Err(_) => Fetchable::Failed(FetchError::Database),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Fetchable::Failed(_))
    }

    /// Loaded data or a fallback for the placeholder render.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Fetchable::Loaded(value) => value,
            _ => fallback,
        }
    }
}

impl<T> Default for Fetchable<T> {
    fn default() -> Self {
        Fetchable::Idle
    }
}
