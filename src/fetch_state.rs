//! Inputs such as stake activity or proposals are fetched elsewhere. Computations over them only
//! run once a fetch completed, and "still loading" or "failed" must never read as an empty result.

#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> FetchState<&T> {
        match self {
            Self::Loading => FetchState::Loading,
            Self::Failed(error) => FetchState::Failed(error.clone()),
            Self::Ready(value) => FetchState::Ready(value),
        }
    }

    /// Transforms a ready value, loading and failed states pass through.
    pub fn map<U, F>(self, f: F) -> FetchState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Loading => FetchState::Loading,
            Self::Failed(error) => FetchState::Failed(error),
            Self::Ready(value) => FetchState::Ready(f(value)),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for FetchState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => Self::Failed(error.to_string()),
        }
    }
}
