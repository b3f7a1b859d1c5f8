use crate::error::ClientError;

/// Tri-state view of a remote value, for UI code that must tell "still
/// loading" apart from "loaded" and "failed".
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Success(T),
    Failure(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// Result of a service call: always usable data, plus the failure that
/// forced a default, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub error: Option<ClientError>,
}

impl<T> Fetched<T> {
    pub fn ok(data: T) -> Self {
        Self { data, error: None }
    }

    pub fn fallback(data: T, error: ClientError) -> Self {
        Self {
            data,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Drops the fallback data when the call failed.
    pub fn into_state(self) -> LoadState<T> {
        match self.error {
            None => LoadState::Success(self.data),
            Some(err) => LoadState::Failure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_is_the_initial_state() {
        let state: LoadState<Vec<String>> = LoadState::default();
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn failed_fetch_becomes_failure_state() {
        let fetched = Fetched::fallback(Vec::<String>::new(), ClientError::Network("refused".into()));
        assert!(!fetched.is_ok());
        let state = fetched.into_state();
        assert!(state.error().is_some_and(|m| m.contains("refused")));
        assert!(state.data().is_none());
    }

    #[test]
    fn successful_fetch_keeps_data() {
        let state = Fetched::ok(vec!["Books".to_string()]).into_state();
        assert_eq!(state, LoadState::Success(vec!["Books".to_string()]));
    }
}
