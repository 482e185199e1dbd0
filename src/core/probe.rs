use crate::utils::Result;

/// Outcome of a read-only git query.
///
/// Enumeration failures are rendered as "nothing found" so one broken query
/// does not abort the rest of a run, but callers can still tell an empty
/// answer apart from a failed one and say so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe<T> {
    Found(T),
    Failed { reason: String },
}

impl<T> Probe<T> {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Probe<U> {
        match self {
            Probe::Found(value) => Probe::Found(f(value)),
            Probe::Failed { reason } => Probe::Failed { reason },
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Probe<U>) -> Probe<U> {
        match self {
            Probe::Found(value) => f(value),
            Probe::Failed { reason } => Probe::Failed { reason },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Probe::Failed { .. })
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Probe::Found(_) => None,
            Probe::Failed { reason } => Some(reason.as_str()),
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            Probe::Found(value) => Some(value),
            Probe::Failed { .. } => None,
        }
    }
}

impl<T: Default> Probe<T> {
    pub fn unwrap_or_empty(self) -> T {
        self.found().unwrap_or_default()
    }
}

impl<T> From<Result<T>> for Probe<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Probe::Found(value),
            Err(e) => Probe::failed(e.to_string()),
        }
    }
}
