//! Search policy types.

use std::time::Duration;

use serde::Deserialize;

use crate::error::SearchError;

/// Search budget configuration, applied to each search call separately.
///
/// Deserialises from JSON with missing fields defaulted and unknown fields
/// rejected, e.g. `{"max_expansions": 5000, "time_limit_ms": 200}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Hard cap on node expansions.
    pub max_expansions: u64,
    /// Depth cutoff; deeper candidates are skipped.
    pub max_depth: u32,
    /// Optional wall-clock cap in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl SearchPolicy {
    /// Check the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if a budget is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_depth == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_depth must be at least 1".into(),
            });
        }
        if self.time_limit_ms == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "time_limit_ms must be at least 1 when set".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Parse a policy from JSON text and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] on malformed JSON, unknown
    /// fields or a failed [`validate`](Self::validate).
    pub fn from_json_str(text: &str) -> Result<Self, SearchError> {
        let policy: Self =
            serde_json::from_str(text).map_err(|e| SearchError::InvalidPolicy {
                detail: e.to_string(),
            })?;
        policy.validate()?;
        Ok(policy)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: 100_000,
            max_depth: 10_000,
            time_limit_ms: None,
        }
    }
}
