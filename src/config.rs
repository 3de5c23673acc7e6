//! Runtime configuration utilities for medqa-assistant.

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

/// Policy knobs for Q&A retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetrievalPolicy {
    /// Maximum number of candidates kept after ranking.
    pub top_k: usize,
    /// Candidates scoring below this are discarded.
    pub min_score: f64,
    /// Lead the best candidate needs over the runner-up to be answered alone.
    pub confidence_margin: f64,
}

impl Default for RetrievalPolicy {
    fn default() -> Self {
        Self {
            top_k: 3,
            min_score: 0.5,
            confidence_margin: 0.1,
        }
    }
}

impl RetrievalPolicy {
    /// Reject policies under which retrieval could never answer.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.top_k >= 1, "top_k must be at least 1");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.min_score),
            "min_score {} is outside 0..=1",
            self.min_score
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.confidence_margin),
            "confidence_margin {} is outside 0..=1",
            self.confidence_margin
        );
        Ok(())
    }
}

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Retrieval thresholds applied to every session.
    pub policy: RetrievalPolicy,
    /// Optional directory of extra Q&A files merged into new sessions.
    pub qna_dir: Option<PathBuf>,
    /// Upper bound on concurrently open API sessions.
    pub max_sessions: usize,
    /// Sessions untouched for this long are dropped when a new one is created.
    pub session_idle_secs: u64,
    /// Longest utterance the API accepts, in characters.
    pub max_query_chars: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: RetrievalPolicy::default(),
            qna_dir: None,
            max_sessions: 1_000,
            session_idle_secs: 30 * 60,
            max_query_chars: 2_000,
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = RetrievalPolicy::default();
        let policy = RetrievalPolicy {
            top_k: env_or("MEDQA_TOP_K", defaults.top_k),
            min_score: env_or("MEDQA_MIN_SCORE", defaults.min_score),
            confidence_margin: env_or("MEDQA_CONFIDENCE_MARGIN", defaults.confidence_margin),
        };
        let qna_dir = env::var("MEDQA_QNA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let defaults = Self::default();
        let settings = Self {
            policy,
            qna_dir,
            max_sessions: env_or("MEDQA_MAX_SESSIONS", defaults.max_sessions),
            session_idle_secs: env_or("MEDQA_SESSION_IDLE_SECS", defaults.session_idle_secs),
            max_query_chars: env_or("MEDQA_MAX_QUERY_CHARS", defaults.max_query_chars),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.policy.validate()?;
        anyhow::ensure!(self.max_sessions >= 1, "max_sessions must be at least 1");
        anyhow::ensure!(self.max_query_chars >= 1, "max_query_chars must be at least 1");
        Ok(())
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        assert!(RetrievalPolicy::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_policies_are_rejected() {
        let base = RetrievalPolicy::default();
        for bad in [
            RetrievalPolicy { top_k: 0, ..base },
            RetrievalPolicy { min_score: 1.5, ..base },
            RetrievalPolicy { min_score: f64::NAN, ..base },
            RetrievalPolicy { confidence_margin: -0.1, ..base },
        ] {
            assert!(bad.validate().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn session_limits_must_be_positive() {
        assert!(Settings::default().validate().is_ok());
        let no_sessions = Settings {
            max_sessions: 0,
            ..Settings::default()
        };
        assert!(no_sessions.validate().is_err());
        let no_text = Settings {
            max_query_chars: 0,
            ..Settings::default()
        };
        assert!(no_text.validate().is_err());
    }

    #[test]
    fn unparseable_values_fall_back() {
        assert_eq!(env_or("MEDQA_TEST_UNSET_KEY", 7usize), 7);
    }
}
