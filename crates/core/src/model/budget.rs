use serde::{Deserialize, Serialize};

/// Remaining time for a session, kept inside `[0, limit]` on every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBudget {
    remaining: f64,
    limit: f64,
}

impl TimeBudget {
    /// Seconds a session starts with, and the most it can ever hold.
    pub const DEFAULT_LIMIT_SECS: f64 = 60.0;

    /// A full budget capped at `limit` seconds. Non-finite or negative limits fall back to the default.
    #[must_use]
    pub fn full(limit: f64) -> Self {
        let limit = if limit.is_finite() && limit > 0.0 {
            limit
        } else {
            Self::DEFAULT_LIMIT_SECS
        };
        Self {
            remaining: limit,
            limit,
        }
    }

    /// A budget with explicit remaining time, clamped into range.
    #[must_use]
    pub fn with_remaining(limit: f64, remaining: f64) -> Self {
        let mut budget = Self::full(limit);
        budget.remaining = budget.clamp(remaining);
        budget
    }

    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    #[must_use]
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Fraction of the cap still available, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.remaining / self.limit
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Subtract elapsed time. Returns true once the budget is empty.
    pub fn decay(&mut self, delta_secs: f64) -> bool {
        let delta = if delta_secs.is_finite() && delta_secs > 0.0 {
            delta_secs
        } else {
            0.0
        };
        self.remaining = self.clamp(self.remaining - delta);
        self.is_exhausted()
    }

    /// Apply a signed adjustment. Returns true once the budget is empty.
    pub fn adjust(&mut self, seconds: i32) -> bool {
        self.remaining = self.clamp(self.remaining + f64::from(seconds));
        self.is_exhausted()
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, self.limit)
    }
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self::full(Self::DEFAULT_LIMIT_SECS)
    }
}
