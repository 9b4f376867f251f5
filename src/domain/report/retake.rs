//! Retake eligibility policy.

use crate::domain::foundation::Timestamp;

/// When a user may sit the assessment again.
///
/// The interval is calendar months added to the latest result's creation
/// date, not a fixed day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetakePolicy {
    months: u32,
}

impl RetakePolicy {
    /// Creates a policy with a custom interval.
    pub fn new(months: u32) -> Self {
        Self { months }
    }

    /// Evaluates eligibility against the latest result, if any.
    ///
    /// A user with no previous result may always take the assessment.
    pub fn evaluate(&self, last_taken: Option<&Timestamp>, now: &Timestamp) -> RetakeEligibility {
        match last_taken {
            None => RetakeEligibility {
                allowed: true,
                days_remaining: 0,
                available_at: None,
            },
            Some(last) => {
                let available_at = last.add_calendar_months(self.months);
                let allowed = !now.is_before(&available_at);
                RetakeEligibility {
                    allowed,
                    days_remaining: now.days_until(&available_at),
                    available_at: Some(available_at),
                }
            }
        }
    }
}

impl Default for RetakePolicy {
    /// The product's standard six-month interval.
    fn default() -> Self {
        Self { months: 6 }
    }
}

/// Outcome of a retake eligibility check.
///
/// `days_remaining` is the ceiling of the time left, in whole days; zero
/// whenever `allowed` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetakeEligibility {
    pub allowed: bool,
    pub days_remaining: i64,
    pub available_at: Option<Timestamp>,
}
