//! Checkout wizard steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Step of the checkout wizard, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    #[default]
    Account,
    Shipping,
    Payment,
    Review,
}

impl CheckoutStep {
    /// All steps in wizard order.
    pub const ALL: [CheckoutStep; 4] = [
        CheckoutStep::Account,
        CheckoutStep::Shipping,
        CheckoutStep::Payment,
        CheckoutStep::Review,
    ];

    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Account => Some(CheckoutStep::Shipping),
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Review),
            CheckoutStep::Review => None,
        }
    }

    pub fn previous(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Account => None,
            CheckoutStep::Shipping => Some(CheckoutStep::Account),
            CheckoutStep::Payment => Some(CheckoutStep::Shipping),
            CheckoutStep::Review => Some(CheckoutStep::Payment),
        }
    }

    /// Zero-based position, used for progress display.
    pub fn index(&self) -> usize {
        match self {
            CheckoutStep::Account => 0,
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Review => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Account => "account",
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
        }
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StateMachine for CheckoutStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target) || self.previous() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.previous().into_iter().chain(self.next()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_run_in_order() {
        let mut step = CheckoutStep::Account;
        let mut seen = vec![step];
        while let Some(next) = step.next() {
            seen.push(next);
            step = next;
        }
        assert_eq!(seen, CheckoutStep::ALL.to_vec());
    }

    #[test]
    fn account_has_no_previous() {
        assert_eq!(CheckoutStep::Account.previous(), None);
    }

    #[test]
    fn cannot_skip_steps() {
        assert!(!CheckoutStep::Account.can_transition_to(&CheckoutStep::Payment));
        assert!(CheckoutStep::Account
            .transition_to(CheckoutStep::Review)
            .is_err());
    }

    #[test]
    fn review_goes_back_to_payment() {
        assert_eq!(
            CheckoutStep::Review.valid_transitions(),
            vec![CheckoutStep::Payment]
        );
        assert!(!CheckoutStep::Review.is_terminal());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&CheckoutStep::Shipping).unwrap(),
            "\"shipping\""
        );
    }
}
