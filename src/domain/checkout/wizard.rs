//! Checkout wizard: the current step plus the form being filled in.

use super::errors::CheckoutError;
use super::form::CheckoutForm;
use super::step::CheckoutStep;
use super::validation::validate_step;
use crate::domain::foundation::StateMachine;

/// Moves forward only when the current step validates; moves back freely.
#[derive(Debug, Clone, Default)]
pub struct CheckoutWizard {
    step: CheckoutStep,
    form: CheckoutForm,
}

impl CheckoutWizard {
    pub fn new(form: CheckoutForm) -> Self {
        Self {
            step: CheckoutStep::Account,
            form,
        }
    }

    /// Resumes a wizard at `step` with an already filled form.
    pub fn at(step: CheckoutStep, form: CheckoutForm) -> Self {
        Self { step, form }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CheckoutForm {
        &mut self.form
    }

    pub fn into_form(self) -> CheckoutForm {
        self.form
    }

    /// Validates the current step and moves to the next one.
    ///
    /// On Review there is no next step; the wizard stays put and returns Review.
    ///
    /// # Errors
    ///
    /// `CheckoutError::Validation` with the failing fields of the current step.
    pub fn advance(&mut self) -> Result<CheckoutStep, CheckoutError> {
        let errors = validate_step(self.step, &self.form);
        if !errors.is_empty() {
            return Err(CheckoutError::validation(self.step, errors));
        }
        let current = self.step;
        if let Some(next) = current.next() {
            self.step = current
                .transition_to(next)
                .map_err(|_| CheckoutError::InvalidTransition {
                    from: current,
                    to: next,
                })?;
        }
        Ok(self.step)
    }

    /// Moves to the previous step.
    ///
    /// # Errors
    ///
    /// `CheckoutError::InvalidTransition` when already on Account.
    pub fn back(&mut self) -> Result<CheckoutStep, CheckoutError> {
        let previous = self
            .step
            .previous()
            .ok_or(CheckoutError::InvalidTransition {
                from: self.step,
                to: self.step,
            })?;
        self.step = previous;
        Ok(self.step)
    }

    pub fn is_on_review(&self) -> bool {
        self.step == CheckoutStep::Review
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::{AccountType, PaymentDetails};

    fn filled_form() -> CheckoutForm {
        let mut form = CheckoutForm::default();
        form.account.account_type = AccountType::Guest;
        form.account.email = "ada@example.com".to_string();
        form.shipping.first_name = "Ada".to_string();
        form.shipping.last_name = "Lovelace".to_string();
        form.shipping.address = "12 Analytical Way".to_string();
        form.shipping.city = "Portland".to_string();
        form.shipping.state = "OR".to_string();
        form.shipping.zip_code = "97201".to_string();
        form.shipping.phone_number = "555-0100".to_string();
        form.payment = PaymentDetails::new("Ada Lovelace", "4242424242424242", "12/29", "123");
        form
    }

    #[test]
    fn walks_to_review_with_valid_form() {
        let mut wizard = CheckoutWizard::new(filled_form());
        assert_eq!(wizard.advance().unwrap(), CheckoutStep::Shipping);
        assert_eq!(wizard.advance().unwrap(), CheckoutStep::Payment);
        assert_eq!(wizard.advance().unwrap(), CheckoutStep::Review);
        assert!(wizard.is_on_review());
        assert_eq!(wizard.advance().unwrap(), CheckoutStep::Review);
    }

    #[test]
    fn invalid_step_blocks_advance() {
        let mut form = filled_form();
        form.account.email = String::new();
        let mut wizard = CheckoutWizard::new(form);
        let err = wizard.advance().unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Validation { step: CheckoutStep::Account, .. }
        ));
        assert_eq!(wizard.step(), CheckoutStep::Account);
    }

    #[test]
    fn back_from_account_fails() {
        let mut wizard = CheckoutWizard::default();
        assert!(wizard.back().is_err());
    }

    #[test]
    fn back_does_not_validate() {
        let mut wizard = CheckoutWizard::at(CheckoutStep::Payment, CheckoutForm::default());
        assert_eq!(wizard.back().unwrap(), CheckoutStep::Shipping);
    }
}
