//! ValidateStepHandler - Checks one checkout step and reports the next one.

use serde::Serialize;

use crate::domain::checkout::{CheckoutError, CheckoutForm, CheckoutStep, CheckoutWizard, FieldErrors};

/// Command to validate the fields of `step`.
#[derive(Debug, Clone)]
pub struct ValidateStepCommand {
    pub step: CheckoutStep,
    pub form: CheckoutForm,
}

/// Outcome of validating a step. Invalid fields are data, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateStepResult {
    pub step: CheckoutStep,
    pub valid: bool,
    pub errors: FieldErrors,
    /// Step the shopper may move to; `None` while the step is invalid.
    pub next_step: Option<CheckoutStep>,
}

#[derive(Debug, Default)]
pub struct ValidateStepHandler;

impl ValidateStepHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: ValidateStepCommand) -> Result<ValidateStepResult, CheckoutError> {
        let mut wizard = CheckoutWizard::at(cmd.step, cmd.form);
        match wizard.advance() {
            Ok(next) => Ok(ValidateStepResult {
                step: cmd.step,
                valid: true,
                errors: FieldErrors::new(),
                next_step: Some(next),
            }),
            Err(CheckoutError::Validation { step, errors }) => {
                tracing::debug!(step = %step, invalid_fields = errors.len(), "Checkout step invalid");
                Ok(ValidateStepResult {
                    step,
                    valid: false,
                    errors,
                    next_step: None,
                })
            }
            Err(other) => Err(other),
        }
    }
}
