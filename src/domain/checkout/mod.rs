//! Checkout domain module.
//!
//! The four-step checkout wizard, form validation, and placed-order
//! confirmations.

mod errors;
mod events;
mod form;
mod order;
mod step;
mod validation;
mod wizard;

pub use errors::CheckoutError;
pub use events::OrderPlaced;
pub use form::{
    AccountDetails, AccountType, CheckoutForm, CustomerDetails, PaymentDetails, ShippingAddress,
};
pub use order::{OrderConfirmation, OrderNumber, DELIVERY_ESTIMATE_DAYS};
pub use step::CheckoutStep;
pub use validation::{
    collect_form_errors, validate_account, validate_form, validate_payment, validate_shipping,
    validate_step, FieldErrors,
};
pub use wizard::CheckoutWizard;
