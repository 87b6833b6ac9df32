//! Per-step validation of the checkout form.
//!
//! Each validator returns every failing field at once, keyed by field name,
//! with the message shown to the shopper.

use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::ExposeSecret;
use serde::Serialize;
use std::collections::BTreeMap;

use super::form::{AccountDetails, AccountType, CheckoutForm, PaymentDetails, ShippingAddress};
use super::step::CheckoutStep;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));
static CARD_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{16}$").expect("valid regex"));
static EXPIRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}$").expect("valid regex"));
static CVV: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,4}$").expect("valid regex"));

/// Field name → message for every invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.0.entry(field).or_insert(message);
        }
    }
}

fn missing(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_account(account: &AccountDetails) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if missing(&account.email) {
        errors.add("email", "Email is required");
    } else if !EMAIL.is_match(&account.email) {
        errors.add("email", "Email is invalid");
    }
    if account.account_type == AccountType::Create && account.password.is_empty() {
        errors.add("password", "Password is required");
    }
    errors
}

pub fn validate_shipping(shipping: &ShippingAddress) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let required = [
        ("first_name", &shipping.first_name, "First name is required"),
        ("last_name", &shipping.last_name, "Last name is required"),
        ("address", &shipping.address, "Address is required"),
        ("city", &shipping.city, "City is required"),
        ("state", &shipping.state, "State is required"),
        ("zip_code", &shipping.zip_code, "ZIP code is required"),
        ("phone_number", &shipping.phone_number, "Phone number is required"),
    ];
    for (field, value, message) in required {
        if missing(value) {
            errors.add(field, message);
        }
    }
    errors
}

pub fn validate_payment(payment: &PaymentDetails) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if missing(&payment.name_on_card) {
        errors.add("name_on_card", "Name on card is required");
    }

    let card_number = payment.card_number.expose_secret();
    if missing(card_number) {
        errors.add("card_number", "Card number is required");
    } else {
        let compact: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
        if !CARD_NUMBER.is_match(&compact) {
            errors.add("card_number", "Card number must be 16 digits");
        }
    }

    let expiry = payment.expiry_date.expose_secret();
    if missing(expiry) {
        errors.add("expiry_date", "Expiry date is required");
    } else if !EXPIRY.is_match(expiry) {
        errors.add("expiry_date", "Format must be MM/YY");
    }

    let cvv = payment.cvv.expose_secret();
    if missing(cvv) {
        errors.add("cvv", "CVV is required");
    } else if !CVV.is_match(cvv) {
        errors.add("cvv", "CVV must be 3 or 4 digits");
    }
    errors
}

/// Validates the fields that belong to `step`. Review has no fields.
pub fn validate_step(step: CheckoutStep, form: &CheckoutForm) -> FieldErrors {
    match step {
        CheckoutStep::Account => validate_account(&form.account),
        CheckoutStep::Shipping => validate_shipping(&form.shipping),
        CheckoutStep::Payment => validate_payment(&form.payment),
        CheckoutStep::Review => FieldErrors::new(),
    }
}

/// Validates every step, returning the first failing step with its errors.
pub fn validate_form(form: &CheckoutForm) -> Result<(), (CheckoutStep, FieldErrors)> {
    for step in CheckoutStep::ALL {
        let errors = validate_step(step, form);
        if !errors.is_empty() {
            return Err((step, errors));
        }
    }
    Ok(())
}

/// Validates every step and collects all errors together.
pub fn collect_form_errors(form: &CheckoutForm) -> FieldErrors {
    let mut all = FieldErrors::new();
    for step in CheckoutStep::ALL {
        all.merge(validate_step(step, form));
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> CheckoutForm {
        CheckoutForm {
            account: AccountDetails {
                account_type: AccountType::Guest,
                email: "ada@example.com".to_string(),
                password: String::new(),
            },
            shipping: ShippingAddress {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                address: "12 Analytical Way".to_string(),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                zip_code: "97201".to_string(),
                phone_number: "555-0100".to_string(),
                ..Default::default()
            },
            payment: PaymentDetails::new("Ada Lovelace", "4242 4242 4242 4242", "12/29", "123"),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(validate_form(&complete_form()).is_ok());
        assert!(collect_form_errors(&complete_form()).is_empty());
    }

    #[test]
    fn missing_email_is_required() {
        let mut form = complete_form();
        form.account.email = String::new();
        let errors = validate_account(&form.account);
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn malformed_email_is_invalid() {
        let mut form = complete_form();
        form.account.email = "ada.example.com".to_string();
        let errors = validate_account(&form.account);
        assert_eq!(errors.get("email"), Some("Email is invalid"));
    }

    #[test]
    fn password_required_only_when_creating_account() {
        let mut form = complete_form();
        assert!(validate_account(&form.account).get("password").is_none());
        form.account.account_type = AccountType::Create;
        assert_eq!(
            validate_account(&form.account).get("password"),
            Some("Password is required")
        );
    }

    #[test]
    fn empty_shipping_reports_every_field() {
        let errors = validate_shipping(&ShippingAddress::default());
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get("zip_code"), Some("ZIP code is required"));
        assert_eq!(errors.get("phone_number"), Some("Phone number is required"));
        assert!(errors.get("apartment").is_none());
    }

    #[test]
    fn card_number_with_spaces_is_accepted() {
        let payment = PaymentDetails::new("Ada", "4242 4242 4242 4242", "12/29", "1234");
        assert!(validate_payment(&payment).is_empty());
    }

    #[test]
    fn short_card_number_rejected() {
        let payment = PaymentDetails::new("Ada", "4242 4242", "12/29", "123");
        assert_eq!(
            validate_payment(&payment).get("card_number"),
            Some("Card number must be 16 digits")
        );
    }

    #[test]
    fn expiry_must_be_mm_yy() {
        let payment = PaymentDetails::new("Ada", "4242424242424242", "12/2029", "123");
        assert_eq!(
            validate_payment(&payment).get("expiry_date"),
            Some("Format must be MM/YY")
        );
    }

    #[test]
    fn cvv_length_checked() {
        let payment = PaymentDetails::new("Ada", "4242424242424242", "12/29", "12");
        assert_eq!(
            validate_payment(&payment).get("cvv"),
            Some("CVV must be 3 or 4 digits")
        );
    }

    #[test]
    fn empty_payment_reports_required_messages() {
        let errors = validate_payment(&PaymentDetails::default());
        assert_eq!(errors.get("name_on_card"), Some("Name on card is required"));
        assert_eq!(errors.get("card_number"), Some("Card number is required"));
        assert_eq!(errors.get("expiry_date"), Some("Expiry date is required"));
        assert_eq!(errors.get("cvv"), Some("CVV is required"));
    }

    #[test]
    fn review_step_has_no_fields() {
        assert!(validate_step(CheckoutStep::Review, &CheckoutForm::default()).is_empty());
    }

    #[test]
    fn validate_form_reports_first_failing_step() {
        let mut form = complete_form();
        form.shipping.city = String::new();
        form.payment = PaymentDetails::default();
        let (step, errors) = validate_form(&form).unwrap_err();
        assert_eq!(step, CheckoutStep::Shipping);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["city"]);
    }

    #[test]
    fn field_errors_serialize_as_map() {
        let errors = validate_account(&AccountDetails::default());
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["email"], "Email is required");
    }
}
