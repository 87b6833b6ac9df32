//! Checkout form data collected across the wizard steps.
//!
//! Card details are wrapped in `SecretString`: they can be read for
//! validation but are never serialized or printed.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// How the shopper identifies themselves at checkout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[default]
    Guest,
    Create,
    Login,
}

/// Account step fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountDetails {
    pub account_type: AccountType,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Shipping step fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub apartment: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone_number: String,
}

impl Default for ShippingAddress {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            apartment: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "US".to_string(),
            phone_number: String::new(),
        }
    }
}

impl ShippingAddress {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Payment step fields. Only `name_on_card` is ever exposed.
#[derive(Deserialize)]
#[serde(default)]
pub struct PaymentDetails {
    pub name_on_card: String,
    pub card_number: SecretString,
    pub expiry_date: SecretString,
    pub cvv: SecretString,
}

impl PaymentDetails {
    pub fn new(
        name_on_card: impl Into<String>,
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            name_on_card: name_on_card.into(),
            card_number: SecretString::new(card_number.into()),
            expiry_date: SecretString::new(expiry_date.into()),
            cvv: SecretString::new(cvv.into()),
        }
    }

    /// Last four digits of the card, for receipts.
    pub fn card_last_four(&self) -> Option<String> {
        let digits: Vec<char> = self
            .card_number
            .expose_secret()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.len() < 4 {
            return None;
        }
        Some(digits[digits.len() - 4..].iter().collect())
    }
}

impl Default for PaymentDetails {
    fn default() -> Self {
        Self::new("", "", "", "")
    }
}

impl Clone for PaymentDetails {
    fn clone(&self) -> Self {
        Self::new(
            self.name_on_card.clone(),
            self.card_number.expose_secret().clone(),
            self.expiry_date.expose_secret().clone(),
            self.cvv.expose_secret().clone(),
        )
    }
}

impl fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentDetails")
            .field("name_on_card", &self.name_on_card)
            .field("card_number", &"[REDACTED]")
            .field("expiry_date", &"[REDACTED]")
            .field("cvv", &"[REDACTED]")
            .finish()
    }
}

impl Serialize for PaymentDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("PaymentDetails", 2)?;
        state.serialize_field("name_on_card", &self.name_on_card)?;
        state.serialize_field("card_last_four", &self.card_last_four())?;
        state.end()
    }
}

/// Everything the shopper entered during checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub account: AccountDetails,
    pub shipping: ShippingAddress,
    pub payment: PaymentDetails,
}

/// Customer data that travels with a placed order. Never holds card data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub email: String,
    pub account_type: AccountType,
    pub shipping: ShippingAddress,
    pub name_on_card: String,
    pub card_last_four: Option<String>,
}

impl From<&CheckoutForm> for CustomerDetails {
    fn from(form: &CheckoutForm) -> Self {
        Self {
            email: form.account.email.trim().to_string(),
            account_type: form.account.account_type,
            shipping: form.shipping.clone(),
            name_on_card: form.payment.name_on_card.clone(),
            card_last_four: form.payment.card_last_four(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn country_defaults_to_us() {
        let form: CheckoutForm = serde_json::from_value(json!({})).unwrap();
        assert_eq!(form.shipping.country, "US");
        assert_eq!(form.account.account_type, AccountType::Guest);
    }

    #[test]
    fn card_number_never_serialized() {
        let form = CheckoutForm {
            payment: PaymentDetails::new("Ada Lovelace", "4242 4242 4242 4242", "12/29", "123"),
            ..Default::default()
        };
        let json = serde_json::to_string(&form).unwrap();
        assert!(!json.contains("4242 4242"));
        assert!(!json.contains("123\""));
        assert!(json.contains("\"card_last_four\":\"4242\""));
    }

    #[test]
    fn password_never_serialized() {
        let mut form = CheckoutForm::default();
        form.account.password = "hunter2".to_string();
        let json = serde_json::to_string(&form).unwrap();
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn debug_redacts_card() {
        let payment = PaymentDetails::new("Ada", "4242424242424242", "12/29", "123");
        let debug = format!("{:?}", payment);
        assert!(!debug.contains("4242424242424242"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn deserializes_card_fields_from_json() {
        let form: CheckoutForm = serde_json::from_value(json!({
            "payment": {
                "name_on_card": "Ada",
                "card_number": "4111111111111111",
                "expiry_date": "01/30",
                "cvv": "999"
            }
        }))
        .unwrap();
        assert_eq!(form.payment.card_last_four().as_deref(), Some("1111"));
    }

    #[test]
    fn customer_details_trim_email() {
        let mut form = CheckoutForm::default();
        form.account.email = "  ada@example.com ".to_string();
        form.shipping.first_name = "Ada".to_string();
        form.shipping.last_name = "Lovelace".to_string();
        let customer = CustomerDetails::from(&form);
        assert_eq!(customer.email, "ada@example.com");
        assert_eq!(customer.shipping.full_name(), "Ada Lovelace");
    }
}
