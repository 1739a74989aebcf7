// src/catalog/validators.rs

use rest_envelope::apierror::{Validate, Validator};

use super::models::CreateItem;

const SUPPORTED_CURRENCIES: [&str; 3] = ["EUR", "USD", "GBP"];

impl Validate for CreateItem {
    fn validate_into(&self, v: &mut Validator) {
        match self.name.as_deref().map(str::trim) {
            None | Some("") => v.required("name"),
            Some(name) if name.len() > 255 => {
                v.invalid("name", "Item name must be less than 255 characters")
            }
            Some(_) => {}
        }

        match self.price_cents {
            None => v.required("price_cents"),
            Some(price) if price < 0 => v.invalid("price_cents", "Price cannot be negative"),
            Some(_) => {}
        }

        if let Some(currency) = &self.currency {
            if !SUPPORTED_CURRENCIES.contains(&currency.as_str()) {
                v.fail("currency", "not_supported", "Unsupported currency");
            }
        }
    }
}
