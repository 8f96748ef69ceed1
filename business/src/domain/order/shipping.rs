use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern"));

/// Checkout form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingField {
    Email,
    FullName,
    Address,
    City,
    PostalCode,
    Country,
}

impl std::fmt::Display for ShippingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShippingField::Email => write!(f, "email"),
            ShippingField::FullName => write!(f, "fullName"),
            ShippingField::Address => write!(f, "address"),
            ShippingField::City => write!(f, "city"),
            ShippingField::PostalCode => write!(f, "postalCode"),
            ShippingField::Country => write!(f, "country"),
        }
    }
}

/// Validation failure attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ShippingField,
    pub code: &'static str,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.code)
    }
}

/// Raw checkout form input.
#[derive(Debug, Clone, Default)]
pub struct NewShippingInfoProps {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl NewShippingInfoProps {
    /// Returns every problem with the form, in field order.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.email.trim().is_empty() {
            errors.push(FieldError {
                field: ShippingField::Email,
                code: "checkout.email_required",
            });
        } else if !EMAIL.is_match(self.email.trim()) {
            errors.push(FieldError {
                field: ShippingField::Email,
                code: "checkout.email_invalid",
            });
        }

        let required = [
            (&self.full_name, ShippingField::FullName, "checkout.full_name_required"),
            (&self.address, ShippingField::Address, "checkout.address_required"),
            (&self.city, ShippingField::City, "checkout.city_required"),
            (&self.postal_code, ShippingField::PostalCode, "checkout.postal_code_required"),
            (&self.country, ShippingField::Country, "checkout.country_required"),
        ];
        for (value, field, code) in required {
            if value.trim().is_empty() {
                errors.push(FieldError { field, code });
            }
        }

        errors
    }
}

/// Shipping details captured at checkout; only ever embedded in an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingInfo {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingInfo {
    pub fn new(props: NewShippingInfoProps) -> Result<Self, Vec<FieldError>> {
        let errors = props.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self::from_repository(props))
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(props: NewShippingInfoProps) -> Self {
        Self {
            full_name: props.full_name.trim().to_string(),
            email: props.email.trim().to_string(),
            address: props.address.trim().to_string(),
            city: props.city.trim().to_string(),
            postal_code: props.postal_code.trim().to_string(),
            country: props.country.trim().to_string(),
        }
    }
}
