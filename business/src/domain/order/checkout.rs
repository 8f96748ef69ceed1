use super::shipping::{FieldError, NewShippingInfoProps};

/// Step of the checkout wizard. Lives only as long as the request that
/// carries it; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    Information,
    Review,
    Payment,
}

impl CheckoutStep {
    /// Moves forward one step. Leaving the information step requires a
    /// valid form. Payment is the last step.
    pub fn next(self, form: &NewShippingInfoProps) -> Result<Self, Vec<FieldError>> {
        match self {
            CheckoutStep::Information => {
                let errors = form.validate();
                if errors.is_empty() {
                    Ok(CheckoutStep::Review)
                } else {
                    Err(errors)
                }
            }
            CheckoutStep::Review | CheckoutStep::Payment => Ok(CheckoutStep::Payment),
        }
    }

    pub fn previous(self) -> Self {
        match self {
            CheckoutStep::Information | CheckoutStep::Review => CheckoutStep::Information,
            CheckoutStep::Payment => CheckoutStep::Review,
        }
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutStep::Information => write!(f, "information"),
            CheckoutStep::Review => write!(f, "review"),
            CheckoutStep::Payment => write!(f, "payment"),
        }
    }
}

impl std::str::FromStr for CheckoutStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "information" => Ok(CheckoutStep::Information),
            "review" => Ok(CheckoutStep::Review),
            "payment" => Ok(CheckoutStep::Payment),
            _ => Err(format!("Invalid checkout step: {}", s)),
        }
    }
}

/// Which way the shopper is moving through the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutDirection {
    Next,
    Back,
}
