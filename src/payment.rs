//! Payments

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from payment processing.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Payment was attempted before a method was selected.
    #[error("please select a payment method")]
    NoMethodSelected,
}

/// Available payment methods.
///
/// The variants are behaviourally identical aside from their label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Pay by credit card
    CreditCard,
    /// Pay via PayPal
    PayPal,
}

impl PaymentMethod {
    /// Human-readable method name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }

    /// Perform the payment, producing the confirmation to display.
    #[must_use]
    pub fn pay(self, amount: Decimal) -> String {
        format!("Paying ${amount} using {}.", self.label())
    }
}

/// Binds a checkout total to an optional payment method.
#[derive(Debug, Default)]
pub struct Order {
    method: Option<PaymentMethod>,
}

impl Order {
    /// Create a new order with no payment method selected.
    #[must_use]
    pub fn new() -> Self {
        Order { method: None }
    }

    /// Select the payment method for this order.
    pub fn set_method(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    /// Process a payment of `amount` with the selected method.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::NoMethodSelected`] when no method has been
    /// selected; nothing is charged in that case.
    pub fn process_payment(&self, amount: Decimal) -> Result<String, PaymentError> {
        let method = self.method.ok_or(PaymentError::NoMethodSelected)?;

        Ok(method.pay(amount))
    }
}
