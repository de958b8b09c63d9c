use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Payment declined: {0}")]
    Declined(String),

    #[error("Unknown payment reference '{0}'")]
    UnknownReference(String),

    #[error("Payment provider error: {0}")]
    Provider(String),
}

#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Crypto,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crypto => "crypto",
            Self::Card => "card",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crypto" => Ok(Self::Crypto),
            "card" => Ok(Self::Card),
            _ => Err(format!("invalid payment method: {}", s)),
        }
    }
}

/// An authorized-but-not-yet-captured payment. The reference doubles as
/// the donation's idempotency key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentAuthorization {
    pub reference: String,
    pub method: PaymentMethod,
}

/// Capability seam for payment processing. Production wiring decides the
/// implementation; `SimulatedPayments` is the dev/test double.
pub trait PaymentProvider: Send + Sync {
    fn authorize(
        &self,
        amount_usd: f64,
        method: PaymentMethod,
    ) -> Result<PaymentAuthorization, PaymentError>;

    fn capture(
        &self,
        auth: &PaymentAuthorization,
    ) -> Result<(), PaymentError>;

    fn refund(&self, reference: &str) -> Result<(), PaymentError>;
}

/// No network, no settlement: references are fabricated locally in the
/// `sim_<method>_<uuid>` shape.
#[derive(Debug, Default)]
pub struct SimulatedPayments;

impl PaymentProvider for SimulatedPayments {
    fn authorize(
        &self,
        amount_usd: f64,
        method: PaymentMethod,
    ) -> Result<PaymentAuthorization, PaymentError> {
        if amount_usd <= 0.0 {
            return Err(PaymentError::Declined(
                "amount must be positive".into(),
            ));
        }

        Ok(PaymentAuthorization {
            reference: format!(
                "sim_{}_{}",
                method.as_str(),
                Uuid::new_v4().simple()
            ),
            method,
        })
    }

    fn capture(
        &self,
        _auth: &PaymentAuthorization,
    ) -> Result<(), PaymentError> {
        Ok(())
    }

    fn refund(&self, reference: &str) -> Result<(), PaymentError> {
        if !reference.starts_with("sim_") {
            return Err(PaymentError::UnknownReference(
                reference.to_string(),
            ));
        }
        Ok(())
    }
}
