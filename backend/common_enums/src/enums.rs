use serde::{Deserialize, Serialize};

/// Error returned when an enum carries no configuration for the requested
/// property.
#[derive(Debug, thiserror::Error)]
#[error("unsupported currency: {currency}")]
pub struct UnsupportedCurrencyError {
    pub currency: String,
}

/// The three-letter ISO 4217 currency code.
///
/// Only currencies the WorldNet terminals can be configured for are listed.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Currency {
    AED,
    AUD,
    BHD,
    CAD,
    CHF,
    CLP,
    CZK,
    DKK,
    #[default]
    EUR,
    GBP,
    HKD,
    HUF,
    INR,
    ISK,
    JOD,
    JPY,
    KRW,
    KWD,
    MXN,
    NOK,
    NZD,
    OMR,
    PLN,
    SEK,
    SGD,
    THB,
    TND,
    TRY,
    USD,
    VND,
    ZAR,
}

impl Currency {
    /// Number of digits after the decimal point when the amount is expressed
    /// in its major denomination.
    pub fn number_of_digits_after_decimal_point(self) -> u8 {
        match self {
            Self::CLP | Self::ISK | Self::JPY | Self::KRW | Self::VND => 0,
            Self::BHD | Self::JOD | Self::KWD | Self::OMR | Self::TND => 3,
            _ => 2,
        }
    }

    pub fn is_zero_decimal_currency(self) -> bool {
        self.number_of_digits_after_decimal_point() == 0
    }

    pub fn is_three_decimal_currency(self) -> bool {
        self.number_of_digits_after_decimal_point() == 3
    }
}

/// Whether a connector expects amounts in the major ("Base") or minor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyUnit {
    Base,
    Minor,
}

/// Status of a payment attempt as tracked through the connector flows.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttemptStatus {
    Started,
    #[default]
    Pending,
    Authorized,
    Charged,
    Voided,
    Failure,
    AuthenticationFailed,
}

impl AttemptStatus {
    pub fn is_terminal_status(self) -> bool {
        matches!(
            self,
            Self::Charged | Self::Voided | Self::Failure | Self::AuthenticationFailed
        )
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RefundStatus {
    Failure,
    ManualReview,
    #[default]
    Pending,
    Success,
}

/// Status of a stored-card (SecureCard) registration.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MandateStatus {
    #[default]
    Pending,
    Active,
    Revoked,
    Failure,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubscriptionStatus {
    #[default]
    Pending,
    Active,
    Cancelled,
    Failure,
}

/// How an authorization should be settled.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CaptureMethod {
    /// Capture in the same round trip (a WorldNet `PAYMENT`).
    #[default]
    Automatic,
    /// Authorize now, complete later (`PREAUTH` + `PREAUTHCOMPLETION`).
    Manual,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    /// A previously registered SecureCard reference.
    CardReference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_decimal_digits() {
        assert_eq!(Currency::EUR.number_of_digits_after_decimal_point(), 2);
        assert_eq!(Currency::JPY.number_of_digits_after_decimal_point(), 0);
        assert_eq!(Currency::BHD.number_of_digits_after_decimal_point(), 3);
        assert!(Currency::JPY.is_zero_decimal_currency());
        assert!(Currency::KWD.is_three_decimal_currency());
    }

    #[test]
    fn attempt_status_terminality() {
        assert!(AttemptStatus::Charged.is_terminal_status());
        assert!(!AttemptStatus::Pending.is_terminal_status());
        assert!(!AttemptStatus::Authorized.is_terminal_status());
    }
}
