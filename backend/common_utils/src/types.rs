//! Amount types shared between the domain and the connector.

use std::{
    fmt::Display,
    ops::{Add, Sub},
    str::FromStr,
};

use common_enums::Currency;
use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};

use crate::errors::ParsingError;

/// Amount convertor trait for connector-facing amount representations.
pub trait AmountConvertor: Send {
    type Output;

    fn convert(
        &self,
        amount: MinorUnit,
        currency: Currency,
    ) -> Result<Self::Output, error_stack::Report<ParsingError>>;

    fn convert_back(
        &self,
        amount: Self::Output,
        currency: Currency,
    ) -> Result<MinorUnit, error_stack::Report<ParsingError>>;
}

/// WorldNet takes amounts as major-unit decimal strings (`"10.00"`).
#[derive(Default, Debug, serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq)]
pub struct StringMajorUnitForConnector;

impl AmountConvertor for StringMajorUnitForConnector {
    type Output = StringMajorUnit;

    fn convert(
        &self,
        amount: MinorUnit,
        currency: Currency,
    ) -> Result<Self::Output, error_stack::Report<ParsingError>> {
        amount.to_major_unit_as_string(currency)
    }

    fn convert_back(
        &self,
        amount: StringMajorUnit,
        currency: Currency,
    ) -> Result<MinorUnit, error_stack::Report<ParsingError>> {
        amount.to_minor_unit_as_i64(currency)
    }
}

/// The minor-denomination amount the core works in.
#[derive(
    Default,
    Debug,
    serde::Deserialize,
    serde::Serialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }

    /// Converts to the major denomination, rendered with the currency's
    /// decimal precision.
    fn to_major_unit_as_string(
        self,
        currency: Currency,
    ) -> Result<StringMajorUnit, error_stack::Report<ParsingError>> {
        let amount_decimal =
            Decimal::from_i64(self.0).ok_or(ParsingError::I64ToDecimalConversionFailure)?;

        let decimal_places = currency.number_of_digits_after_decimal_point();
        let major = amount_decimal
            / Decimal::from(10_u32.pow(u32::from(decimal_places)));
        let amount_f64 = major
            .to_f64()
            .ok_or(ParsingError::FloatToDecimalConversionFailure)?;

        let rendered = match decimal_places {
            0 => amount_f64.to_string(),
            3 => format!("{amount_f64:.3}"),
            _ => format!("{amount_f64:.2}"),
        };
        Ok(StringMajorUnit::new(rendered))
    }
}

impl Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for MinorUnit {
    type Output = Self;
    fn add(self, a2: Self) -> Self {
        Self(self.0 + a2.0)
    }
}

impl Sub for MinorUnit {
    type Output = Self;
    fn sub(self, a2: Self) -> Self {
        Self(self.0 - a2.0)
    }
}

/// Major-unit decimal string as it appears in gateway XML.
#[derive(Default, Debug, serde::Deserialize, serde::Serialize, Clone, PartialEq, Eq)]
pub struct StringMajorUnit(String);

impl StringMajorUnit {
    fn new(value: String) -> Self {
        Self(value)
    }

    pub fn get_amount_as_string(&self) -> &str {
        &self.0
    }

    fn to_minor_unit_as_i64(
        &self,
        currency: Currency,
    ) -> Result<MinorUnit, error_stack::Report<ParsingError>> {
        let amount_decimal = Decimal::from_str(&self.0).map_err(|e| {
            ParsingError::StringToDecimalConversionFailure {
                error: e.to_string(),
            }
        })?;

        let decimal_places = currency.number_of_digits_after_decimal_point();
        let minor = amount_decimal * Decimal::from(10_u32.pow(u32::from(decimal_places)));
        let amount_i64 = minor
            .to_i64()
            .ok_or(ParsingError::DecimalToI64ConversionFailure)?;
        Ok(MinorUnit::new(amount_i64))
    }
}

impl Display for StringMajorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn two_decimal_rendering() {
        let amount = StringMajorUnitForConnector
            .convert(MinorUnit::new(1000), Currency::EUR)
            .unwrap();
        assert_eq!(amount.get_amount_as_string(), "10.00");
    }

    #[test]
    fn zero_decimal_rendering() {
        let amount = StringMajorUnitForConnector
            .convert(MinorUnit::new(1000), Currency::JPY)
            .unwrap();
        assert_eq!(amount.get_amount_as_string(), "1000");
    }

    #[test]
    fn three_decimal_rendering() {
        let amount = StringMajorUnitForConnector
            .convert(MinorUnit::new(12345), Currency::BHD)
            .unwrap();
        assert_eq!(amount.get_amount_as_string(), "12.345");
    }

    #[test]
    fn convert_back_roundtrip() {
        let converter = StringMajorUnitForConnector;
        let original = MinorUnit::new(9999);
        let major = converter.convert(original, Currency::USD).unwrap();
        let back = converter.convert_back(major, Currency::USD).unwrap();
        assert_eq!(back, original);
    }
}
