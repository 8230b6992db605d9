use std::{fmt, str::FromStr};

use hyperswitch_masking::{PeekInterface, Secret, Strategy, WithType};
use serde::{Deserialize, Serialize};

use crate::errors::ConnectorError;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PaymentMethodData {
    Card(Card),
    /// A gateway-issued card reference obtained from a prior registration.
    CardReference(Secret<String>),
}

#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize, Default)]
pub struct Card {
    pub card_number: CardNumber,
    pub card_exp_month: Secret<String>,
    pub card_exp_year: Secret<String>,
    pub card_cvc: Secret<String>,
    pub card_type: Option<CardType>,
    pub card_holder_name: Option<Secret<String>>,
}

impl Card {
    /// Expiry rendered as `MMYY`, the only format the gateway accepts.
    pub fn get_expiry_date_as_mmyy(&self) -> Result<Secret<String>, ConnectorError> {
        let month = self.card_exp_month.peek().trim();
        let year = self.card_exp_year.peek().trim();

        let month_num: u8 = month
            .parse()
            .map_err(|_| ConnectorError::InvalidDataFormat {
                field_name: "card_exp_month",
            })?;
        if !(1..=12).contains(&month_num) {
            return Err(ConnectorError::InvalidDataFormat {
                field_name: "card_exp_month",
            });
        }

        let year_2dig = match year.len() {
            2 => year.to_string(),
            4 => year[2..].to_string(),
            _ => {
                return Err(ConnectorError::InvalidDataFormat {
                    field_name: "card_exp_year",
                })
            }
        };

        Ok(Secret::new(format!("{month_num:02}{year_2dig}")))
    }
}

/// Card scheme names as the gateway spells them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    Laser,
    Maestro,
    Diners,
    Discover,
    Securecard,
}

/// Masking strategy for card numbers, keeps the BIN and last four visible.
#[derive(Debug)]
pub enum CardNumberStrategy {}

impl<T> Strategy<T> for CardNumberStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        if val_str.len() < 15 || val_str.len() > 19 {
            return WithType::fmt(val, f);
        }
        write!(
            f,
            "{}{}{}",
            &val_str[..6],
            "*".repeat(val_str.len() - 10),
            &val_str[val_str.len() - 4..]
        )
    }
}

/// Luhn-validated primary account number.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct CardNumber(Secret<String, CardNumberStrategy>);

impl CardNumber {
    pub fn get_card_no(&self) -> String {
        self.0.peek().clone()
    }
}

impl FromStr for CardNumber {
    type Err = ConnectorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let number: String = value.split_whitespace().collect();
        if number.len() < 12 || number.len() > 19 || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConnectorError::InvalidDataFormat {
                field_name: "card_number",
            });
        }
        if !luhn(&number) {
            return Err(ConnectorError::InvalidDataFormat {
                field_name: "card_number",
            });
        }
        Ok(Self(Secret::new(number)))
    }
}

impl TryFrom<String> for CardNumber {
    type Error = ConnectorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

fn luhn(number: &str) -> bool {
    let sum = number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(idx, digit)| {
            if idx % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum::<u32>();
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn card_number_accepts_valid_pan() {
        assert!(CardNumber::from_str("4111111111111111").is_ok());
        assert!(CardNumber::from_str("4111 1111 1111 1111").is_ok());
    }

    #[test]
    fn card_number_rejects_luhn_failure() {
        assert!(CardNumber::from_str("4111111111111112").is_err());
    }

    #[test]
    fn card_number_rejects_non_digits() {
        assert!(CardNumber::from_str("4111-1111-1111-1111").is_err());
    }

    #[test]
    fn card_number_debug_keeps_bin_and_last4() {
        let number = CardNumber::from_str("4111111111111111").unwrap();
        let rendered = format!("{:?}", number.0);
        assert!(rendered.contains("411111"));
        assert!(rendered.contains("1111"));
        assert!(!rendered.contains("4111111111111111"));
    }

    #[test]
    fn expiry_renders_as_mmyy() {
        let card = Card {
            card_exp_month: Secret::new("7".to_string()),
            card_exp_year: Secret::new("2030".to_string()),
            ..Default::default()
        };
        assert_eq!(card.get_expiry_date_as_mmyy().unwrap().peek(), "0730");
    }

    #[test]
    fn expiry_rejects_bad_month() {
        let card = Card {
            card_exp_month: Secret::new("13".to_string()),
            card_exp_year: Secret::new("30".to_string()),
            ..Default::default()
        };
        assert!(card.get_expiry_date_as_mmyy().is_err());
    }
}
