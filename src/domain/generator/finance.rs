//! Payment and transaction values

use std::str::FromStr;

use super::catalog::{CURRENCIES, Currency, Field};
use super::context::GeneratorContext;

/// Card network, selecting the number layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIssuer {
    Visa,
    Mastercard,
    Amex,
    Discover,
}

impl CardIssuer {
    pub const ALL: [CardIssuer; 4] = [
        CardIssuer::Visa,
        CardIssuer::Mastercard,
        CardIssuer::Amex,
        CardIssuer::Discover,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
        }
    }

    fn prefixes(&self) -> &'static [&'static str] {
        match self {
            Self::Visa => &["4"],
            Self::Mastercard => &["51", "52", "53", "54", "55"],
            Self::Amex => &["34", "37"],
            Self::Discover => &["6011", "65"],
        }
    }

    fn length(&self) -> usize {
        match self {
            Self::Amex => 15,
            _ => 16,
        }
    }
}

impl FromStr for CardIssuer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" => Ok(Self::Mastercard),
            "amex" | "american_express" => Ok(Self::Amex),
            "discover" => Ok(Self::Discover),
            other => Err(format!("Unknown card issuer: {}", other)),
        }
    }
}

/// Luhn check digit for `payload`, which must be ASCII digits
pub fn luhn_check_digit(payload: &str) -> u32 {
    let sum: u32 = payload
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();

    (10 - sum % 10) % 10
}

/// True when `number` passes the Luhn checksum
pub fn luhn_valid(number: &str) -> bool {
    match number.len().checked_sub(1) {
        Some(split) if number.bytes().all(|b| b.is_ascii_digit()) && split > 0 => {
            let (payload, check) = number.split_at(split);
            u32::from(check.as_bytes()[0] - b'0') == luhn_check_digit(payload)
        }
        _ => false,
    }
}

impl GeneratorContext {
    pub fn card_issuer(&mut self) -> CardIssuer {
        *self.choose(&CardIssuer::ALL).unwrap_or(&CardIssuer::Visa)
    }

    /// Luhn-valid number; a random issuer's layout when none is given
    pub fn card_number(&mut self, issuer: Option<CardIssuer>) -> String {
        let issuer = match issuer {
            Some(issuer) => issuer,
            None => self.card_issuer(),
        };
        let prefix = *self.choose(issuer.prefixes()).unwrap_or(&"4");
        let body_len = issuer.length() - prefix.len() - 1;

        let mut number = format!("{}{}", prefix, self.digits(body_len));
        let check = luhn_check_digit(&number);
        number.push_str(&check.to_string());
        number
    }

    pub fn card_cvv(&mut self) -> String {
        self.digits(3)
    }

    /// Amount between 0 and 1000 with two decimals
    pub fn amount(&mut self) -> String {
        let cents = self.int(0..=100_000);
        format!("{}.{:02}", cents / 100, cents % 100)
    }

    pub fn currency(&mut self) -> Currency {
        *self.choose(CURRENCIES).unwrap_or(&CURRENCIES[0])
    }

    pub fn account_number(&mut self) -> String {
        self.digits(8)
    }

    pub fn transaction_type(&mut self) -> String {
        self.pick(Field::TransactionType).to_string()
    }

    pub fn transaction_description(&mut self) -> String {
        let kind = self.pick(Field::TransactionType);
        let company = self.company_name();
        let card = self.digits(4);
        let (code, _, _) = self.currency();
        let amount = self.amount();
        let account = self.digits(4);

        format!(
            "{} transaction at {} using card ending with ***{} for {} {} in account ***{}",
            kind, company, card, code, amount, account
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generator::Locale;

    #[test]
    fn test_luhn_reference_numbers() {
        assert!(luhn_valid("4111111111111111"));
        assert!(luhn_valid("378282246310005"));
        assert!(!luhn_valid("4111111111111112"));
        assert!(!luhn_valid("4"));
        assert!(!luhn_valid("41x1"));
    }

    #[test]
    fn test_generated_numbers_pass_luhn() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 456);

        for issuer in CardIssuer::ALL {
            for _ in 0..10 {
                let number = ctx.card_number(Some(issuer));
                assert!(luhn_valid(&number), "{} failed for {:?}", number, issuer);
                assert_eq!(number.len(), issuer.length());
            }
        }
    }

    #[test]
    fn test_issuer_layouts() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 8);

        assert!(ctx.card_number(Some(CardIssuer::Visa)).starts_with('4'));
        let amex = ctx.card_number(Some(CardIssuer::Amex));
        assert!(amex.starts_with("34") || amex.starts_with("37"));
    }

    #[test]
    fn test_issuer_from_str() {
        assert_eq!("VISA".parse::<CardIssuer>().unwrap(), CardIssuer::Visa);
        assert_eq!("amex".parse::<CardIssuer>().unwrap(), CardIssuer::Amex);
        assert!("diners".parse::<CardIssuer>().is_err());
    }

    #[test]
    fn test_transaction_description_mentions_parts() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 666);
        let description = ctx.transaction_description();

        assert!(description.contains("transaction at"));
        assert!(description.contains("***"));
    }

    #[test]
    fn test_cvv_and_account_lengths() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 1);

        assert_eq!(ctx.card_cvv().len(), 3);
        assert_eq!(ctx.account_number().len(), 8);
    }
}
