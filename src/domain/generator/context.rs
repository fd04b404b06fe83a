//! Deterministic-random generation handle

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use super::catalog::{self, Field, Layer};
use super::locale::Locale;

/// Draws fake values for one locale from its own random stream
///
/// A context built with [`GeneratorContext::seeded`] yields the same
/// sequence of values for the same `(locale, seed)` pair.
#[derive(Debug, Clone)]
pub struct GeneratorContext {
    locale: Locale,
    layers: Vec<Layer>,
    rng: ChaCha8Rng,
}

impl GeneratorContext {
    /// Unseeded context drawing from OS entropy
    pub fn new(locale: Locale) -> Self {
        Self::with_rng(locale, ChaCha8Rng::from_entropy())
    }

    /// Reproducible context for `seed`
    ///
    /// The stream is ChaCha8 keyed by `seed_from_u64(seed as u64)`.
    pub fn seeded(locale: Locale, seed: i64) -> Self {
        Self::with_rng(locale, ChaCha8Rng::seed_from_u64(seed as u64))
    }

    fn with_rng(locale: Locale, rng: ChaCha8Rng) -> Self {
        Self {
            locale,
            layers: catalog::layers(locale),
            rng,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Random entry of `field`, resolved through the locale chain
    pub fn pick(&mut self, field: Field) -> &'static str {
        let entries = catalog::lookup(&self.layers, field);
        self.choose(entries).copied().unwrap_or_default()
    }

    /// Random element of `items`, `None` when empty
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        Some(&items[self.rng.gen_range(0..items.len())])
    }

    pub fn int(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.rng.gen_range(range)
    }

    pub fn float(&mut self, min: f64, max: f64, decimals: i32) -> f64 {
        let factor = 10_f64.powi(decimals);
        (self.rng.gen_range(min..=max) * factor).round() / factor
    }

    pub fn bool(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// `len` decimal digits, leading zeros allowed
    pub fn digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10_u8)))
            .collect()
    }

    /// `len` lowercase hex digits
    pub fn hex(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| format!("{:x}", self.rng.gen_range(0..16_u8)))
            .collect()
    }

    pub fn uuid(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.r#gen()).into_uuid()
    }

    // Person

    pub fn first_name(&mut self) -> String {
        self.pick(Field::FirstName).to_string()
    }

    pub fn last_name(&mut self) -> String {
        self.pick(Field::LastName).to_string()
    }

    // Internet

    pub fn email(&mut self, first_name: &str, last_name: &str) -> String {
        let local = self.username_from(first_name, last_name, ".");
        format!("{}@{}", local, self.pick(Field::FreeEmailDomain))
    }

    pub fn username(&mut self, first_name: &str, last_name: &str) -> String {
        let separator = *self.choose(&[".", "_", ""]).unwrap_or(&"");
        self.username_from(first_name, last_name, separator)
    }

    fn username_from(&mut self, first_name: &str, last_name: &str, separator: &str) -> String {
        let first = ascii_slug(first_name);
        let last = ascii_slug(last_name);
        let suffix = self.int(1..=99);

        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{}{}{}{}", first, separator, last, suffix),
            (false, true) => format!("{}{}", first, suffix),
            (true, false) => format!("{}{}", last, suffix),
            (true, true) => format!("user{}", self.digits(6)),
        }
    }

    pub fn avatar(&mut self) -> String {
        format!(
            "https://avatars.githubusercontent.com/u/{}",
            self.int(1..=99_999_999)
        )
    }

    pub fn ipv4(&mut self) -> String {
        let octets: Vec<String> = (0..4).map(|_| self.int(0..=255).to_string()).collect();
        octets.join(".")
    }

    pub fn ipv6(&mut self) -> String {
        let groups: Vec<String> = (0..8).map(|_| self.hex(4)).collect();
        groups.join(":")
    }

    pub fn mac(&mut self) -> String {
        let pairs: Vec<String> = (0..6).map(|_| self.hex(2)).collect();
        pairs.join(":")
    }

    pub fn user_agent(&mut self) -> String {
        self.pick(Field::UserAgent).to_string()
    }

    pub fn domain_name(&mut self) -> String {
        let mut word = ascii_slug(self.pick(Field::LastName));
        if word.is_empty() {
            word = self.pick(Field::LoremWord).to_string();
        }
        format!("{}.{}", word, self.pick(Field::DomainSuffix))
    }

    pub fn url(&mut self) -> String {
        format!("https://www.{}", self.domain_name())
    }

    // Location

    pub fn street_address(&mut self) -> String {
        let number = self.int(1..=9999);
        format!(
            "{} {} {}",
            number,
            self.pick(Field::StreetName),
            self.pick(Field::StreetSuffix)
        )
    }

    pub fn city(&mut self) -> String {
        self.pick(Field::City).to_string()
    }

    pub fn state_abbr(&mut self) -> String {
        self.pick(Field::State).to_string()
    }

    pub fn zip_code(&mut self) -> String {
        self.digits(5)
    }

    pub fn country(&mut self) -> String {
        self.pick(Field::Country).to_string()
    }

    pub fn latitude(&mut self) -> f64 {
        self.float(-90.0, 90.0, 4)
    }

    pub fn longitude(&mut self) -> f64 {
        self.float(-180.0, 180.0, 4)
    }

    // Company

    pub fn company_name(&mut self) -> String {
        match self.int(0..=2) {
            0 => format!("{} {}", self.pick(Field::LastName), self.pick(Field::CompanySuffix)),
            1 => format!("{}-{}", self.pick(Field::LastName), self.pick(Field::LastName)),
            _ => format!(
                "{}, {} and {}",
                self.pick(Field::LastName),
                self.pick(Field::LastName),
                self.pick(Field::LastName)
            ),
        }
    }

    pub fn catch_phrase(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(Field::CatchPhraseAdjective),
            self.pick(Field::CatchPhraseDescriptor),
            self.pick(Field::CatchPhraseNoun)
        )
    }

    // Commerce

    pub fn product_name(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(Field::ProductAdjective),
            self.pick(Field::ProductMaterial),
            self.pick(Field::ProductNoun)
        )
    }

    /// Price between 1 and 1000 with two decimals
    pub fn price(&mut self) -> String {
        let cents = self.int(100..=100_000);
        format!("{}.{:02}", cents / 100, cents % 100)
    }

    pub fn department(&mut self) -> String {
        self.pick(Field::Department).to_string()
    }

    pub fn product_description(&mut self) -> String {
        self.pick(Field::ProductDescription).to_string()
    }

    pub fn product_material(&mut self) -> String {
        self.pick(Field::ProductMaterial).to_string()
    }
}

/// Lowercase ASCII rendering of a name for use in handles and hostnames
fn ascii_slug(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars().flat_map(char::to_lowercase) {
        match c {
            'a'..='z' | '0'..='9' => out.push(c),
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => out.push('a'),
            'ç' => out.push('c'),
            'è' | 'é' | 'ê' | 'ë' => out.push('e'),
            'ì' | 'í' | 'î' | 'ï' => out.push('i'),
            'ñ' => out.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => out.push('o'),
            'ù' | 'ú' | 'û' | 'ü' => out.push('u'),
            'ß' => out.push_str("ss"),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_tuple(ctx: &mut GeneratorContext) -> (String, String, String, String) {
        let first = ctx.first_name();
        let last = ctx.last_name();
        let email = ctx.email(&first, &last);
        let username = ctx.username(&first, &last);
        (first, last, email, username)
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GeneratorContext::seeded(Locale::En, 123);
        let mut b = GeneratorContext::seeded(Locale::En, 123);

        for _ in 0..5 {
            assert_eq!(user_tuple(&mut a), user_tuple(&mut b));
            assert_eq!(a.uuid(), b.uuid());
            assert_eq!(a.street_address(), b.street_address());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = GeneratorContext::seeded(Locale::En, 1);
        let mut b = GeneratorContext::seeded(Locale::En, 2);

        let left: Vec<_> = (0..10).map(|_| a.uuid()).collect();
        let right: Vec<_> = (0..10).map(|_| b.uuid()).collect();

        assert_ne!(left, right);
    }

    #[test]
    fn test_unseeded_draws_advance() {
        let mut ctx = GeneratorContext::new(Locale::En);

        assert_ne!(ctx.uuid(), ctx.uuid());
    }

    #[test]
    fn test_seeded_stream_is_chacha8() {
        let mut ctx = GeneratorContext::seeded(Locale::Fr, -5);
        let mut expected = ChaCha8Rng::seed_from_u64(-5_i64 as u64);

        assert_eq!(ctx.locale(), Locale::Fr);
        assert_eq!(ctx.int(0..=i64::MAX), expected.gen_range(0..=i64::MAX));
        assert_eq!(ctx.bool(), expected.gen_bool(0.5));
    }

    #[test]
    fn test_uuid_is_v4() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 9);
        let id = ctx.uuid();

        assert_eq!(id.get_version_num(), 4);
        assert_eq!(id.to_string().len(), 36);
    }

    #[test]
    fn test_network_shapes() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 77);

        assert_eq!(ctx.ipv4().split('.').count(), 4);
        assert_eq!(ctx.ipv6().split(':').count(), 8);

        let mac = ctx.mac();
        assert_eq!(mac.len(), 17);
        assert!(mac.split(':').all(|pair| pair.len() == 2));

        assert!(ctx.url().starts_with("https://www."));
    }

    #[test]
    fn test_email_is_ascii_for_cjk_locales() {
        let mut ctx = GeneratorContext::seeded(Locale::Ja, 3);
        let (_, _, email, _) = user_tuple(&mut ctx);

        assert!(email.is_ascii());
        assert!(email.contains('@'));
    }

    #[test]
    fn test_price_has_two_decimals() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 11);

        for _ in 0..20 {
            let price = ctx.price();
            let (whole, cents) = price.split_once('.').unwrap();
            assert_eq!(cents.len(), 2);
            let whole: u32 = whole.parse().unwrap();
            assert!((1..=1000).contains(&whole));
        }
    }

    #[test]
    fn test_coordinates_in_range() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 5);

        for _ in 0..20 {
            assert!((-90.0..=90.0).contains(&ctx.latitude()));
            assert!((-180.0..=180.0).contains(&ctx.longitude()));
        }
    }

    #[test]
    fn test_ascii_slug() {
        assert_eq!(ascii_slug("Müller"), "muller");
        assert_eq!(ascii_slug("Straße"), "strasse");
        assert_eq!(ascii_slug("佐藤"), "");
        assert_eq!(ascii_slug("O'Brien"), "obrien");
    }
}
