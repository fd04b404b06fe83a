//! Supported locales and their resolution from request input

use std::fmt;

use crate::domain::DomainError;

/// Locale used when the request names none
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// A supported generation locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    De,
    Es,
    Fr,
    It,
    Ja,
    PtBr,
    ZhCn,
}

impl Locale {
    /// Every supported locale, in the order reported to callers
    pub const ALL: [Locale; 8] = [
        Locale::En,
        Locale::De,
        Locale::Es,
        Locale::Fr,
        Locale::It,
        Locale::Ja,
        Locale::PtBr,
        Locale::ZhCn,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::It => "it",
            Self::Ja => "ja",
            Self::PtBr => "pt_br",
            Self::ZhCn => "zh_cn",
        }
    }

    /// Case-insensitive lookup by code
    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.to_lowercase();
        Self::ALL.into_iter().find(|locale| locale.code() == lower)
    }

    /// Resolve optional request input, defaulting to English
    pub fn resolve(requested: Option<&str>) -> Result<Self, DomainError> {
        match requested {
            None => Ok(DEFAULT_LOCALE),
            Some(code) => Self::from_code(code).ok_or_else(|| {
                DomainError::unsupported_locale(code, Self::ALL.iter().map(Locale::code))
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_locale_is_english() {
        assert_eq!(Locale::resolve(None).unwrap(), Locale::En);
    }

    #[test]
    fn test_supported_locales_case_insensitive() {
        assert_eq!(Locale::resolve(Some("de")).unwrap(), Locale::De);
        assert_eq!(Locale::resolve(Some("IT")).unwrap(), Locale::It);
        assert_eq!(Locale::resolve(Some("ja")).unwrap(), Locale::Ja);
        assert_eq!(Locale::resolve(Some("PT_BR")).unwrap(), Locale::PtBr);
        assert_eq!(Locale::resolve(Some("zh_CN")).unwrap(), Locale::ZhCn);
        assert_eq!(Locale::resolve(Some("EN")).unwrap(), Locale::En);
    }

    #[test]
    fn test_unknown_locale_names_supported_set() {
        let err = Locale::resolve(Some("xx")).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unsupported locale: 'xx'. Supported locales are: en, de, es, fr, it, ja, pt_br, zh_cn"
        );
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(Locale::PtBr.to_string(), "pt_br");
    }
}
