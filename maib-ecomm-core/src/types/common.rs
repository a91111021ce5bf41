//! Currencies, languages and other small value types used in requests.

use std::{borrow::Cow, fmt::Display};

/// A key-value record keyed by `String`.
pub type Record<V> = std::collections::HashMap<String, V>;

/// ISO 4217 numeric currency code.
///
/// Any value in `0..=999` is accepted by the gateway; the most common codes are
/// provided as constants.
///
/// ```
/// use maib_ecomm_core::types::Currency;
///
/// assert_eq!(Currency::EUR, Currency(978));
/// assert_eq!(Currency::MDL.to_string(), "498");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Currency(pub u16);

impl Currency {
    /// Moldovan Leu.
    pub const MDL: Currency = Currency(498);
    /// Euro.
    pub const EUR: Currency = Currency(978);
    /// United States Dollar.
    pub const USD: Currency = Currency(840);
}

impl From<u16> for Currency {
    fn from(value: u16) -> Self {
        Currency(value)
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Language in which the bank payment page is displayed.
///
/// Valid values are the identifiers the merchant has registered with the bank.
/// The default identifiers are provided as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Language(pub Cow<'static, str>);

impl Language {
    pub const ROMANIAN: Language = Language(Cow::Borrowed("ro"));
    pub const RUSSIAN: Language = Language(Cow::Borrowed("ru"));
    pub const ENGLISH: Language = Language(Cow::Borrowed("en"));

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Language {
    fn from(value: &'static str) -> Self {
        Language(Cow::Borrowed(value))
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Language(Cow::Owned(value))
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
