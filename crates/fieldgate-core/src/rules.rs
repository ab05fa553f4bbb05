#![forbid(unsafe_code)]

//! The format rule seam.
//!
//! The engine never inspects text shapes itself; it dispatches each
//! semantic type to exactly one predicate on a [`FormatRules`]
//! implementation. Predicates are pure and total: they take the already
//! normalized text plus any locale or symbol parameter and return a plain
//! `bool`. A predicate that cannot make sense of its locale parameter
//! returns `false` rather than failing.
//!
//! `fieldgate-rules` ships the standard implementation; tests and embedders
//! can substitute their own.

/// One pure predicate per semantic type.
///
/// The text argument is always normalized (trimmed, non-null) and
/// non-empty: the engine resolves the empty case to `!required` before
/// dispatching, so implementations never see `""`.
pub trait FormatRules: Send + Sync {
    /// Email address.
    fn is_email(&self, text: &str) -> bool;

    /// Mobile phone number for the given locale (`"any"` for no locale).
    fn is_phone(&self, text: &str, locale: &str) -> bool;

    /// Currency amount, optionally with an expected symbol.
    fn is_currency(&self, text: &str, symbol: Option<&str>) -> bool;

    /// Postal code for the given locale.
    fn is_postal_code(&self, text: &str, locale: &str) -> bool;

    /// Hexadecimal color.
    fn is_hex_color(&self, text: &str) -> bool;

    /// National identity card number for the given locale.
    fn is_identity_card(&self, text: &str, locale: &str) -> bool;

    /// Credit card number.
    fn is_credit_card(&self, text: &str) -> bool;

    /// URL.
    fn is_url(&self, text: &str) -> bool;

    /// Strict plain number: sign, digits, optional dot-fraction.
    fn is_numeric(&self, text: &str) -> bool;

    /// Floating-point number with the locale's decimal separator.
    fn is_float(&self, text: &str, locale: &str) -> bool;

    /// Decimal number (no exponent) with the locale's decimal separator.
    fn is_decimal(&self, text: &str, locale: &str) -> bool;

    /// Alphabetic characters only, per locale alphabet.
    fn is_alpha(&self, text: &str, locale: &str) -> bool;

    /// Alphanumeric characters only, per locale alphabet.
    fn is_alphanumeric(&self, text: &str, locale: &str) -> bool;
}

impl<R: FormatRules + ?Sized> FormatRules for &R {
    fn is_email(&self, text: &str) -> bool {
        (**self).is_email(text)
    }

    fn is_phone(&self, text: &str, locale: &str) -> bool {
        (**self).is_phone(text, locale)
    }

    fn is_currency(&self, text: &str, symbol: Option<&str>) -> bool {
        (**self).is_currency(text, symbol)
    }

    fn is_postal_code(&self, text: &str, locale: &str) -> bool {
        (**self).is_postal_code(text, locale)
    }

    fn is_hex_color(&self, text: &str) -> bool {
        (**self).is_hex_color(text)
    }

    fn is_identity_card(&self, text: &str, locale: &str) -> bool {
        (**self).is_identity_card(text, locale)
    }

    fn is_credit_card(&self, text: &str) -> bool {
        (**self).is_credit_card(text)
    }

    fn is_url(&self, text: &str) -> bool {
        (**self).is_url(text)
    }

    fn is_numeric(&self, text: &str) -> bool {
        (**self).is_numeric(text)
    }

    fn is_float(&self, text: &str, locale: &str) -> bool {
        (**self).is_float(text, locale)
    }

    fn is_decimal(&self, text: &str, locale: &str) -> bool {
        (**self).is_decimal(text, locale)
    }

    fn is_alpha(&self, text: &str, locale: &str) -> bool {
        (**self).is_alpha(text, locale)
    }

    fn is_alphanumeric(&self, text: &str, locale: &str) -> bool {
        (**self).is_alphanumeric(text, locale)
    }
}
