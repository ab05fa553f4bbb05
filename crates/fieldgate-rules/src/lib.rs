#![forbid(unsafe_code)]

//! Standard format predicates for fieldgate.
//!
//! [`StandardRules`] implements the [`FormatRules`] seam with hand-rolled,
//! pure predicates: no regex engine, no I/O, no failure modes. Locale-aware
//! predicates key shape tables on the locale tag and return `false` for
//! tags they do not know; the `"any"` tag means the union of known shapes.
//!
//! # Example
//!
//! ```rust
//! use fieldgate_core::{Field, FieldSpec, SemanticType};
//! use fieldgate_rules::StandardRules;
//!
//! let spec = FieldSpec::new(SemanticType::CreditCard).with_required(true);
//! let mut field = Field::new(spec, "", StandardRules::new());
//! assert!(field.on_user_edit("4111 1111 1111 1111"));
//! assert!(!field.on_user_edit("4111 1111 1111 1112"));
//! ```

pub mod locale;
pub mod predicates;

use fieldgate_core::FormatRules;

/// The built-in [`FormatRules`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl StandardRules {
    /// Create the standard rule set.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FormatRules for StandardRules {
    fn is_email(&self, text: &str) -> bool {
        predicates::is_email(text)
    }

    fn is_phone(&self, text: &str, locale: &str) -> bool {
        locale::is_phone(text, locale)
    }

    fn is_currency(&self, text: &str, symbol: Option<&str>) -> bool {
        predicates::is_currency(text, symbol)
    }

    fn is_postal_code(&self, text: &str, locale: &str) -> bool {
        locale::is_postal_code(text, locale)
    }

    fn is_hex_color(&self, text: &str) -> bool {
        predicates::is_hex_color(text)
    }

    fn is_identity_card(&self, text: &str, locale: &str) -> bool {
        locale::is_identity_card(text, locale)
    }

    fn is_credit_card(&self, text: &str) -> bool {
        predicates::is_credit_card(text)
    }

    fn is_url(&self, text: &str) -> bool {
        predicates::is_url(text)
    }

    fn is_numeric(&self, text: &str) -> bool {
        predicates::is_numeric(text)
    }

    fn is_float(&self, text: &str, locale: &str) -> bool {
        locale::is_float(text, locale)
    }

    fn is_decimal(&self, text: &str, locale: &str) -> bool {
        locale::is_decimal(text, locale)
    }

    fn is_alpha(&self, text: &str, locale: &str) -> bool {
        locale::is_alpha(text, locale)
    }

    fn is_alphanumeric(&self, text: &str, locale: &str) -> bool {
        locale::is_alphanumeric(text, locale)
    }
}
