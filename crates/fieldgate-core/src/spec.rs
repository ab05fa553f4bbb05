#![forbid(unsafe_code)]

//! Field specification: the immutable per-field configuration.

use crate::semantic::SemanticType;

/// Locale tag meaning "no specific locale": locale-aware predicates
/// accept any of their known shapes.
pub const LOCALE_ANY: &str = "any";

// ---------------------------------------------------------------------------
// FieldSpec
// ---------------------------------------------------------------------------

/// Immutable configuration of a single field, supplied at construction.
///
/// # Example
///
/// ```rust
/// use fieldgate_core::{FieldSpec, SemanticType};
///
/// let spec = FieldSpec::new(SemanticType::PostalCode)
///     .with_required(true)
///     .with_locale("DE");
/// assert_eq!(spec.locale(), "DE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Declared validation category.
    pub semantic: SemanticType,
    /// Whether an empty value is invalid.
    pub required: bool,
    /// Locale tag passed to locale-aware predicates.
    pub locale: Option<String>,
    /// Currency symbol passed to the currency predicate.
    pub currency_symbol: Option<String>,
}

impl FieldSpec {
    /// Create a spec for the given semantic type, not required, locale
    /// [`LOCALE_ANY`], no currency symbol.
    #[must_use]
    pub fn new(semantic: SemanticType) -> Self {
        Self {
            semantic,
            required: false,
            locale: None,
            currency_symbol: None,
        }
    }

    /// Create a spec from a wire type name (unknown names degrade to
    /// [`SemanticType::Default`]).
    #[must_use]
    pub fn named(type_name: &str) -> Self {
        Self::new(SemanticType::parse_name(type_name))
    }

    /// Set whether the field is required (builder).
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the locale tag (builder).
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the currency symbol (builder).
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = Some(symbol.into());
        self
    }

    /// The effective locale tag ([`LOCALE_ANY`] when unset).
    #[must_use]
    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(LOCALE_ANY)
    }

    /// The currency symbol, if configured.
    #[must_use]
    pub fn currency_symbol(&self) -> Option<&str> {
        self.currency_symbol.as_deref()
    }
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self::new(SemanticType::Default)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
