#![forbid(unsafe_code)]

//! Semantic types: the declared validation category of a field.
//!
//! A [`SemanticType`] decides which format predicate a field dispatches to
//! and which keyboard a host platform should raise. Parsing from the wire
//! names is infallible: unknown names degrade to [`SemanticType::Default`],
//! which carries no positive predicate.

use std::fmt;

// ---------------------------------------------------------------------------
// SemanticType
// ---------------------------------------------------------------------------

/// Declared validation category of a field's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SemanticType {
    /// No positive predicate; any non-empty text passes.
    #[default]
    Default,
    /// Email address.
    Email,
    /// Mobile phone number (locale-aware).
    Phone,
    /// Currency amount (symbol-aware).
    Currency,
    /// Postal code (locale-aware).
    PostalCode,
    /// Hexadecimal color, with or without leading `#`.
    HexColor,
    /// National identity card number (locale-aware).
    IdentityCard,
    /// Credit card number (Luhn-checked).
    CreditCard,
    /// URL.
    Url,
    /// Generic number.
    Numeric,
    /// Integer (wire names `int` and `integer`).
    Integer,
    /// Floating-point number (wire names `float` and `real`).
    Float,
    /// Decimal number without exponent.
    Decimal,
    /// Alphabetic characters only (locale-aware).
    Alpha,
    /// Alphanumeric characters only (locale-aware).
    Alphanumeric,
}

impl SemanticType {
    /// Parse a wire name into a semantic type.
    ///
    /// Accepts the dashed wire names (`"postal-code"`, `"hex-color"`,
    /// `"identity-card"`, `"credit-card"`) and the aliases `"int"` and
    /// `"real"`. Unknown names are not an error; they parse to
    /// [`SemanticType::Default`].
    #[must_use]
    pub fn parse_name(name: &str) -> Self {
        match name {
            "email" => Self::Email,
            "phone" => Self::Phone,
            "currency" => Self::Currency,
            "postal-code" => Self::PostalCode,
            "hex-color" => Self::HexColor,
            "identity-card" => Self::IdentityCard,
            "credit-card" => Self::CreditCard,
            "url" => Self::Url,
            "numeric" => Self::Numeric,
            "int" | "integer" => Self::Integer,
            "real" | "float" => Self::Float,
            "decimal" => Self::Decimal,
            "alpha" => Self::Alpha,
            "alphanumeric" => Self::Alphanumeric,
            _ => Self::Default,
        }
    }

    /// The canonical wire name for this type.
    #[must_use]
    pub fn as_name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Currency => "currency",
            Self::PostalCode => "postal-code",
            Self::HexColor => "hex-color",
            Self::IdentityCard => "identity-card",
            Self::CreditCard => "credit-card",
            Self::Url => "url",
            Self::Numeric => "numeric",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Alpha => "alpha",
            Self::Alphanumeric => "alphanumeric",
        }
    }

    /// Whether this type belongs to the numeric family.
    ///
    /// Numeric-family values get the lenient generic-parse fallback in
    /// addition to their locale-aware predicate, and coerce to an integer
    /// on the display-value path.
    #[must_use]
    pub fn is_numeric_family(&self) -> bool {
        matches!(
            self,
            Self::Numeric | Self::Integer | Self::Float | Self::Decimal
        )
    }

    /// The input-method hint a host platform should use for this type.
    #[must_use]
    pub fn keyboard_hint(&self) -> KeyboardHint {
        match self {
            Self::Email => KeyboardHint::EmailAddress,
            Self::Phone => KeyboardHint::PhonePad,
            Self::Integer => KeyboardHint::NumberPad,
            Self::Float | Self::Decimal => KeyboardHint::DecimalPad,
            Self::Numeric => KeyboardHint::Numeric,
            _ => KeyboardHint::Text,
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_name())
    }
}

// ---------------------------------------------------------------------------
// KeyboardHint
// ---------------------------------------------------------------------------

/// Advisory keyboard classification for a host platform.
///
/// Purely derived from [`SemanticType`]; the engine itself never consumes
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardHint {
    /// Standard text keyboard.
    #[default]
    Text,
    /// Generic numeric keyboard.
    Numeric,
    /// Digits-only pad.
    NumberPad,
    /// Digits plus decimal separator.
    DecimalPad,
    /// Email-optimized keyboard.
    EmailAddress,
    /// Phone dial pad.
    PhonePad,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
