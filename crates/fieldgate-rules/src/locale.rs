#![forbid(unsafe_code)]

//! Locale-aware format predicates.
//!
//! Each predicate keys a shape table on the locale tag. The `"any"` tag
//! accepts the union of known shapes (or a generic shape, for phone
//! numbers); an unrecognized tag makes the predicate return `false`, so
//! a misconfigured locale degrades to "invalid" instead of failing.
//!
//! Locale tags follow the original predicate library's forms: BCP-47
//! style for phone numbers and alphabets (`en-US`, `de-DE`), bare
//! country codes for postal codes and identity cards (`US`, `DE`).

use crate::predicates::strip_sign;

// ---------------------------------------------------------------------------
// Phone numbers
// ---------------------------------------------------------------------------

/// Mobile phone number for the given locale.
///
/// Separators (spaces, dashes, dots, parentheses) are stripped first; an
/// optional leading `+` is allowed. `"any"` accepts the generic
/// international shape of 7 to 15 digits.
#[must_use]
pub fn is_phone(text: &str, locale: &str) -> bool {
    let Some(digits) = phone_digits(text) else {
        return false;
    };
    let d = digits.as_str();
    match locale {
        "any" => (7..=15).contains(&d.len()),
        "en-US" => {
            let d = match d.len() {
                11 => match d.strip_prefix('1') {
                    Some(rest) => rest,
                    None => return false,
                },
                10 => d,
                _ => return false,
            };
            starts_in(d, 0, '2'..='9') && starts_in(d, 3, '2'..='9')
        }
        "en-GB" => {
            let d = d.strip_prefix("44").unwrap_or(d);
            let d = d.strip_prefix('0').unwrap_or(d);
            d.len() == 10 && d.starts_with('7')
        }
        "de-DE" => {
            let d = d.strip_prefix("49").unwrap_or_else(|| d.strip_prefix('0').unwrap_or(d));
            (9..=11).contains(&d.len()) && d.starts_with('1')
        }
        "fr-FR" => {
            let d = d.strip_prefix("33").unwrap_or_else(|| d.strip_prefix('0').unwrap_or(d));
            d.len() == 9 && (d.starts_with('6') || d.starts_with('7'))
        }
        "it-IT" => {
            let d = d.strip_prefix("39").unwrap_or(d);
            (9..=10).contains(&d.len()) && d.starts_with('3')
        }
        "es-ES" => {
            let d = d.strip_prefix("34").unwrap_or(d);
            d.len() == 9 && (d.starts_with('6') || d.starts_with('7'))
        }
        _ => false,
    }
}

/// Strip phone separators; `None` if anything but digits and one leading
/// `+` remains.
fn phone_digits(text: &str) -> Option<String> {
    let stripped: String = text
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();
    let digits = stripped.strip_prefix('+').unwrap_or(&stripped);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(digits.to_string())
}

fn starts_in(digits: &str, index: usize, range: std::ops::RangeInclusive<char>) -> bool {
    digits.chars().nth(index).is_some_and(|c| range.contains(&c))
}

// ---------------------------------------------------------------------------
// Postal codes
// ---------------------------------------------------------------------------

/// Postal code for the given locale; `"any"` is the union of all known
/// shapes.
#[must_use]
pub fn is_postal_code(text: &str, locale: &str) -> bool {
    match locale {
        "US" => postal_us(text),
        "DE" | "FR" | "IT" | "ES" | "FI" => postal_five_digit(text),
        "NL" => postal_nl(text),
        "CA" => postal_ca(text),
        "GB" => postal_gb(text),
        "any" => {
            postal_us(text)
                || postal_five_digit(text)
                || postal_nl(text)
                || postal_ca(text)
                || postal_gb(text)
        }
        _ => false,
    }
}

fn postal_us(text: &str) -> bool {
    match text.split_once('-') {
        Some((zip, plus4)) => {
            is_digits(zip, 5) && is_digits(plus4, 4)
        }
        None => is_digits(text, 5),
    }
}

fn postal_five_digit(text: &str) -> bool {
    is_digits(text, 5)
}

fn postal_nl(text: &str) -> bool {
    let compact: String = text.chars().filter(|c| *c != ' ').collect();
    let (digits, letters) = compact.split_at_checked(4).unwrap_or(("", ""));
    is_digits(digits, 4)
        && letters.len() == 2
        && letters.chars().all(|c| c.is_ascii_alphabetic())
}

fn postal_ca(text: &str) -> bool {
    let compact: Vec<char> = text.chars().filter(|c| *c != ' ').collect();
    compact.len() == 6
        && compact
            .iter()
            .enumerate()
            .all(|(i, c)| if i % 2 == 0 { c.is_ascii_alphabetic() } else { c.is_ascii_digit() })
}

fn postal_gb(text: &str) -> bool {
    let compact: Vec<char> = text.chars().filter(|c| *c != ' ').collect();
    if !(5..=7).contains(&compact.len()) {
        return false;
    }
    let (outward, inward) = compact.split_at(compact.len() - 3);
    // Inward: digit, letter, letter.
    if !(inward[0].is_ascii_digit()
        && inward[1].is_ascii_alphabetic()
        && inward[2].is_ascii_alphabetic())
    {
        return false;
    }
    // Outward: leading letter, trailing digit or letter, alnum between.
    outward.first().is_some_and(|c| c.is_ascii_alphabetic())
        && outward.iter().all(|c| c.is_ascii_alphanumeric())
        && outward.iter().any(|c| c.is_ascii_digit())
}

fn is_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.chars().all(|c| c.is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Identity cards
// ---------------------------------------------------------------------------

/// Spanish DNI/NIE control letter table, indexed by number mod 23.
const ES_CONTROL: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// National identity card number for the given locale; `"any"` is the
/// union of known shapes.
#[must_use]
pub fn is_identity_card(text: &str, locale: &str) -> bool {
    match locale {
        "ES" => identity_es(text),
        "IT" => identity_it(text),
        "any" => identity_es(text) || identity_it(text),
        _ => false,
    }
}

/// Spanish DNI (8 digits + control letter) or NIE (X/Y/Z + 7 digits +
/// control letter), with the mod-23 checksum verified.
fn identity_es(text: &str) -> bool {
    let upper = text.to_ascii_uppercase();
    let chars: Vec<char> = upper.chars().collect();
    if chars.len() != 9 {
        return false;
    }
    let control = chars[8];
    if !control.is_ascii_uppercase() {
        return false;
    }
    // NIE prefixes map to a leading digit; DNIs are all digits already.
    let (prefix, body) = match chars[0] {
        'X' => (Some('0'), &chars[1..8]),
        'Y' => (Some('1'), &chars[1..8]),
        'Z' => (Some('2'), &chars[1..8]),
        _ => (None, &chars[0..8]),
    };
    if !body.iter().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let mut digits = String::new();
    digits.extend(prefix);
    digits.extend(body);
    let Ok(number) = digits.parse::<u32>() else {
        return false;
    };
    ES_CONTROL[(number % 23) as usize] == control as u8
}

/// Italian codice fiscale shape: 6 letters, 2 digits, letter, 2 digits,
/// letter, 3 digits, letter (omocodia substitutions not modeled).
fn identity_it(text: &str) -> bool {
    let upper = text.to_ascii_uppercase();
    let chars: Vec<char> = upper.chars().collect();
    if chars.len() != 16 {
        return false;
    }
    let letter = |i: usize| chars[i].is_ascii_uppercase();
    let digit = |i: usize| chars[i].is_ascii_digit();
    (0..6).all(letter)
        && digit(6)
        && digit(7)
        && letter(8)
        && digit(9)
        && digit(10)
        && letter(11)
        && digit(12)
        && digit(13)
        && digit(14)
        && letter(15)
}

// ---------------------------------------------------------------------------
// Numeric separators
// ---------------------------------------------------------------------------

/// Decimal separator for a locale; `None` for unrecognized tags.
fn decimal_separator(locale: &str) -> Option<char> {
    match locale {
        "any" | "en-US" | "en-GB" | "en-AU" => Some('.'),
        "de-DE" | "fr-FR" | "it-IT" | "es-ES" => Some(','),
        _ => None,
    }
}

/// Floating-point number with the locale's decimal separator and an
/// optional exponent.
#[must_use]
pub fn is_float(text: &str, locale: &str) -> bool {
    let Some(sep) = decimal_separator(locale) else {
        return false;
    };
    let (mantissa, exponent) = split_exponent(text);
    if let Some(exp) = exponent {
        let exp = strip_sign(exp);
        if exp.is_empty() || !exp.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
    }
    is_mantissa(mantissa, sep)
}

/// Decimal number: like a float, but no exponent.
#[must_use]
pub fn is_decimal(text: &str, locale: &str) -> bool {
    let Some(sep) = decimal_separator(locale) else {
        return false;
    };
    is_mantissa(text, sep)
}

fn split_exponent(text: &str) -> (&str, Option<&str>) {
    match text.split_once(['e', 'E']) {
        Some((mantissa, exp)) => (mantissa, Some(exp)),
        None => (text, None),
    }
}

/// Signed digit run with at most one separator; at least one digit on
/// either side of it.
fn is_mantissa(text: &str, sep: char) -> bool {
    let unsigned = strip_sign(text);
    match unsigned.split_once(sep) {
        Some((int, frac)) => {
            int.chars().all(|c| c.is_ascii_digit())
                && frac.chars().all(|c| c.is_ascii_digit())
                && !(int.is_empty() && frac.is_empty())
        }
        None => !unsigned.is_empty() && unsigned.chars().all(|c| c.is_ascii_digit()),
    }
}

// ---------------------------------------------------------------------------
// Alphabets
// ---------------------------------------------------------------------------

/// Extra (non-ASCII) letters per locale alphabet; `None` for unknown
/// tags.
fn alphabet_extras(locale: &str) -> Option<&'static str> {
    match locale {
        "en-US" | "en-GB" | "en-AU" => Some(""),
        "de-DE" => Some("äöüßÄÖÜ"),
        "fr-FR" => Some("àâæçéèêëïîôœùûüÿÀÂÆÇÉÈÊËÏÎÔŒÙÛÜŸ"),
        "es-ES" => Some("áéíóúüñÁÉÍÓÚÜÑ"),
        "it-IT" => Some("àèéìîòóùÀÈÉÌÎÒÓÙ"),
        _ => None,
    }
}

/// Alphabetic characters only. `"any"` is Unicode-alphabetic; known
/// locales are ASCII letters plus that locale's extras.
#[must_use]
pub fn is_alpha(text: &str, locale: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if locale == "any" {
        return text.chars().all(char::is_alphabetic);
    }
    let Some(extras) = alphabet_extras(locale) else {
        return false;
    };
    text.chars()
        .all(|c| c.is_ascii_alphabetic() || extras.contains(c))
}

/// Alphanumeric characters only, same locale handling as [`is_alpha`].
#[must_use]
pub fn is_alphanumeric(text: &str, locale: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if locale == "any" {
        return text.chars().all(char::is_alphanumeric);
    }
    let Some(extras) = alphabet_extras(locale) else {
        return false;
    };
    text.chars()
        .all(|c| c.is_ascii_alphanumeric() || extras.contains(c))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
