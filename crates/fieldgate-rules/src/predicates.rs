#![forbid(unsafe_code)]

//! Locale-free format predicates.
//!
//! Hand-rolled character walks, no regex engine. Each predicate is pure
//! and total over any `&str`; callers hand in normalized (trimmed,
//! non-empty) text, but nothing here breaks on other input.

// ---------------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------------

/// Email heuristic: `local@domain`, dotted domain with non-empty labels,
/// TLD of at least two characters, no whitespace anywhere.
#[must_use]
pub fn is_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    is_domain(domain)
}

/// A dotted hostname: non-empty alnum/hyphen labels, hyphens only
/// inside, alphabetic TLD of at least two characters.
fn is_domain(domain: &str) -> bool {
    if !domain.contains('.') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.iter().any(|label| {
        label.is_empty()
            || label.starts_with('-')
            || label.ends_with('-')
            || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    }) {
        return false;
    }
    labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

// ---------------------------------------------------------------------------
// URL
// ---------------------------------------------------------------------------

/// URL heuristic: optional http/https/ftp scheme, optional credentials
/// and port, dotted host. Scheme-less `example.com/path` is accepted;
/// unknown schemes are not.
#[must_use]
pub fn is_url(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let rest = if let Some(pos) = text.find("://") {
        let scheme = &text[..pos];
        if !matches!(scheme, "http" | "https" | "ftp") {
            return false;
        }
        &text[pos + 3..]
    } else {
        text
    };

    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    // Credentials, then port, leave the bare host.
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = match host.rsplit_once(':') {
        Some((name, port)) => {
            if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
                return false;
            }
            name
        }
        None => host,
    };

    !host.is_empty() && is_domain(host)
}

// ---------------------------------------------------------------------------
// Hex color
// ---------------------------------------------------------------------------

/// Hex color: optional `#`, then 3, 4, 6, or 8 hex digits.
#[must_use]
pub fn is_hex_color(text: &str) -> bool {
    let digits = text.strip_prefix('#').unwrap_or(text);
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

// ---------------------------------------------------------------------------
// Credit card
// ---------------------------------------------------------------------------

/// Credit card number: 12 to 19 digits after separator stripping, valid
/// Luhn checksum.
#[must_use]
pub fn is_credit_card(text: &str) -> bool {
    let digits: String = text.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if !(12..=19).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    luhn_checksum(&digits) % 10 == 0
}

/// Luhn sum over an all-digit string: every second digit from the right
/// doubled, digits above nine reduced by nine.
fn luhn_checksum(digits: &str) -> u32 {
    digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum()
}

// ---------------------------------------------------------------------------
// Numeric
// ---------------------------------------------------------------------------

/// Strict plain number: optional sign, optional dot-separated integer
/// part, mandatory digits at the end (`"1"`, `"+1.5"`, `".5"`; not
/// `"5."`, not `"1e3"`).
#[must_use]
pub fn is_numeric(text: &str) -> bool {
    let unsigned = strip_sign(text);
    match unsigned.split_once('.') {
        Some((int, frac)) => {
            int.chars().all(|c| c.is_ascii_digit())
                && !frac.is_empty()
                && frac.chars().all(|c| c.is_ascii_digit())
        }
        None => !unsigned.is_empty() && unsigned.chars().all(|c| c.is_ascii_digit()),
    }
}

pub(crate) fn strip_sign(text: &str) -> &str {
    text.strip_prefix(['+', '-']).unwrap_or(text)
}

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// Currency amount: optional leading minus, optional symbol, digits
/// either ungrouped or in thousands groups, optional fraction of one or
/// two digits.
///
/// The symbol is accepted but never required; `symbol: None` means plain
/// amounts only.
#[must_use]
pub fn is_currency(text: &str, symbol: Option<&str>) -> bool {
    let rest = text.strip_prefix('-').unwrap_or(text);
    let rest = match symbol {
        Some(sym) if !sym.is_empty() => rest.strip_prefix(sym).unwrap_or(rest),
        _ => rest,
    };

    let (int, frac) = match rest.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rest, None),
    };
    if let Some(frac) = frac
        && !(matches!(frac.len(), 1 | 2) && frac.chars().all(|c| c.is_ascii_digit()))
    {
        return false;
    }
    is_grouped_digits(int)
}

/// Digits with optional thousands grouping: either all digits, or a
/// 1-3 digit head followed by comma-separated groups of exactly three.
fn is_grouped_digits(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if !text.contains(',') {
        return text.chars().all(|c| c.is_ascii_digit());
    }
    let mut groups = text.split(',');
    let Some(head) = groups.next() else {
        return false;
    };
    if head.is_empty() || head.len() > 3 || !head.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    groups.all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
