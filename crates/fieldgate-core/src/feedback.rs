#![forbid(unsafe_code)]

//! Visual feedback derivation.
//!
//! Presentation layers style a field from two pure classifications derived
//! from engine state: a three-way [`Feedback`] (border color) and a
//! two-way [`LabelLayout`] (floating-label position). Neither is ever
//! stored independently of the state it derives from.

use std::fmt;

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// Three-way validity classification driving visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    /// Nothing to signal: value is empty and not objectionable.
    #[default]
    Neutral,
    /// Non-empty value that passed validation.
    Valid,
    /// Value failed validation.
    Invalid,
}

impl Feedback {
    /// Derive feedback from the outcome of a validation pass.
    ///
    /// Invalid wins over everything; a non-empty valid value reads as
    /// `Valid`; an empty valid value stays `Neutral` (an untouched
    /// optional field should not light up green).
    #[must_use]
    pub fn derive(is_valid: bool, is_empty: bool) -> Self {
        if !is_valid {
            Self::Invalid
        } else if !is_empty {
            Self::Valid
        } else {
            Self::Neutral
        }
    }

    /// Returns `true` for [`Feedback::Invalid`].
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Neutral => "neutral",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        })
    }
}

// ---------------------------------------------------------------------------
// LabelLayout
// ---------------------------------------------------------------------------

/// Two-way layout classification for the floating-label presentation.
///
/// `Clean` is the resting layout (label overlaying the empty, unfocused
/// field); `Dirty` is the raised layout. This is a transition target, not
/// a new state dimension: it is a pure function of the engine's dirty
/// flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelLayout {
    /// Label at rest inside the field.
    #[default]
    Clean,
    /// Label raised out of the way.
    Dirty,
}

impl LabelLayout {
    /// Derive the layout from the engine's dirty flag.
    #[must_use]
    pub fn for_dirty(is_dirty: bool) -> Self {
        if is_dirty { Self::Dirty } else { Self::Clean }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
