#![forbid(unsafe_code)]

//! Core validation engine for fieldgate.
//!
//! This crate contains the logic behind a validating text-entry field:
//! value normalization, semantic type dispatch, the per-field validation
//! state machine (value, validity, dirty, focus), and the pure feedback
//! derivation a presentation layer styles itself from. The format
//! predicates themselves live behind the [`FormatRules`] trait;
//! `fieldgate-rules` provides the standard implementation.
//!
//! Everything here is synchronous, total, and panic-free: unknown
//! semantic types degrade to [`SemanticType::Default`], unknown locales
//! make locale-aware predicates return `false`, and null-ish input
//! normalizes to the empty string.

pub mod feedback;
pub mod field;
pub mod normalize;
pub mod rules;
pub mod semantic;
pub mod spec;

pub use feedback::{Feedback, LabelLayout};
pub use field::{Field, FieldState, Observer};
pub use normalize::{RawInput, coerce_integer, normalize};
pub use rules::FormatRules;
pub use semantic::{KeyboardHint, SemanticType};
pub use spec::{FieldSpec, LOCALE_ANY};
