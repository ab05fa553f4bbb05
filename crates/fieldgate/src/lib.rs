#![forbid(unsafe_code)]

//! fieldgate public facade crate.
//!
//! Re-exports the engine surface from `fieldgate-core` and the standard
//! predicate set from `fieldgate-rules`, and offers a lightweight prelude
//! for day-to-day usage.
//!
//! ```rust
//! use fieldgate::prelude::*;
//!
//! let spec = FieldSpec::new(SemanticType::Email).with_required(true);
//! let mut field = Field::new(spec, "", StandardRules::new());
//! field.on_user_edit("user@example.com");
//! assert!(field.is_validated());
//! ```

// --- Core re-exports -------------------------------------------------------

pub use fieldgate_core::feedback::{Feedback, LabelLayout};
pub use fieldgate_core::field::{Field, FieldState, Observer};
pub use fieldgate_core::normalize::{RawInput, coerce_integer, normalize};
pub use fieldgate_core::rules::FormatRules;
pub use fieldgate_core::semantic::{KeyboardHint, SemanticType};
pub use fieldgate_core::spec::{FieldSpec, LOCALE_ANY};

// --- Rules re-exports ------------------------------------------------------

pub use fieldgate_rules::StandardRules;

/// Construct a field backed by the standard predicate set.
#[must_use]
pub fn standard_field(spec: FieldSpec, initial: impl Into<RawInput>) -> Field {
    Field::new(spec, initial, StandardRules::new())
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Feedback, Field, FieldSpec, FieldState, FormatRules, KeyboardHint, LabelLayout, RawInput,
        SemanticType, StandardRules, standard_field,
    };
}
