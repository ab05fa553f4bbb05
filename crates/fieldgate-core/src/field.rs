#![forbid(unsafe_code)]

//! The field validation engine.
//!
//! A [`Field`] owns the mutable state of one text-entry control: the
//! normalized value, the stored validity, the dirty flag, and focus. The
//! presentation layer forwards raw events in (mount, external value
//! change, user edit, focus, blur, disposal); the engine normalizes,
//! re-validates, and exposes the resulting state through read-only
//! queries and an optional observer callback.
//!
//! Lifecycle: `Unmounted -> Mounted(Unfocused) <-> Mounted(Focused) ->
//! Unmounted`. Construction mounts the field and runs one validation pass
//! immediately; [`Field::dispose`] unmounts it, after which mutators are
//! inert and the observer never fires again.
//!
//! All operations are synchronous and run to completion; a `Field` is
//! meant to be owned by exactly one logical control and never shared.

use std::fmt;

use crate::feedback::{Feedback, LabelLayout};
use crate::normalize::{RawInput, coerce_integer, normalize};
use crate::rules::FormatRules;
use crate::semantic::{KeyboardHint, SemanticType};
use crate::spec::FieldSpec;

// ---------------------------------------------------------------------------
// FieldState
// ---------------------------------------------------------------------------

/// Snapshot of a field's mutable state.
///
/// Owned by the engine; observers receive it by reference after every
/// mutation and may clone it freely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    /// Last normalized value. Never null-ish; possibly empty.
    pub raw_value: String,
    /// Result of the last validation pass.
    pub is_valid: bool,
    /// True iff `raw_value` is non-empty or the field has focus.
    pub is_dirty: bool,
    /// Whether the field currently has input focus.
    pub has_focus: bool,
    /// Visual feedback derived by the last validation pass.
    pub feedback: Feedback,
}

impl FieldState {
    /// The floating-label layout implied by the dirty flag.
    #[must_use]
    pub fn label_layout(&self) -> LabelLayout {
        LabelLayout::for_dirty(self.is_dirty)
    }
}

/// Observer callback slot: invoked with the full state snapshot after
/// every mutating transition.
pub type Observer = Box<dyn FnMut(&FieldState)>;

/// Mount phase of the field lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Mounted,
    Disposed,
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// The validation engine for a single text-entry field.
///
/// # Example
///
/// ```rust
/// use fieldgate_core::{Field, FieldSpec, Feedback, FormatRules, SemanticType};
///
/// struct AnythingGoes;
/// # impl FormatRules for AnythingGoes {
/// #     fn is_email(&self, _: &str) -> bool { true }
/// #     fn is_phone(&self, _: &str, _: &str) -> bool { true }
/// #     fn is_currency(&self, _: &str, _: Option<&str>) -> bool { true }
/// #     fn is_postal_code(&self, _: &str, _: &str) -> bool { true }
/// #     fn is_hex_color(&self, _: &str) -> bool { true }
/// #     fn is_identity_card(&self, _: &str, _: &str) -> bool { true }
/// #     fn is_credit_card(&self, _: &str) -> bool { true }
/// #     fn is_url(&self, _: &str) -> bool { true }
/// #     fn is_numeric(&self, _: &str) -> bool { true }
/// #     fn is_float(&self, _: &str, _: &str) -> bool { true }
/// #     fn is_decimal(&self, _: &str, _: &str) -> bool { true }
/// #     fn is_alpha(&self, _: &str, _: &str) -> bool { true }
/// #     fn is_alphanumeric(&self, _: &str, _: &str) -> bool { true }
/// # }
///
/// let spec = FieldSpec::new(SemanticType::Default).with_required(true);
/// let mut field = Field::new(spec, "", AnythingGoes);
/// assert!(!field.is_validated()); // required + empty
///
/// field.on_user_edit("hello");
/// assert!(field.is_validated());
/// assert_eq!(field.feedback(), Feedback::Valid);
/// ```
pub struct Field {
    spec: FieldSpec,
    rules: Box<dyn FormatRules>,
    state: FieldState,
    observer: Option<Observer>,
    phase: Phase,
}

impl Field {
    /// Construct a field, normalize the initial value, and run the mount
    /// validation pass.
    pub fn new(
        spec: FieldSpec,
        initial: impl Into<RawInput>,
        rules: impl FormatRules + 'static,
    ) -> Self {
        let mut field = Self {
            spec,
            rules: Box::new(rules),
            state: FieldState::default(),
            observer: None,
            phase: Phase::Mounted,
        };
        let initial = normalize(initial);
        field.validate(Some(&initial));
        field
    }

    /// Attach the observer slot (builder). The observer fires after every
    /// subsequent mutating transition until [`Field::dispose`].
    #[must_use]
    pub fn with_observer(mut self, observer: impl FnMut(&FieldState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Replace the observer slot.
    pub fn set_observer(&mut self, observer: impl FnMut(&FieldState) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Clear the observer slot.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    // --- Queries ---

    /// The field's immutable configuration.
    #[must_use]
    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// The current state snapshot.
    #[must_use]
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// The stored result of the last validation pass.
    #[must_use]
    pub fn is_validated(&self) -> bool {
        self.state.is_valid
    }

    /// Whether the field currently has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.state.has_focus
    }

    /// Whether the field has content or focus.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty
    }

    /// The current normalized value.
    #[must_use]
    pub fn current_value(&self) -> &str {
        &self.state.raw_value
    }

    /// The feedback classification from the last validation pass.
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.state.feedback
    }

    /// The keyboard a host platform should raise for this field.
    #[must_use]
    pub fn keyboard_hint(&self) -> KeyboardHint {
        self.spec.semantic.keyboard_hint()
    }

    /// Integer coercion of the current value for numeric-family display
    /// reporting: leading-digit parse, `0` on failure.
    #[must_use]
    pub fn numeric_value(&self) -> i64 {
        coerce_integer(&self.state.raw_value)
    }

    /// Pure validity check of a candidate (or the current value).
    ///
    /// Does not mutate state. Empty text always resolves to `!required`,
    /// overriding the type predicate. Numeric-family types accept a
    /// candidate when a generic finite-number parse succeeds *or* the
    /// stricter locale-aware predicate passes; the lenient fallback is
    /// intentional, so that inputs like `"1e3"` still count as numeric.
    #[must_use]
    pub fn is_valid(&self, candidate: Option<&str>) -> bool {
        let text = match candidate {
            Some(text) => normalize(text),
            None => self.state.raw_value.clone(),
        };
        self.check(&text)
    }

    fn check(&self, text: &str) -> bool {
        if text.is_empty() {
            return !self.spec.required;
        }
        let locale = self.spec.locale();
        match self.spec.semantic {
            SemanticType::Default => true,
            SemanticType::Email => self.rules.is_email(text),
            SemanticType::Phone => self.rules.is_phone(text, locale),
            SemanticType::Currency => self.rules.is_currency(text, self.spec.currency_symbol()),
            SemanticType::PostalCode => self.rules.is_postal_code(text, locale),
            SemanticType::HexColor => self.rules.is_hex_color(text),
            SemanticType::IdentityCard => self.rules.is_identity_card(text, locale),
            SemanticType::CreditCard => self.rules.is_credit_card(text),
            SemanticType::Url => self.rules.is_url(text),
            SemanticType::Numeric | SemanticType::Integer => {
                parses_finite(text) || self.rules.is_numeric(text)
            }
            SemanticType::Float => parses_finite(text) || self.rules.is_float(text, locale),
            SemanticType::Decimal => parses_finite(text) || self.rules.is_decimal(text, locale),
            SemanticType::Alpha => self.rules.is_alpha(text, locale),
            SemanticType::Alphanumeric => self.rules.is_alphanumeric(text, locale),
        }
    }

    // --- Mutators ---

    /// Validate and store: the single mutating validation entry point.
    ///
    /// Normalizes the candidate (or re-checks the current value), stores
    /// value and validity, recomputes dirty and feedback, and notifies
    /// the observer. Returns the new validity.
    pub fn validate(&mut self, candidate: Option<&str>) -> bool {
        if self.phase == Phase::Disposed {
            return self.state.is_valid;
        }
        let text = match candidate {
            Some(text) => normalize(text),
            None => self.state.raw_value.clone(),
        };
        let valid = self.check(&text);

        self.state.raw_value = text;
        self.state.is_valid = valid;
        self.state.is_dirty = !self.state.raw_value.is_empty() || self.state.has_focus;
        self.state.feedback = Feedback::derive(valid, self.state.raw_value.is_empty());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            value = %self.state.raw_value,
            valid = self.state.is_valid,
            dirty = self.state.is_dirty,
            semantic = %self.spec.semantic,
            "field validated"
        );

        self.notify();
        valid
    }

    /// React to the host's external value prop changing.
    ///
    /// Re-validates only when the normalized new value is non-empty,
    /// differs from the stored value, and differs from the previous
    /// external value. The three-way guard breaks the update cycle that
    /// an unconditional re-validate would cause in a reactive host whose
    /// prop and state values are already synchronized. Empty external
    /// values never trigger automatic re-validation; they only enter via
    /// an explicit edit or the mount pass.
    pub fn on_external_value_change(
        &mut self,
        previous: impl Into<RawInput>,
        next: impl Into<RawInput>,
    ) {
        if self.phase == Phase::Disposed {
            return;
        }
        let next = normalize(next);
        if next.is_empty() || next == self.state.raw_value || next == normalize(previous) {
            return;
        }
        self.validate(Some(&next));
    }

    /// React to a user edit. Always re-validates, even to empty.
    pub fn on_user_edit(&mut self, text: &str) -> bool {
        if self.phase == Phase::Disposed {
            return self.state.is_valid;
        }
        self.validate(Some(text))
    }

    /// Focus gained: the field is dirty while focused regardless of
    /// content.
    pub fn on_focus(&mut self) {
        if self.phase == Phase::Disposed || self.state.has_focus {
            return;
        }
        self.state.has_focus = true;
        self.state.is_dirty = true;
        self.notify();
    }

    /// Focus lost: dirty drops back to tracking content, so an empty
    /// field goes clean while a filled one stays dirty.
    pub fn on_blur(&mut self) {
        if self.phase == Phase::Disposed || !self.state.has_focus {
            return;
        }
        self.state.has_focus = false;
        self.state.is_dirty = !self.state.raw_value.is_empty();
        self.notify();
    }

    /// Unmount the field: releases the observer and makes every mutator
    /// inert. No callback fires after this returns.
    pub fn dispose(&mut self) {
        self.observer = None;
        self.phase = Phase::Disposed;
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.state);
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("spec", &self.spec)
            .field("state", &self.state)
            .field("observer", &self.observer.is_some())
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

/// Generic finite-number parse, the lenient half of the numeric check.
fn parses_finite(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(f64::is_finite)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Stub rules: every predicate returns a fixed answer.
    struct Fixed(bool);

    impl FormatRules for Fixed {
        fn is_email(&self, _: &str) -> bool {
            self.0
        }
        fn is_phone(&self, _: &str, _: &str) -> bool {
            self.0
        }
        fn is_currency(&self, _: &str, _: Option<&str>) -> bool {
            self.0
        }
        fn is_postal_code(&self, _: &str, _: &str) -> bool {
            self.0
        }
        fn is_hex_color(&self, _: &str) -> bool {
            self.0
        }
        fn is_identity_card(&self, _: &str, _: &str) -> bool {
            self.0
        }
        fn is_credit_card(&self, _: &str) -> bool {
            self.0
        }
        fn is_url(&self, _: &str) -> bool {
            self.0
        }
        fn is_numeric(&self, _: &str) -> bool {
            self.0
        }
        fn is_float(&self, _: &str, _: &str) -> bool {
            self.0
        }
        fn is_decimal(&self, _: &str, _: &str) -> bool {
            self.0
        }
        fn is_alpha(&self, _: &str, _: &str) -> bool {
            self.0
        }
        fn is_alphanumeric(&self, _: &str, _: &str) -> bool {
            self.0
        }
    }

    fn field(spec: FieldSpec, initial: &str) -> Field {
        Field::new(spec, initial, Fixed(true))
    }

    // -- mount tests --

    #[test]
    fn mount_validates_once() {
        let f = field(FieldSpec::new(SemanticType::Email), "x@y.com");
        assert!(f.is_validated());
        assert_eq!(f.current_value(), "x@y.com");
        assert!(f.is_dirty());
    }

    #[test]
    fn mount_normalizes_initial_value() {
        let f = field(FieldSpec::new(SemanticType::Default), "  padded  ");
        assert_eq!(f.current_value(), "padded");
    }

    #[test]
    fn mount_empty_required_is_invalid() {
        let f = field(FieldSpec::new(SemanticType::Default).with_required(true), "");
        assert!(!f.is_validated());
        assert!(!f.is_dirty());
        assert_eq!(f.feedback(), Feedback::Invalid);
    }

    #[test]
    fn mount_empty_optional_is_neutral() {
        let f = field(FieldSpec::new(SemanticType::Email), "");
        assert!(f.is_validated());
        assert_eq!(f.feedback(), Feedback::Neutral);
    }

    #[test]
    fn mount_accepts_numeric_input() {
        let f = Field::new(FieldSpec::new(SemanticType::Integer), 42i64, Fixed(false));
        assert_eq!(f.current_value(), "42");
        assert!(f.is_validated());
    }

    // -- empty override tests --

    #[test]
    fn empty_overrides_every_type() {
        for semantic in [
            SemanticType::Default,
            SemanticType::Email,
            SemanticType::CreditCard,
            SemanticType::Integer,
            SemanticType::Alpha,
        ] {
            for required in [false, true] {
                let f = Field::new(
                    FieldSpec::new(semantic).with_required(required),
                    "",
                    Fixed(true),
                );
                assert_eq!(f.is_valid(Some("")), !required, "{semantic} required={required}");
                assert_eq!(f.is_valid(Some("   ")), !required);
            }
        }
    }

    // -- dispatch tests --

    #[test]
    fn default_type_passes_any_non_empty_text() {
        let f = Field::new(
            FieldSpec::new(SemanticType::Default).with_required(true),
            "",
            Fixed(false),
        );
        assert!(f.is_valid(Some("hello")));
    }

    #[test]
    fn predicate_verdict_is_respected() {
        let reject = Field::new(FieldSpec::new(SemanticType::Email), "", Fixed(false));
        assert!(!reject.is_valid(Some("x@y.com")));
        let accept = Field::new(FieldSpec::new(SemanticType::Email), "", Fixed(true));
        assert!(accept.is_valid(Some("x@y.com")));
    }

    #[test]
    fn numeric_generic_parse_is_lenient_fallback() {
        // Rules reject everything; the generic finite parse still accepts.
        let f = Field::new(FieldSpec::new(SemanticType::Integer), "", Fixed(false));
        assert!(f.is_valid(Some("42")));
        assert!(f.is_valid(Some("1e3")));
        assert!(f.is_valid(Some("-2.5")));
        assert!(!f.is_valid(Some("abc")));
        assert!(!f.is_valid(Some("inf")));
        assert!(!f.is_valid(Some("NaN")));
    }

    #[test]
    fn numeric_locale_predicate_is_alternative() {
        // Rules accept everything; even a non-parsing value passes.
        let f = Field::new(FieldSpec::new(SemanticType::Decimal), "", Fixed(true));
        assert!(f.is_valid(Some("1,5")));
    }

    #[test]
    fn is_valid_does_not_mutate() {
        let f = field(FieldSpec::new(SemanticType::Default), "before");
        let _ = f.is_valid(Some("after"));
        assert_eq!(f.current_value(), "before");
    }

    // -- focus / dirty tests --

    #[test]
    fn focus_forces_dirty() {
        let mut f = field(FieldSpec::new(SemanticType::Default), "");
        assert!(!f.is_dirty());
        f.on_focus();
        assert!(f.is_focused());
        assert!(f.is_dirty());
    }

    #[test]
    fn blur_empty_goes_clean() {
        let mut f = field(FieldSpec::new(SemanticType::Default), "");
        f.on_focus();
        f.on_blur();
        assert!(!f.is_focused());
        assert!(!f.is_dirty());
        assert_eq!(f.state().label_layout(), LabelLayout::Clean);
    }

    #[test]
    fn blur_with_content_stays_dirty() {
        let mut f = field(FieldSpec::new(SemanticType::Default), "");
        f.on_focus();
        f.on_user_edit("kept");
        f.on_blur();
        assert!(!f.is_focused());
        assert!(f.is_dirty());
        assert_eq!(f.state().label_layout(), LabelLayout::Dirty);
    }

    #[test]
    fn edit_to_empty_while_focused_stays_dirty() {
        let mut f = field(FieldSpec::new(SemanticType::Default), "text");
        f.on_focus();
        f.on_user_edit("");
        assert!(f.is_dirty());
        f.on_blur();
        assert!(!f.is_dirty());
    }

    // -- user edit tests --

    #[test]
    fn user_edit_always_revalidates() {
        let mut f = Field::new(
            FieldSpec::new(SemanticType::Default).with_required(true),
            "seed",
            Fixed(true),
        );
        assert!(f.is_validated());
        assert!(!f.on_user_edit(""));
        assert!(!f.is_validated());
        assert_eq!(f.current_value(), "");
    }

    // -- external value change tests --

    #[test]
    fn external_change_empty_is_ignored() {
        let mut f = field(FieldSpec::new(SemanticType::Default), "kept");
        f.on_external_value_change("kept", "");
        assert_eq!(f.current_value(), "kept");
    }

    #[test]
    fn external_change_same_as_stored_is_ignored() {
        let hits = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&hits);
        let mut f = field(FieldSpec::new(SemanticType::Default), "v");
        f.set_observer(move |_| *sink.borrow_mut() += 1);
        for _ in 0..10 {
            f.on_external_value_change("v", "v");
        }
        assert_eq!(*hits.borrow(), 0);
        assert_eq!(f.current_value(), "v");
    }

    #[test]
    fn external_change_same_as_previous_is_ignored() {
        let mut f = field(FieldSpec::new(SemanticType::Default), "stored");
        f.on_external_value_change("incoming", "incoming");
        assert_eq!(f.current_value(), "stored");
    }

    #[test]
    fn external_change_applies_new_value() {
        let mut f = field(FieldSpec::new(SemanticType::Default), "old");
        f.on_external_value_change("old", "new");
        assert_eq!(f.current_value(), "new");
        assert!(f.is_validated());
    }

    // -- observer tests --

    #[test]
    fn observer_sees_each_transition() {
        let log: Rc<RefCell<Vec<(String, bool)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut f = field(FieldSpec::new(SemanticType::Default), "");
        f.set_observer(move |state| {
            sink.borrow_mut()
                .push((state.raw_value.clone(), state.is_dirty));
        });

        f.on_focus();
        f.on_user_edit("a");
        f.on_blur();

        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0], (String::new(), true));
        assert_eq!(log[1], ("a".to_string(), true));
        assert_eq!(log[2], ("a".to_string(), true));
    }

    #[test]
    fn redundant_focus_events_do_not_notify() {
        let hits = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&hits);
        let mut f = field(FieldSpec::new(SemanticType::Default), "");
        f.set_observer(move |_| *sink.borrow_mut() += 1);
        f.on_focus();
        f.on_focus();
        f.on_blur();
        f.on_blur();
        assert_eq!(*hits.borrow(), 2);
    }

    // -- dispose tests --

    #[test]
    fn dispose_stops_callbacks_and_mutation() {
        let hits = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&hits);
        let mut f = field(FieldSpec::new(SemanticType::Default), "v");
        f.set_observer(move |_| *sink.borrow_mut() += 1);
        f.dispose();

        f.on_user_edit("changed");
        f.on_focus();
        f.on_blur();
        f.on_external_value_change("v", "other");
        f.validate(Some("x"));

        assert_eq!(*hits.borrow(), 0);
        assert_eq!(f.current_value(), "v");
        assert!(!f.is_focused());
    }

    // -- numeric output tests --

    #[test]
    fn numeric_value_coercion() {
        let mut f = Field::new(FieldSpec::new(SemanticType::Integer), "12.9", Fixed(false));
        assert_eq!(f.numeric_value(), 12);
        f.on_user_edit("abc");
        assert_eq!(f.numeric_value(), 0);
    }
}
