//! Property-based invariant tests for the field validation engine.
//!
//! These tests verify the structural invariants that must hold for any
//! input and any event sequence:
//!
//! 1. Empty text always validates to `!required`, for every semantic type.
//! 2. Normalization is idempotent.
//! 3. The dirty flag always equals `non-empty || focused`.
//! 4. While focused, the field is dirty regardless of edits.
//! 5. A no-op external value change never mutates state or fires the
//!    observer.
//! 6. Numeric-family types accept anything that parses as a finite
//!    number, whatever the locale predicate says.
//! 7. Pure validity checks never change observable state.

use std::cell::RefCell;
use std::rc::Rc;

use fieldgate_core::{Field, FieldSpec, FormatRules, SemanticType, normalize};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Stub rules with a fixed verdict for every predicate.
#[derive(Clone, Copy)]
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

const ALL_TYPES: [SemanticType; 15] = [
    SemanticType::Default,
    SemanticType::Email,
    SemanticType::Phone,
    SemanticType::Currency,
    SemanticType::PostalCode,
    SemanticType::HexColor,
    SemanticType::IdentityCard,
    SemanticType::CreditCard,
    SemanticType::Url,
    SemanticType::Numeric,
    SemanticType::Integer,
    SemanticType::Float,
    SemanticType::Decimal,
    SemanticType::Alpha,
    SemanticType::Alphanumeric,
];

fn semantic_strategy() -> impl Strategy<Value = SemanticType> {
    (0..ALL_TYPES.len()).prop_map(|i| ALL_TYPES[i])
}

/// One raw event a presentation layer can forward.
#[derive(Debug, Clone)]
enum Ev {
    Edit(String),
    Focus,
    Blur,
    External(String, String),
}

fn event_strategy() -> impl Strategy<Value = Ev> {
    prop_oneof![
        "[ a-z0-9]{0,8}".prop_map(Ev::Edit),
        Just(Ev::Focus),
        Just(Ev::Blur),
        ("[ a-z0-9]{0,8}", "[ a-z0-9]{0,8}").prop_map(|(p, n)| Ev::External(p, n)),
    ]
}

fn apply(field: &mut Field, event: &Ev) {
    match event {
        Ev::Edit(text) => {
            field.on_user_edit(text);
        }
        Ev::Focus => field.on_focus(),
        Ev::Blur => field.on_blur(),
        Ev::External(prev, next) => field.on_external_value_change(prev.as_str(), next.as_str()),
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Empty text always validates to !required
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn empty_overrides_type(
        semantic in semantic_strategy(),
        required in any::<bool>(),
        verdict in any::<bool>(),
    ) {
        let field = Field::new(
            FieldSpec::new(semantic).with_required(required),
            "",
            Fixed(verdict),
        );
        prop_assert_eq!(field.is_valid(Some("")), !required);
        prop_assert_eq!(field.is_valid(Some("   \t ")), !required);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Normalization is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalize_idempotent(input in ".{0,32}") {
        let once = normalize(input.as_str());
        prop_assert_eq!(normalize(once.as_str()), once);
    }

    #[test]
    fn normalize_integers_idempotent(n in any::<i64>()) {
        let once = normalize(n);
        prop_assert_eq!(normalize(once.as_str()), once);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Dirty flag always equals non-empty || focused
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn dirty_invariant_holds_under_any_events(
        semantic in semantic_strategy(),
        required in any::<bool>(),
        initial in "[ a-z]{0,6}",
        events in proptest::collection::vec(event_strategy(), 0..24),
    ) {
        let mut field = Field::new(
            FieldSpec::new(semantic).with_required(required),
            initial.as_str(),
            Fixed(true),
        );
        for event in &events {
            apply(&mut field, event);
            prop_assert_eq!(
                field.is_dirty(),
                !field.current_value().is_empty() || field.is_focused(),
                "dirty invariant broken after {:?}",
                event
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. While focused, the field is dirty
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn focused_implies_dirty(edits in proptest::collection::vec("[ a-z]{0,6}", 0..12)) {
        let mut field = Field::new(FieldSpec::default(), "", Fixed(true));
        field.on_focus();
        for edit in &edits {
            field.on_user_edit(edit);
            prop_assert!(field.is_dirty());
        }
        field.on_blur();
        prop_assert_eq!(field.is_dirty(), !field.current_value().is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. No-op external value change never mutates or notifies
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn external_noop_never_mutates(
        value in "[a-z0-9]{0,8}",
        repeats in 1usize..12,
    ) {
        let hits = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&hits);
        let mut field = Field::new(FieldSpec::default(), value.as_str(), Fixed(true));
        field.set_observer(move |_| *sink.borrow_mut() += 1);
        let before = field.state().clone();

        for _ in 0..repeats {
            field.on_external_value_change(value.as_str(), value.as_str());
        }

        prop_assert_eq!(field.state(), &before);
        prop_assert_eq!(*hits.borrow(), 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Numeric leniency: finite parses always pass numeric-family types
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn finite_numbers_pass_numeric_types(n in any::<i64>(), ty in 9..13usize) {
        // Indices 9..13 are the numeric family in ALL_TYPES.
        let field = Field::new(
            FieldSpec::new(ALL_TYPES[ty]).with_required(true),
            "",
            Fixed(false),
        );
        prop_assert!(field.is_valid(Some(&n.to_string())));
    }

    #[test]
    fn finite_floats_pass_numeric_types(x in proptest::num::f64::NORMAL, ty in 9..13usize) {
        let field = Field::new(
            FieldSpec::new(ALL_TYPES[ty]).with_required(true),
            "",
            Fixed(false),
        );
        prop_assert!(field.is_valid(Some(&x.to_string())));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Pure validity checks never change observable state
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn is_valid_is_pure(
        semantic in semantic_strategy(),
        stored in "[a-z]{0,6}",
        candidate in ".{0,16}",
    ) {
        let field = Field::new(FieldSpec::new(semantic), stored.as_str(), Fixed(true));
        let before = field.state().clone();
        let _ = field.is_valid(Some(candidate.as_str()));
        let _ = field.is_valid(None);
        prop_assert_eq!(field.state(), &before);
    }
}
