//! Property-based tests for type unification
//!
//! These tests verify invariants that should hold for all inputs:
//! - Unification is deterministic
//! - Normalized names never keep the leading root separator
//! - A `null` annotation anywhere makes the result nullable
//! - Docblock annotations take precedence over the native declaration
//! - Builtin classification matches the fixed type table

use proptest::prelude::*;
use unitgen::{NativeType, Parameter, TypeDescriptor, BUILTIN_TYPES};

/// Generate a PHP class short name; builtins are all lowercase, so these
/// never collide with the builtin table
fn class_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9]{0,8}"
}

/// Generate an annotation that never names a type on its own
fn skippable() -> impl Strategy<Value = String> {
    prop_oneof![Just("null".to_string()), Just("mixed".to_string())]
}

/// Generate any docblock annotation entry
fn doc_entry() -> impl Strategy<Value = String> {
    prop_oneof![
        skippable(),
        class_name(),
        proptest::sample::select(&BUILTIN_TYPES[..]).prop_map(|name| name.to_string()),
    ]
}

proptest! {
    /// Property: Unification is deterministic - the same sources always
    /// produce the same descriptor
    #[test]
    fn prop_unification_is_deterministic(
        has_native in any::<bool>(),
        native_name in doc_entry(),
        nullable in any::<bool>(),
        docs in proptest::collection::vec(doc_entry(), 0..5)
    ) {
        let native = has_native.then(|| NativeType::new(native_name, nullable));
        let first = TypeDescriptor::unify(native.as_ref(), &docs);
        let second = TypeDescriptor::unify(native.as_ref(), &docs);
        prop_assert_eq!(first, second);
    }

    /// Property: The leading root separator never survives normalization
    #[test]
    fn prop_leading_separator_never_survives(
        name in class_name(),
        nullable in any::<bool>()
    ) {
        let native = NativeType::new(format!("\\{name}"), nullable);
        let descriptor = TypeDescriptor::unify(Some(&native), &[]).unwrap();
        prop_assert!(!descriptor.name().starts_with('\\'));
        prop_assert_eq!(descriptor.name(), name.as_str());
        prop_assert_eq!(descriptor.is_nullable(), nullable);
    }

    /// Property: A `null` annotation anywhere in the list marks the
    /// result nullable without changing the chosen name
    #[test]
    fn prop_null_anywhere_marks_the_result_nullable(
        candidate in class_name(),
        null_first in any::<bool>()
    ) {
        let docs = if null_first {
            vec!["null".to_string(), candidate.clone()]
        } else {
            vec![candidate.clone(), "null".to_string()]
        };
        let descriptor = TypeDescriptor::unify(None, &docs).unwrap();
        prop_assert!(descriptor.is_nullable());
        prop_assert_eq!(descriptor.name(), candidate.as_str());
    }

    /// Property: The first annotation that is neither `null` nor `mixed`
    /// names the type, whatever follows it
    #[test]
    fn prop_first_real_annotation_wins(
        prefix in proptest::collection::vec(skippable(), 0..4),
        candidate in class_name(),
        suffix in proptest::collection::vec(doc_entry(), 0..4)
    ) {
        let mut docs = prefix;
        docs.push(candidate.clone());
        docs.extend(suffix);
        let descriptor = TypeDescriptor::unify(None, &docs).unwrap();
        prop_assert_eq!(descriptor.name(), candidate.as_str());
    }

    /// Property: Annotations take precedence over the native declaration
    #[test]
    fn prop_annotations_override_the_native_declaration(
        native_name in proptest::sample::select(&BUILTIN_TYPES[..]),
        candidate in class_name()
    ) {
        let native = NativeType::new(native_name, false);
        let descriptor =
            TypeDescriptor::unify(Some(&native), &[candidate.clone()]).unwrap();
        prop_assert_eq!(descriptor.name(), candidate.as_str());
        prop_assert!(!descriptor.is_builtin());
    }

    /// Property: Native nullability survives annotation precedence
    #[test]
    fn prop_native_nullability_survives_annotations(
        candidate in class_name()
    ) {
        let native = NativeType::new(candidate.clone(), true);
        let descriptor =
            TypeDescriptor::unify(Some(&native), &[candidate]).unwrap();
        prop_assert!(descriptor.is_nullable());
    }

    /// Property: Builtin classification agrees with the type table for
    /// every native declaration
    #[test]
    fn prop_builtin_classification_matches_the_table(
        name in proptest::sample::select(&BUILTIN_TYPES[..]),
        nullable in any::<bool>()
    ) {
        let native = NativeType::new(name, nullable);
        let descriptor = TypeDescriptor::unify(Some(&native), &[]).unwrap();
        prop_assert!(descriptor.is_builtin());
        prop_assert_eq!(descriptor.name(), name);
    }

    /// Property: Class names never classify as builtin
    #[test]
    fn prop_class_names_are_never_builtin(name in class_name()) {
        let descriptor = TypeDescriptor::unify(None, &[name]).unwrap();
        prop_assert!(!descriptor.is_builtin());
    }

    /// Property: An array suffix collapses to the builtin array type
    #[test]
    fn prop_array_suffix_collapses_to_array(name in class_name()) {
        let docs = vec![format!("\\{name}[]")];
        let descriptor = TypeDescriptor::unify(None, &docs).unwrap();
        prop_assert_eq!(descriptor.name(), "array");
        prop_assert!(descriptor.is_builtin());
    }

    /// Property: Annotations with no real candidate never produce a
    /// descriptor, even when a native declaration exists
    #[test]
    fn prop_skippable_annotations_alone_produce_nothing(
        docs in proptest::collection::vec(skippable(), 1..6),
        with_native in any::<bool>()
    ) {
        let native = with_native.then(|| NativeType::new("\\App\\User", false));
        prop_assert_eq!(TypeDescriptor::unify(native.as_ref(), &docs), None);
    }

    /// Property: Parameters unify exactly like the bare unifier
    #[test]
    fn prop_parameter_descriptors_match_direct_unification(
        name in "[a-z][A-Za-z0-9]{0,8}",
        has_native in any::<bool>(),
        native_name in doc_entry(),
        docs in proptest::collection::vec(doc_entry(), 0..4)
    ) {
        let native = has_native.then(|| NativeType::new(native_name, false));
        let parameter = Parameter::new(name, native.clone(), docs.clone());
        let expected = TypeDescriptor::unify(native.as_ref(), &docs);
        prop_assert_eq!(parameter.type_descriptor(), expected.as_ref());
    }
}
