use pretty_assertions::assert_eq;
use prism_reflect::ReflectError;

use super::fixtures::reflector;

#[test]
fn declared_class_names_preserves_declaration_order() {
    let reflector = reflector();
    let either = reflector.property("Document", "either").expect("either");

    assert_eq!(
        reflector.declared_class_names(&either),
        vec!["Parent".to_string(), "Child".to_string()]
    );
}

#[test]
fn declared_class_names_keeps_duplicates_and_skips_builtins() {
    let reflector = reflector();
    let mixed = reflector.property("Document", "mixed").expect("mixed");

    assert_eq!(
        reflector.declared_class_names(&mixed),
        vec!["Parent".to_string(), "Parent".to_string()]
    );
}

#[test]
fn declared_class_names_strips_nullability_markers() {
    let reflector = reflector();
    let owner = reflector.property("Document", "owner").expect("owner");

    assert_eq!(
        reflector.declared_class_names(&owner),
        vec!["Parent".to_string()]
    );
}

#[test]
fn declared_class_names_descends_intersections() {
    let reflector = reflector();
    let both = reflector.property("Document", "both").expect("both");

    assert_eq!(
        reflector.declared_class_names(&both),
        vec!["Child".to_string(), "Tagged".to_string()]
    );
}

#[test]
fn declared_class_names_is_empty_without_a_declared_type() {
    let reflector = reflector();
    let raw = reflector.property("Document", "raw").expect("raw");

    assert_eq!(reflector.declared_class_names(&raw), Vec::<String>::new());
}

#[test]
fn declared_class_names_is_empty_for_pure_builtin_types() {
    let reflector = reflector();
    let title = reflector.property("Document", "title").expect("title");

    assert_eq!(reflector.declared_class_names(&title), Vec::<String>::new());
}

#[test]
fn instantiable_class_types_deduplicates_by_first_occurrence() {
    let reflector = reflector();
    let mixed = reflector.property("Document", "mixed").expect("mixed");

    assert_eq!(
        reflector.instantiable_class_types(&mixed),
        vec!["Parent".to_string()]
    );
}

#[test]
fn instantiable_class_types_excludes_interfaces() {
    let reflector = reflector();
    let tag = reflector.property("Document", "tag").expect("tag");

    // The interface is collected as a declared name, but it is not a type a
    // value can be built as.
    assert_eq!(
        reflector.declared_class_names(&tag),
        vec!["Tagged".to_string()]
    );
    assert_eq!(reflector.instantiable_class_types(&tag), Vec::<String>::new());
}

#[test]
fn instantiable_class_types_excludes_abstract_classes() {
    let reflector = reflector();
    let widget = reflector.property("Document", "widget").expect("widget");

    assert_eq!(
        reflector.instantiable_class_types(&widget),
        Vec::<String>::new()
    );
}

#[test]
fn instantiable_class_types_keeps_only_interface_free_union_members() {
    let reflector = reflector();
    let both = reflector.property("Document", "both").expect("both");

    assert_eq!(
        reflector.instantiable_class_types(&both),
        vec!["Child".to_string()]
    );
}

#[test]
fn best_class_for_returns_the_first_compatible_candidate() {
    let reflector = reflector();
    let parent = reflector.property("Document", "parent").expect("parent");

    let best = reflector
        .best_class_for(&parent, &["Parent", "Child"])
        .expect("both candidates are compatible");
    assert_eq!(best, "Parent");

    let best = reflector
        .best_class_for(&parent, &["Child", "Parent"])
        .expect("both candidates are compatible");
    assert_eq!(best, "Child");
}

#[test]
fn best_class_for_skips_incompatible_candidates() {
    let reflector = reflector();
    let parent = reflector.property("Document", "parent").expect("parent");

    let best = reflector
        .best_class_for(&parent, &["TaggedOnly", "Child"])
        .expect("second candidate is compatible");
    assert_eq!(best, "Child");
}

#[test]
fn best_class_for_exhaustion_carries_the_property_name() {
    let reflector = reflector();
    let parent = reflector.property("Document", "parent").expect("parent");

    let err = reflector
        .best_class_for(&parent, &["Tagged", "TaggedOnly"])
        .expect_err("no candidate is compatible");

    assert!(matches!(
        err,
        ReflectError::NoCompatibleType { ref property } if property == "parent"
    ));
    assert_eq!(
        err.to_string(),
        "no compatible class found for property parent"
    );
}

#[test]
fn best_class_for_accepts_owned_candidate_lists() {
    let reflector = reflector();
    let either = reflector.property("Document", "either").expect("either");

    let candidates: Vec<String> = vec!["TaggedOnly".into(), "TaggedChild".into()];
    let best = reflector
        .best_class_for(&either, &candidates)
        .expect("TaggedChild matches through Child");
    assert_eq!(best, "TaggedChild");
}
