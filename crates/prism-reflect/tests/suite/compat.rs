use super::fixtures::reflector;

#[test]
fn named_type_accepts_the_exact_class() {
    let reflector = reflector();
    let parent = reflector.property("Document", "parent").expect("parent");

    assert!(reflector.property_compatible(&parent, "Parent"));
}

#[test]
fn named_type_accepts_transitive_subclasses() {
    let reflector = reflector();
    let parent = reflector.property("Document", "parent").expect("parent");

    assert!(reflector.property_compatible(&parent, "Child"));
    assert!(reflector.property_compatible(&parent, "TaggedChild"));
}

#[test]
fn named_type_rejects_unrelated_classes() {
    let reflector = reflector();
    let parent = reflector.property("Document", "parent").expect("parent");

    assert!(!reflector.property_compatible(&parent, "TaggedOnly"));
}

#[test]
fn interface_type_accepts_implementers() {
    let reflector = reflector();
    let tag = reflector.property("Document", "tag").expect("tag");

    assert!(reflector.property_compatible(&tag, "TaggedOnly"));
    assert!(reflector.property_compatible(&tag, "TaggedChild"));
    assert!(!reflector.property_compatible(&tag, "Child"));
}

#[test]
fn builtin_types_are_never_class_compatible() {
    let reflector = reflector();
    let title = reflector.property("Document", "title").expect("title");

    assert!(!reflector.property_compatible(&title, "string"));
    assert!(!reflector.property_compatible(&title, "Parent"));
}

#[test]
fn nullability_marker_does_not_affect_compatibility() {
    let reflector = reflector();
    let owner = reflector.property("Document", "owner").expect("owner");

    assert!(reflector.property_compatible(&owner, "Parent"));
    assert!(reflector.property_compatible(&owner, "Child"));
    assert!(!reflector.property_compatible(&owner, "?Parent"));
}

#[test]
fn union_accepts_a_candidate_matching_any_member() {
    let reflector = reflector();
    let either = reflector.property("Document", "either").expect("either");

    assert!(reflector.property_compatible(&either, "Parent"));
    assert!(reflector.property_compatible(&either, "Child"));
    assert!(reflector.property_compatible(&either, "TaggedChild"));
    assert!(!reflector.property_compatible(&either, "TaggedOnly"));
}

#[test]
fn intersection_requires_every_member() {
    let reflector = reflector();
    let both = reflector.property("Document", "both").expect("both");

    assert!(reflector.property_compatible(&both, "TaggedChild"));
    assert!(!reflector.property_compatible(&both, "Child"));
    assert!(!reflector.property_compatible(&both, "TaggedOnly"));
}

#[test]
fn memoization_distinguishes_candidates_for_one_expression() {
    let reflector = reflector();
    let both = reflector.property("Document", "both").expect("both");

    // Same expression queried with different candidates, repeatedly, in both
    // orders: cached answers must stay per-candidate.
    assert!(reflector.property_compatible(&both, "TaggedChild"));
    assert!(!reflector.property_compatible(&both, "Child"));
    assert!(!reflector.property_compatible(&both, "Child"));
    assert!(reflector.property_compatible(&both, "TaggedChild"));
}

#[test]
fn opaque_expression_shapes_are_never_satisfiable() {
    let reflector = reflector();
    let odd = reflector.property("Document", "odd").expect("odd");

    assert!(!reflector.property_compatible(&odd, "Parent"));
    assert!(!reflector.property_compatible(&odd, "Ghost"));
}

#[test]
fn untyped_property_accepts_no_class_candidate() {
    let reflector = reflector();
    let raw = reflector.property("Document", "raw").expect("raw");

    assert!(raw.declared_type().is_none());
    assert!(!reflector.property_compatible(&raw, "Parent"));
}

#[test]
fn abstract_named_type_still_accepts_subclasses() {
    let reflector = reflector();
    let widget = reflector.property("Document", "widget").expect("widget");

    assert!(reflector.property_compatible(&widget, "BaseWidget"));
}

#[test]
fn foreign_expression_ids_evaluate_as_unsatisfiable() {
    let first = reflector();
    let second = reflector();

    let parent = first.property("Document", "parent").expect("parent");
    // Resolve nothing in `second`: its arena is empty, so the foreign id
    // cannot resolve to a node.
    let foreign = parent.declared_type_id().expect("declared type");
    assert!(!second.type_compatible(foreign, "Parent"));
}
