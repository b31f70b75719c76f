use serde::{Deserialize, Serialize};

/// A declared type constraint, as read off a property, parameter, or return
/// position.
///
/// The tree is immutable once built. Composite variants are never empty;
/// the constructors debug-assert this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeExpr {
    /// A single named type. `builtin` marks platform primitives (`string`,
    /// `int`, …), which are never valid targets for class assignability.
    /// The name may carry a leading `?` nullability marker.
    Named { name: String, builtin: bool },
    /// Satisfied by a candidate compatible with at least one member.
    Union(Vec<TypeExpr>),
    /// Satisfied only by a candidate compatible with every member.
    Intersection(Vec<TypeExpr>),
    /// An expression shape the provider could not describe. Never satisfiable.
    Opaque,
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named {
            name: name.into(),
            builtin: false,
        }
    }

    pub fn builtin(name: impl Into<String>) -> Self {
        TypeExpr::Named {
            name: name.into(),
            builtin: true,
        }
    }

    pub fn union(members: impl IntoIterator<Item = TypeExpr>) -> Self {
        let members: Vec<TypeExpr> = members.into_iter().collect();
        debug_assert!(!members.is_empty(), "union with no members");
        TypeExpr::Union(members)
    }

    pub fn intersection(members: impl IntoIterator<Item = TypeExpr>) -> Self {
        let members: Vec<TypeExpr> = members.into_iter().collect();
        debug_assert!(!members.is_empty(), "intersection with no members");
        TypeExpr::Intersection(members)
    }

    /// Whether this is a named builtin/primitive type.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        matches!(self, TypeExpr::Named { builtin: true, .. })
    }
}

/// Strip the leading `?` nullability marker(s) from a declared type name.
///
/// Nullability is tracked separately from class assignability; `?Parent` and
/// `Parent` name the same class.
#[must_use]
pub fn strip_nullability(name: &str) -> &str {
    name.trim_start_matches('?')
}
