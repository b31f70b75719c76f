//! Type-compatibility engine: decides whether a concrete class satisfies a
//! declared type constraint, memoized per interned expression identity and
//! candidate name.

use std::collections::{HashSet, VecDeque};

use prism_model::{strip_nullability, TypeProvider};

use crate::arena::{ExprArena, ExprNode};
use crate::error::{ReflectError, Result};
use crate::handles::PropertyHandle;
use crate::reflector::{Reflector, ReflectorInner};
use crate::TypeExprId;

impl Reflector {
    /// Whether `candidate` satisfies the interned expression `expr`.
    ///
    /// Unknown expression shapes, including ids minted by a different
    /// context, are never satisfiable.
    pub fn type_compatible(&self, expr: TypeExprId, candidate: &str) -> bool {
        let mut inner = self.lock_inner();
        compatible(&mut inner, self.provider(), expr, candidate)
    }

    /// Whether `candidate` satisfies `property`'s declared type constraint.
    ///
    /// A property with no declared type accepts no class candidate.
    pub fn property_compatible(&self, property: &PropertyHandle, candidate: &str) -> bool {
        match property.declared_type_id() {
            Some(expr) => self.type_compatible(expr, candidate),
            None => false,
        }
    }

    /// The first candidate, in caller-supplied order, compatible with
    /// `property`'s declared type.
    ///
    /// This is a first-match policy, not a ranking: when several candidates
    /// are compatible, candidate order decides.
    pub fn best_class_for<'a, S: AsRef<str>>(
        &self,
        property: &PropertyHandle,
        candidates: &'a [S],
    ) -> Result<&'a str> {
        candidates
            .iter()
            .map(|candidate| candidate.as_ref())
            .find(|candidate| self.property_compatible(property, candidate))
            .ok_or_else(|| ReflectError::NoCompatibleType {
                property: property.name().to_string(),
            })
    }

    /// Every named, non-builtin type mentioned by `property`'s declared type,
    /// in declaration order, duplicates preserved, nullability markers
    /// stripped. Empty when the property has no declared type.
    pub fn declared_class_names(&self, property: &PropertyHandle) -> Vec<String> {
        let Some(root) = property.declared_type_id() else {
            return Vec::new();
        };
        let inner = self.lock_inner();
        let mut names = Vec::new();
        collect_class_names(&inner.exprs, root, &mut names);
        names
    }

    /// The concretely instantiable classes a property value could be built
    /// as: [`Self::declared_class_names`] deduplicated by first occurrence
    /// and filtered to declarations the provider reports as instantiable.
    /// Interfaces and abstract classes never appear.
    pub fn instantiable_class_types(&self, property: &PropertyHandle) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for name in self.declared_class_names(property) {
            if !seen.insert(name.clone()) {
                continue;
            }
            if self.class(name.as_str()).is_ok_and(|c| c.is_instantiable()) {
                out.push(name);
            }
        }
        out
    }
}

fn compatible(
    inner: &mut ReflectorInner,
    provider: &dyn TypeProvider,
    expr: TypeExprId,
    candidate: &str,
) -> bool {
    if let Some(hit) = inner.compat.get(&expr).and_then(|m| m.get(candidate)) {
        return *hit;
    }

    let Some(node) = inner.exprs.node(expr).cloned() else {
        return false;
    };
    let value = match node {
        ExprNode::Named { name, builtin } => {
            !builtin && assignable(provider, candidate, strip_nullability(&name))
        }
        ExprNode::Union(members) => {
            let mut any = false;
            for member in members {
                if compatible(inner, provider, member, candidate) {
                    any = true;
                    break;
                }
            }
            any
        }
        ExprNode::Intersection(members) => {
            let mut all = true;
            for member in members {
                if !compatible(inner, provider, member, candidate) {
                    all = false;
                    break;
                }
            }
            all
        }
        ExprNode::Opaque => false,
    };

    tracing::trace!(
        target = "prism.reflect",
        expr = ?expr,
        candidate = %candidate,
        compatible = value,
        "computed type compatibility"
    );
    inner
        .compat
        .entry(expr)
        .or_default()
        .insert(candidate.to_string(), value);
    value
}

/// Nominal assignability: `from` names the same class as `to`, or reaches it
/// through superclass/interface edges.
fn assignable(provider: &dyn TypeProvider, from: &str, to: &str) -> bool {
    if from == to {
        return true;
    }

    let mut queue = VecDeque::<String>::new();
    queue.push_back(from.to_string());

    let mut visited = HashSet::<String>::new();
    while let Some(current) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        let Some(decl) = provider.class_decl(&current) else {
            continue;
        };
        if let Some(superclass) = decl.superclass.as_deref() {
            if superclass == to {
                return true;
            }
            queue.push_back(superclass.to_string());
        }
        for interface in &decl.interfaces {
            if interface == to {
                return true;
            }
            queue.push_back(interface.clone());
        }
    }

    false
}

fn collect_class_names(arena: &ExprArena, expr: TypeExprId, names: &mut Vec<String>) {
    match arena.node(expr) {
        Some(ExprNode::Named { name, builtin }) => {
            if !builtin {
                names.push(strip_nullability(name).to_string());
            }
        }
        Some(ExprNode::Union(members)) | Some(ExprNode::Intersection(members)) => {
            for member in members {
                collect_class_names(arena, *member, names);
            }
        }
        Some(ExprNode::Opaque) | None => {}
    }
}
