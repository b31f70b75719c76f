use std::sync::Arc;

use prism_model::{ClassDecl, ClassKind, MethodDecl, ParamDecl, PropertyDecl, TypeExpr};

use crate::arena::TypeExprId;

/// Cached handle to a class declaration.
///
/// Handles are cheap to clone; the resolver hands out clones of one cached
/// handle per name, so repeated resolution is identity-equal (see
/// [`ClassHandle::ptr_eq`]).
#[derive(Clone, Debug)]
pub struct ClassHandle {
    decl: Arc<ClassDecl>,
}

impl ClassHandle {
    pub(crate) fn new(decl: Arc<ClassDecl>) -> Self {
        Self { decl }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.decl.name
    }

    #[must_use]
    pub fn kind(&self) -> ClassKind {
        self.decl.kind
    }

    #[must_use]
    pub fn is_instantiable(&self) -> bool {
        self.decl.is_instantiable()
    }

    #[must_use]
    pub fn decl(&self) -> &ClassDecl {
        &self.decl
    }

    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.decl, &b.decl)
    }
}

#[derive(Debug)]
struct PropertyMeta {
    class: String,
    decl: PropertyDecl,
    ty: Option<TypeExprId>,
}

/// Cached handle to a property declaration, with its declared type already
/// interned into the owning context's expression arena.
#[derive(Clone, Debug)]
pub struct PropertyHandle {
    inner: Arc<PropertyMeta>,
}

impl PropertyHandle {
    pub(crate) fn new(class: &str, decl: PropertyDecl, ty: Option<TypeExprId>) -> Self {
        Self {
            inner: Arc::new(PropertyMeta {
                class: class.to_string(),
                decl,
                ty,
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.decl.name
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.inner.class
    }

    /// The declared type constraint, if any, as plain data.
    #[must_use]
    pub fn declared_type(&self) -> Option<&TypeExpr> {
        self.inner.decl.ty.as_ref()
    }

    /// Interned identity of the declared type within the owning context.
    #[must_use]
    pub fn declared_type_id(&self) -> Option<TypeExprId> {
        self.inner.ty
    }

    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

#[derive(Debug)]
struct MethodMeta {
    class: String,
    decl: MethodDecl,
    return_ty: Option<TypeExprId>,
}

/// Cached handle to a method declaration.
#[derive(Clone, Debug)]
pub struct MethodHandle {
    inner: Arc<MethodMeta>,
}

impl MethodHandle {
    pub(crate) fn new(class: &str, decl: MethodDecl, return_ty: Option<TypeExprId>) -> Self {
        Self {
            inner: Arc::new(MethodMeta {
                class: class.to_string(),
                decl,
                return_ty,
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.decl.name
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.inner.class
    }

    #[must_use]
    pub fn params(&self) -> &[ParamDecl] {
        &self.inner.decl.params
    }

    #[must_use]
    pub fn return_type(&self) -> Option<&TypeExpr> {
        self.inner.decl.return_type.as_ref()
    }

    /// Interned identity of the declared return type within the owning
    /// context.
    #[must_use]
    pub fn return_type_id(&self) -> Option<TypeExprId> {
        self.inner.return_ty
    }

    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}
