use serde::{Deserialize, Serialize};

use crate::TypeExpr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

/// A class-level declaration as reported by the host introspection facility.
///
/// Declarations are immutable once loaded; the resolver caches handles to
/// them for the lifetime of its owning context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Fully-qualified class name.
    pub name: String,
    pub kind: ClassKind,
    pub is_abstract: bool,
    pub superclass: Option<String>,
    /// Implemented interfaces (or, for an interface, its extended interfaces).
    pub interfaces: Vec<String>,
    pub properties: Vec<PropertyDecl>,
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_abstract: false,
            superclass: None,
            interfaces: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Class)
    }

    pub fn abstract_class(name: impl Into<String>) -> Self {
        let mut decl = Self::new(name, ClassKind::Class);
        decl.is_abstract = true;
        decl
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Interface)
    }

    #[must_use]
    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertyDecl) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    /// Whether values of this class can be constructed directly.
    ///
    /// Interfaces, annotations, enums and abstract classes are not
    /// instantiable.
    #[must_use]
    pub fn is_instantiable(&self) -> bool {
        matches!(self.kind, ClassKind::Class | ClassKind::Record) && !self.is_abstract
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyDecl> {
        self.properties.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    /// Declared type constraint, if the property has one.
    pub ty: Option<TypeExpr>,
}

impl PropertyDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    pub fn typed(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    pub params: Vec<ParamDecl>,
    pub return_type: Option<TypeExpr>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
        }
    }

    #[must_use]
    pub fn with_param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn returning(mut self, ty: TypeExpr) -> Self {
        self.return_type = Some(ty);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    pub ty: Option<TypeExpr>,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    pub fn typed(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
        }
    }
}
