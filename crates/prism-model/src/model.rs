use std::collections::HashMap;
use std::sync::Arc;

use crate::ClassDecl;

/// Capability trait over the host introspection facility.
///
/// This is the entire surface the resolver and compatibility engine need:
/// a by-name lookup returning the class declaration, off which superclass and
/// interface edges, member type expressions, builtin flags and
/// instantiability are all readable. Keeping the trait this narrow lets the
/// engine run against synthetic hierarchies in tests as easily as against a
/// real loaded type system.
pub trait TypeProvider: Send + Sync {
    fn class_decl(&self, name: &str) -> Option<Arc<ClassDecl>>;
}

/// In-memory [`TypeProvider`] backed by a name → declaration map.
#[derive(Debug, Default)]
pub struct TypeModel {
    classes: HashMap<String, Arc<ClassDecl>>,
}

impl TypeModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `decl`, replacing any previous declaration with the same name.
    pub fn insert(&mut self, decl: ClassDecl) -> Arc<ClassDecl> {
        let decl = Arc::new(decl);
        self.classes.insert(decl.name.clone(), decl.clone());
        decl
    }

    pub fn extend(&mut self, decls: impl IntoIterator<Item = ClassDecl>) {
        for decl in decls {
            self.insert(decl);
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl TypeProvider for TypeModel {
    fn class_decl(&self, name: &str) -> Option<Arc<ClassDecl>> {
        self.classes.get(name).cloned()
    }
}
