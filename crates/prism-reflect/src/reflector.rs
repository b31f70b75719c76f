use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use prism_model::TypeProvider;

use crate::arena::ExprArena;
use crate::error::{ReflectError, Result};
use crate::handles::{ClassHandle, MethodHandle, PropertyHandle};
use crate::TypeExprId;

/// Something that names a class: a type-name string, or a host value whose
/// runtime class name is known.
pub trait ClassIdentifier {
    fn class_name(&self) -> &str;
}

impl ClassIdentifier for str {
    fn class_name(&self) -> &str {
        self
    }
}

impl ClassIdentifier for String {
    fn class_name(&self) -> &str {
        self
    }
}

/// Shared introspection context: the metadata resolver's handle caches plus
/// the compatibility engine's interned expressions and memo table.
///
/// Constructing a fresh context gives fully isolated caches, so tests and
/// independent domains never observe each other's handles.
/// All caches sit behind a single mutex guarding read-and-possibly-insert
/// sequences; a lost race that resolves the same key twice keeps the first
/// insertion and discards the rest, so results stay identity-stable.
pub struct Reflector {
    provider: Arc<dyn TypeProvider>,
    inner: Mutex<ReflectorInner>,
}

#[derive(Default)]
pub(crate) struct ReflectorInner {
    classes: HashMap<String, ClassHandle>,
    properties: HashMap<String, HashMap<String, PropertyHandle>>,
    methods: HashMap<String, HashMap<String, MethodHandle>>,
    pub(crate) exprs: ExprArena,
    /// Compatibility memo: expression identity → candidate name → result.
    pub(crate) compat: HashMap<TypeExprId, HashMap<String, bool>>,
}

impl std::fmt::Debug for Reflector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reflector").finish_non_exhaustive()
    }
}

impl Reflector {
    pub fn new(provider: Arc<dyn TypeProvider>) -> Self {
        Self {
            provider,
            inner: Mutex::new(ReflectorInner::default()),
        }
    }

    /// Convenience constructor taking an owned provider.
    pub fn with_provider(provider: impl TypeProvider + 'static) -> Self {
        Self::new(Arc::new(provider))
    }

    pub(crate) fn provider(&self) -> &dyn TypeProvider {
        self.provider.as_ref()
    }

    #[track_caller]
    pub(crate) fn lock_inner(&self) -> MutexGuard<'_, ReflectorInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(err) => {
                let loc = std::panic::Location::caller();
                tracing::error!(
                    target = "prism.reflect",
                    file = loc.file(),
                    line = loc.line(),
                    column = loc.column(),
                    error = %err,
                    "mutex poisoned; continuing with recovered guard"
                );
                err.into_inner()
            }
        }
    }

    /// Resolve the class named by `ident`, reusing the cached handle when one
    /// exists for this exact name.
    pub fn class<I>(&self, ident: &I) -> Result<ClassHandle>
    where
        I: ClassIdentifier + ?Sized,
    {
        let name = ident.class_name();
        if let Some(handle) = self.lock_inner().classes.get(name) {
            return Ok(handle.clone());
        }

        let decl = self
            .provider
            .class_decl(name)
            .ok_or_else(|| ReflectError::UnknownType {
                name: name.to_string(),
            })?;
        tracing::debug!(target = "prism.reflect", class = %decl.name, "resolved class");

        let handle = ClassHandle::new(decl);
        let mut inner = self.lock_inner();
        Ok(inner
            .classes
            .entry(name.to_string())
            .or_insert(handle)
            .clone())
    }

    /// Resolve a property on the class named by `ident`.
    ///
    /// The owning class resolves first; the property's declared type is
    /// interned into this context's expression arena when the handle is
    /// constructed.
    pub fn property<I>(&self, ident: &I, property: &str) -> Result<PropertyHandle>
    where
        I: ClassIdentifier + ?Sized,
    {
        let class = self.class(ident)?;
        let name = ident.class_name();

        let mut inner = self.lock_inner();
        if let Some(handle) = inner.properties.get(name).and_then(|m| m.get(property)) {
            return Ok(handle.clone());
        }

        let decl = class
            .decl()
            .property(property)
            .cloned()
            .ok_or_else(|| ReflectError::UnknownMember {
                class: class.name().to_string(),
                member: property.to_string(),
            })?;
        let ty = decl.ty.as_ref().map(|expr| inner.exprs.intern(expr));
        tracing::debug!(
            target = "prism.reflect",
            class = %class.name(),
            property = %property,
            "resolved property"
        );

        let handle = PropertyHandle::new(class.name(), decl, ty);
        Ok(inner
            .properties
            .entry(name.to_string())
            .or_default()
            .entry(property.to_string())
            .or_insert(handle)
            .clone())
    }

    /// Resolve a method on the class named by `ident`.
    pub fn method<I>(&self, ident: &I, method: &str) -> Result<MethodHandle>
    where
        I: ClassIdentifier + ?Sized,
    {
        let class = self.class(ident)?;
        let name = ident.class_name();

        let mut inner = self.lock_inner();
        if let Some(handle) = inner.methods.get(name).and_then(|m| m.get(method)) {
            return Ok(handle.clone());
        }

        let decl = class
            .decl()
            .method(method)
            .cloned()
            .ok_or_else(|| ReflectError::UnknownMember {
                class: class.name().to_string(),
                member: method.to_string(),
            })?;
        let return_ty = decl.return_type.as_ref().map(|expr| inner.exprs.intern(expr));
        tracing::debug!(
            target = "prism.reflect",
            class = %class.name(),
            method = %method,
            "resolved method"
        );

        let handle = MethodHandle::new(class.name(), decl, return_ty);
        Ok(inner
            .methods
            .entry(name.to_string())
            .or_default()
            .entry(method.to_string())
            .or_insert(handle)
            .clone())
    }
}
