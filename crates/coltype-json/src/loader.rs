//! Pluggable lookup of native user-defined types by class identifier.
//!
//! The decoder never reflects on names; it asks a [`UdtLoader`]. Hosts either
//! implement the trait themselves or fill a [`UdtRegistry`] with constructors.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use coltype_core::UserDefinedType;

use crate::error::LoadError;

pub trait UdtLoader {
    /// Instantiate the UDT registered under `class`.
    ///
    /// Each call is independent; implementations may cache.
    fn load(&self, class: &str) -> Result<Arc<dyn UserDefinedType>, LoadError>;
}

type Constructor = Arc<dyn Fn() -> Result<Arc<dyn UserDefinedType>, LoadError> + Send + Sync>;

/// Identifier -> constructor table. An empty registry rejects every class.
#[derive(Clone, Default)]
pub struct UdtRegistry {
    constructors: HashMap<String, Constructor>,
}

impl UdtRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor; a later registration for the same class wins.
    pub fn register<F>(&mut self, class: impl Into<String>, ctor: F) -> &mut Self
    where
        F: Fn() -> Result<Arc<dyn UserDefinedType>, LoadError> + Send + Sync + 'static,
    {
        self.constructors.insert(class.into(), Arc::new(ctor));
        self
    }

    /// Register a type that is cheap to construct and never fails.
    pub fn register_instance<T>(&mut self, udt: T) -> &mut Self
    where
        T: UserDefinedType + Clone + 'static,
    {
        let class = udt.class_name().to_string();
        self.register(class, move || {
            Ok(Arc::new(udt.clone()) as Arc<dyn UserDefinedType>)
        })
    }

    pub fn contains(&self, class: &str) -> bool {
        self.constructors.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl UdtLoader for UdtRegistry {
    fn load(&self, class: &str) -> Result<Arc<dyn UserDefinedType>, LoadError> {
        let ctor = self
            .constructors
            .get(class)
            .ok_or_else(|| LoadError::NotRegistered(class.to_string()))?;
        let udt = ctor()?;
        if udt.class_name() != class {
            return Err(LoadError::ClassMismatch {
                requested: class.to_string(),
                actual: udt.class_name().to_string(),
            });
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(%class, "loaded user-defined type");
        Ok(udt)
    }
}

impl fmt::Debug for UdtRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut classes: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        classes.sort_unstable();
        f.debug_struct("UdtRegistry")
            .field("classes", &classes)
            .finish()
    }
}
