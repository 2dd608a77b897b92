//! Qualified resource keys.

use std::any::Any;
use std::fmt;

use crate::typing::ResourceTypeId;

/// Secondary discriminator on a resource type, allowing several independent
/// instances of the same type to coexist within one scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Qualifier {
    /// The marker a declaration gets when it names no qualifier.
    #[default]
    Unqualified,
    /// A named qualifier.
    Named(String),
}

impl Qualifier {
    /// Create a named qualifier.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "qualifier name must not be empty");
        Self::Named(name)
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unqualified => write!(f, "default"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Key of one logical resource: type identity plus qualifier.
///
/// Two declaration sites with equal keys refer to the same logical resource,
/// however many times and wherever it was declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    type_id: ResourceTypeId,
    qualifier: Qualifier,
}

impl ResourceKey {
    /// Key from a type identity and qualifier.
    #[must_use]
    pub fn new(type_id: ResourceTypeId, qualifier: Qualifier) -> Self {
        Self { type_id, qualifier }
    }

    /// Key for the unqualified declaration of `T`.
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self::new(ResourceTypeId::of::<T>(), Qualifier::default())
    }

    /// Type identity half of the key.
    #[must_use]
    pub fn type_id(&self) -> ResourceTypeId {
        self.type_id
    }

    /// Qualifier half of the key.
    #[must_use]
    pub fn qualifier(&self) -> &Qualifier {
        &self.qualifier
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @{}", self.type_id, self.qualifier)
    }
}
