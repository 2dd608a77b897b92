//! Resource type identity and explicit supertype chains.

use std::any::{Any, TypeId};
use std::fmt;

/// Identity of a resource type: the Rust [`TypeId`] plus a readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceTypeId {
    id: TypeId,
    name: &'static str,
}

impl ResourceTypeId {
    /// Identity of the type `T`.
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: short_type_name::<T>(),
        }
    }

    /// Unqualified name of the type, for logs and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ResourceTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Last path segment of `std::any::type_name`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Descriptor of a declared resource type: its identity plus an explicit
/// supertype chain, nearest supertype first.
///
/// Rust has no runtime subtype relation, so whatever discovers declaration
/// sites also states which broader types a declaration is compatible with.
/// A destructor registered for any type in the chain can take the resource
/// down; the nearer the chain entry, the more specific the match.
///
/// ```
/// use drydock_api::ResourceType;
///
/// struct WebDriver;
/// struct ChromeDriver;
///
/// let ty = ResourceType::of::<ChromeDriver>().extending::<WebDriver>();
/// assert_eq!(ty.name(), "ChromeDriver");
/// assert_eq!(ty.supertypes().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceType {
    id: ResourceTypeId,
    supertypes: Vec<ResourceTypeId>,
}

impl ResourceType {
    /// Descriptor for `T` with an empty supertype chain.
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            id: ResourceTypeId::of::<T>(),
            supertypes: Vec::new(),
        }
    }

    /// Append the next broader type to the supertype chain.
    #[must_use]
    pub fn extending<T: Any>(mut self) -> Self {
        self.supertypes.push(ResourceTypeId::of::<T>());
        self
    }

    /// Identity of the declared type itself.
    #[must_use]
    pub fn id(&self) -> ResourceTypeId {
        self.id
    }

    /// Unqualified name of the declared type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// The supertype chain, nearest supertype first.
    #[must_use]
    pub fn supertypes(&self) -> &[ResourceTypeId] {
        &self.supertypes
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
