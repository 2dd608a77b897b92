//! Declaration sites: the places in host test code where a resource is
//! declared.
//!
//! Site discovery is the host runner's job (however it inspects its test
//! classes); the engine only consumes the resulting list.

use std::fmt;

use crate::key::{Qualifier, ResourceKey};
use crate::typing::ResourceType;

/// Where in the host test code a declaration lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteOrigin {
    /// A field of a test class; torn down at end-of-class.
    Field {
        /// Name of the declaring class.
        class: String,
        /// Name of the field.
        field: String,
    },
    /// A parameter of a test method; torn down at end-of-method.
    Parameter {
        /// Name of the declaring method.
        method: String,
        /// Zero-based position of the parameter.
        index: usize,
    },
}

impl fmt::Display for SiteOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { class, field } => write!(f, "{class}.{field}"),
            Self::Parameter { method, index } => write!(f, "{method}(#{index})"),
        }
    }
}

/// One point where a resource is declared.
///
/// Several sites may resolve to the same [`ResourceKey`] within one scope
/// (repeated fields, inherited fields); the engine destroys the underlying
/// resource once per key regardless.
#[derive(Debug, Clone)]
pub struct DeclarationSite {
    origin: SiteOrigin,
    resource_type: ResourceType,
    qualifier: Qualifier,
}

impl DeclarationSite {
    /// A field-based declaration (class-scoped lifecycle).
    ///
    /// # Panics
    /// Panics if `class` or `field` is empty.
    pub fn field(
        resource_type: ResourceType,
        class: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        let class = class.into();
        let field = field.into();
        assert!(!class.is_empty(), "class name must not be empty");
        assert!(!field.is_empty(), "field name must not be empty");
        Self {
            origin: SiteOrigin::Field { class, field },
            resource_type,
            qualifier: Qualifier::default(),
        }
    }

    /// A parameter-based declaration (method-scoped lifecycle).
    ///
    /// # Panics
    /// Panics if `method` is empty.
    pub fn parameter(
        resource_type: ResourceType,
        method: impl Into<String>,
        index: usize,
    ) -> Self {
        let method = method.into();
        assert!(!method.is_empty(), "method name must not be empty");
        Self {
            origin: SiteOrigin::Parameter { method, index },
            resource_type,
            qualifier: Qualifier::default(),
        }
    }

    /// Attach a qualifier to this declaration.
    #[must_use]
    pub fn qualified(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = qualifier;
        self
    }

    /// Where this declaration lives.
    #[must_use]
    pub fn origin(&self) -> &SiteOrigin {
        &self.origin
    }

    /// The declared resource type.
    #[must_use]
    pub fn resource_type(&self) -> &ResourceType {
        &self.resource_type
    }

    /// The declared qualifier.
    #[must_use]
    pub fn qualifier(&self) -> &Qualifier {
        &self.qualifier
    }

    /// Key of the logical resource this site refers to.
    #[must_use]
    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(self.resource_type.id(), self.qualifier.clone())
    }
}
