//! Destructor lookup with type specificity and precedence.

use std::any::Any;
use std::cmp::Reverse;
use std::fmt;
use std::sync::Arc;

use drydock_api::{Destructor, ResourceType, ResourceTypeId};

use crate::error::{Error, Result};

/// One registered destructor: the type it is declared for, its precedence,
/// and the destructor itself.
pub struct DestructorRegistration {
    declared: ResourceTypeId,
    precedence: i32,
    destructor: Arc<dyn Destructor>,
}

impl DestructorRegistration {
    /// The declared type this registration handles.
    #[must_use]
    pub fn declared(&self) -> ResourceTypeId {
        self.declared
    }

    /// Tie-breaking precedence among equally specific registrations.
    #[must_use]
    pub fn precedence(&self) -> i32 {
        self.precedence
    }

    /// The registered destructor.
    #[must_use]
    pub fn destructor(&self) -> &dyn Destructor {
        self.destructor.as_ref()
    }

    /// Match specificity against `requested`: 0 for an exact type match,
    /// `1 + n` for the n-th entry of the requested type's supertype chain,
    /// `None` when incompatible.
    fn specificity(&self, requested: &ResourceType) -> Option<usize> {
        if self.declared == requested.id() {
            return Some(0);
        }
        requested
            .supertypes()
            .iter()
            .position(|super_ty| *super_ty == self.declared)
            .map(|pos| pos + 1)
    }
}

impl fmt::Debug for DestructorRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DestructorRegistration")
            .field("declared", &self.declared.name())
            .field("precedence", &self.precedence)
            .finish()
    }
}

/// Registry of destructor registrations.
///
/// Populated once at process start, then published read-only (typically
/// behind an `Arc`). Resolution never mutates, so concurrent readers need
/// nothing beyond safe publication.
#[derive(Default)]
pub struct DestructorRegistry {
    registrations: Vec<DestructorRegistration>,
}

impl DestructorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a destructor declared for the type `T` with the given
    /// precedence.
    pub fn register<T: Any>(&mut self, destructor: Arc<dyn Destructor>, precedence: i32) -> &mut Self {
        self.registrations.push(DestructorRegistration {
            declared: ResourceTypeId::of::<T>(),
            precedence,
            destructor,
        });
        self
    }

    /// The registration that handles `requested`.
    ///
    /// Among compatible registrations (declared type equal to the requested
    /// type, or present in its supertype chain) the most specific declared
    /// type wins; equally specific ones are tie-broken by numerically
    /// highest precedence. An explicit two-key ordering over a small list.
    ///
    /// # Errors
    ///
    /// [`Error::NoDestructor`] when nothing compatible is registered. That is
    /// a configuration error, not a per-test condition.
    pub fn resolve(&self, requested: &ResourceType) -> Result<&DestructorRegistration> {
        let chosen = self
            .registrations
            .iter()
            .filter_map(|reg| reg.specificity(requested).map(|s| (s, reg)))
            .min_by_key(|(specificity, reg)| (*specificity, Reverse(reg.precedence)))
            .map(|(_, reg)| reg);

        match chosen {
            Some(reg) => {
                tracing::debug!(
                    requested = requested.name(),
                    declared = reg.declared.name(),
                    precedence = reg.precedence,
                    "resolved destructor"
                );
                Ok(reg)
            }
            None => Err(Error::NoDestructor {
                type_name: requested.name(),
            }),
        }
    }

    /// Number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether the registry holds no registrations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl fmt::Debug for DestructorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DestructorRegistry")
            .field("registrations", &self.registrations)
            .finish()
    }
}
