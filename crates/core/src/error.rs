//! Error types for the teardown engine.

use drydock_api::{DestroyError, Qualifier};
use thiserror::Error;

/// Result type for teardown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a teardown pass.
#[derive(Error, Debug)]
pub enum Error {
    /// No registered destructor is compatible with a requested resource type.
    ///
    /// A configuration error, fatal to the pass: individual test teardown
    /// cannot route around a misconfigured registry.
    #[error("no destructor registered for resource type '{type_name}'")]
    NoDestructor {
        /// Name of the requested resource type.
        type_name: &'static str,
    },

    /// A destructor failed for a reason other than "never instantiated".
    ///
    /// Propagates out of the pass. The failing key keeps its store entry and
    /// the sites after it stay un-destroyed until the run ends.
    #[error("destruction of '{type_name}' @{qualifier} failed")]
    Destruction {
        /// Name of the resource type being destroyed.
        type_name: &'static str,
        /// Qualifier of the resource being destroyed.
        qualifier: Qualifier,
        /// The destructor's failure.
        #[source]
        source: DestroyError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_destructor_names_the_type() {
        let err = Error::NoDestructor {
            type_name: "ChromeDriver",
        };
        assert_eq!(
            err.to_string(),
            "no destructor registered for resource type 'ChromeDriver'"
        );
    }

    #[test]
    fn destruction_keeps_the_source() {
        let err = Error::Destruction {
            type_name: "Browser",
            qualifier: Qualifier::default(),
            source: DestroyError::failed("session already gone"),
        };
        assert_eq!(err.to_string(), "destruction of 'Browser' @default failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
