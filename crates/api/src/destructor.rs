//! The destructor contract.

use thiserror::Error;

use crate::holder::ResourceInstance;

/// Failure taxonomy for a destroy attempt.
#[derive(Error, Debug)]
pub enum DestroyError {
    /// The held value was never actually instantiated; there is nothing to
    /// release. Expected and fully recoverable — the engine logs it and
    /// carries on with the rest of the site.
    #[error("instance was never instantiated, nothing to release")]
    NotInstantiated,

    /// Any other failure while releasing the instance. The engine does not
    /// contain this kind; it aborts the remaining sites of the pass.
    #[error("failed to release instance: {reason}")]
    Failed {
        /// Human-readable failure description.
        reason: String,
        /// The underlying error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DestroyError {
    /// An unclassified failure with a plain message.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
            source: None,
        }
    }

    /// An unclassified failure wrapping an underlying error.
    pub fn failed_with(
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Failed {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Releases instances of the resource types it was registered for.
///
/// Implementations are supplied by the host (one or more per resource type);
/// the registry disambiguates by declared type specificity, then precedence.
pub trait Destructor: Send + Sync {
    /// Tear down one realized instance.
    ///
    /// # Errors
    ///
    /// [`DestroyError::NotInstantiated`] when the instance turns out never to
    /// have been brought up; any other problem as [`DestroyError::Failed`].
    fn destroy(&self, instance: ResourceInstance) -> Result<(), DestroyError>;
}
