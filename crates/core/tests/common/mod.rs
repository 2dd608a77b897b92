//! Shared fixtures: stub driver types, a scripted destructor, and an
//! order-preserving log of destroys and events.

#![allow(dead_code)]

use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;

use drydock_core::TeardownManager;
use drydock_core::api::{
    DeclarationSite, DestroyError, Destructor, ResourceInstance, ResourceType, TeardownEvent,
};

/// Stub browser handle with an identifiable session.
pub struct Browser {
    pub session: &'static str,
}

pub struct WebDriver;
pub struct ChromeDriver;
pub struct MessageQueue;

/// Scripted outcome for [`StubDestructor`].
#[derive(Clone, Copy)]
pub enum Outcome {
    Succeed,
    NotInstantiated,
    Fail,
}

/// Shared, order-preserving log of everything that happened in a pass.
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &EventLog) -> Vec<String> {
    log.lock().clone()
}

/// Destructor that records each invocation as `destroy:<label>` and then
/// follows its scripted outcome.
pub struct StubDestructor {
    label: &'static str,
    outcome: Outcome,
    log: EventLog,
}

impl StubDestructor {
    pub fn new(label: &'static str, outcome: Outcome, log: &EventLog) -> Arc<dyn Destructor> {
        Arc::new(Self {
            label,
            outcome,
            log: Arc::clone(log),
        })
    }
}

impl Destructor for StubDestructor {
    fn destroy(&self, _instance: ResourceInstance) -> Result<(), DestroyError> {
        self.log.lock().push(format!("destroy:{}", self.label));
        match self.outcome {
            Outcome::Succeed => Ok(()),
            Outcome::NotInstantiated => Err(DestroyError::NotInstantiated),
            Outcome::Fail => Err(DestroyError::failed("scripted failure")),
        }
    }
}

/// Subscribe an observer appending `before:<Type>@<qualifier>` and
/// `after:<Type>@<qualifier>` entries to the log.
pub fn record_events(manager: &TeardownManager, log: &EventLog) {
    let log = Arc::clone(log);
    manager.notifier().subscribe_fn(move |event| {
        let entry = match event {
            TeardownEvent::BeforeDestroy {
                resource_type,
                qualifier,
                ..
            } => format!("before:{resource_type}@{qualifier}"),
            TeardownEvent::AfterDestroy {
                resource_type,
                qualifier,
            } => format!("after:{resource_type}@{qualifier}"),
        };
        log.lock().push(entry);
    });
}

/// Field site for the unqualified declaration of `T` in a test class.
pub fn field_site<T: Any>(class: &str, field: &str) -> DeclarationSite {
    DeclarationSite::field(ResourceType::of::<T>(), class, field)
}

/// Parameter site for the unqualified declaration of `T` in a test method.
pub fn parameter_site<T: Any>(method: &str, index: usize) -> DeclarationSite {
    DeclarationSite::parameter(ResourceType::of::<T>(), method, index)
}
