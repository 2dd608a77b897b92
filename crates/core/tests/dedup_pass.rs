//! In-scope deduplication: one destroy cycle per unique key per pass.

mod common;

use std::sync::Arc;

use common::{Browser, EventLog, Outcome, StubDestructor, event_log, field_site, record_events};
use drydock_core::api::{InstanceHolder, Qualifier, ResourceKey, ResourceTypeId};
use drydock_core::{ContextStore, DestructorRegistry, TeardownManager};
use pretty_assertions::assert_eq;

fn browser_manager(log: &EventLog) -> (TeardownManager, Arc<ContextStore>) {
    let mut registry = DestructorRegistry::new();
    registry.register::<Browser>(StubDestructor::new("browser", Outcome::Succeed, log), 0);

    let store = Arc::new(ContextStore::new());
    let manager = TeardownManager::new(Arc::clone(&store), Arc::new(registry));
    record_events(&manager, log);
    (manager, store)
}

// ---------------------------------------------------------------------------
// 1. Same key declared at several sites
// ---------------------------------------------------------------------------

#[test]
fn two_fields_of_one_type_destroy_once() {
    let log = event_log();
    let (manager, store) = browser_manager(&log);
    store.insert(
        ResourceKey::of::<Browser>(),
        InstanceHolder::ready(Browser { session: "s-1" }),
    );

    let sites = [
        field_site::<Browser>("LoginTest", "browser"),
        field_site::<Browser>("LoginTest", "spare"),
    ];
    manager.destroy_class_scoped(&sites).unwrap();

    assert_eq!(
        common::entries(&log),
        vec![
            "before:Browser@default",
            "destroy:browser",
            "after:Browser@default",
        ]
    );
    assert!(store.is_empty());
}

#[test]
fn three_sites_still_destroy_once() {
    let log = event_log();
    let (manager, store) = browser_manager(&log);
    store.insert(
        ResourceKey::of::<Browser>(),
        InstanceHolder::ready(Browser { session: "s-2" }),
    );

    let sites = [
        field_site::<Browser>("LoginTest", "browser"),
        field_site::<Browser>("BaseTest", "inherited"),
        field_site::<Browser>("LoginTest", "spare"),
    ];
    manager.destroy_class_scoped(&sites).unwrap();

    assert_eq!(
        common::entries(&log)
            .iter()
            .filter(|entry| entry.starts_with("destroy:"))
            .count(),
        1
    );
}

// ---------------------------------------------------------------------------
// 2. Qualifiers keep keys distinct
// ---------------------------------------------------------------------------

#[test]
fn distinct_qualifiers_destroy_separately() {
    let log = event_log();
    let (manager, store) = browser_manager(&log);
    store.insert(
        ResourceKey::of::<Browser>(),
        InstanceHolder::ready(Browser { session: "primary" }),
    );
    store.insert(
        ResourceKey::new(ResourceTypeId::of::<Browser>(), Qualifier::named("spare")),
        InstanceHolder::ready(Browser { session: "spare" }),
    );

    let sites = [
        field_site::<Browser>("LoginTest", "browser"),
        field_site::<Browser>("LoginTest", "spare").qualified(Qualifier::named("spare")),
    ];
    manager.destroy_class_scoped(&sites).unwrap();

    assert_eq!(
        common::entries(&log),
        vec![
            "before:Browser@default",
            "destroy:browser",
            "after:Browser@default",
            "before:Browser@spare",
            "destroy:browser",
            "after:Browser@spare",
        ]
    );
    assert!(store.is_empty());
}

// ---------------------------------------------------------------------------
// 3. Deduplication does not outlive a pass
// ---------------------------------------------------------------------------

#[test]
fn a_later_pass_destroys_a_recreated_resource() {
    let log = event_log();
    let (manager, store) = browser_manager(&log);
    let key = ResourceKey::of::<Browser>();
    let sites = [field_site::<Browser>("LoginTest", "browser")];

    store.insert(key.clone(), InstanceHolder::ready(Browser { session: "s-3" }));
    manager.destroy_class_scoped(&sites).unwrap();
    assert!(!store.contains(&key));

    store.insert(key.clone(), InstanceHolder::ready(Browser { session: "s-4" }));
    manager.destroy_class_scoped(&sites).unwrap();
    assert!(!store.contains(&key));

    assert_eq!(
        common::entries(&log)
            .iter()
            .filter(|entry| entry.starts_with("destroy:"))
            .count(),
        2
    );
}
