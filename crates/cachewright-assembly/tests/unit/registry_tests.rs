//! Tests for the provider registry and sole-provider resolution
//!
//! Resolution is exercised against locally constructed registries holding
//! zero, one, or many providers; the link-time path is exercised through a
//! real `linkme` submission from this test binary.

use std::sync::Arc;

use cachewright_assembly::builder::ManagerBuilder;
use cachewright_assembly::registry::{CACHING_PROVIDERS, ProviderEntry, ProviderRegistry};
use cachewright_assembly::resolver::{ProviderResolution, resolve_sole_provider};
use cachewright_domain::error::Error;
use cachewright_domain::ports::CachingProvider;

use crate::support::{FailingProvider, RecordingProvider, registry_with};

// ============================================================================
// Resolution outcomes
// ============================================================================

#[test]
fn empty_registry_resolves_to_none() {
    let registry = ProviderRegistry::new();

    assert!(registry.is_empty());
    assert!(matches!(
        resolve_sole_provider(&registry),
        ProviderResolution::None
    ));
}

#[test]
fn single_provider_resolves_to_one() {
    let registry = registry_with(vec![Arc::new(RecordingProvider::new("heap"))]);

    match resolve_sole_provider(&registry) {
        ProviderResolution::One(provider) => {
            assert_eq!(provider.provider_name(), "heap");
        }
        other => panic!("expected One, got {other:?}"),
    }
}

#[test]
fn two_providers_resolve_to_many_with_every_name() {
    let registry = registry_with(vec![
        Arc::new(RecordingProvider::new("heap")),
        Arc::new(RecordingProvider::new("disk")),
    ]);

    match resolve_sole_provider(&registry) {
        ProviderResolution::Many(names) => {
            assert_eq!(
                names,
                vec!["heap".to_string(), "disk".to_string()],
                "ambiguity diagnostic should list every registered provider"
            );
        }
        other => panic!("expected Many, got {other:?}"),
    }
}

#[test]
fn resolution_is_recomputed_on_every_call() {
    let registry = ProviderRegistry::new();

    assert!(matches!(
        resolve_sole_provider(&registry),
        ProviderResolution::None
    ));

    registry.register(Arc::new(RecordingProvider::new("heap")));
    assert!(matches!(
        resolve_sole_provider(&registry),
        ProviderResolution::One(_)
    ));

    registry.register(Arc::new(FailingProvider));
    assert!(
        matches!(resolve_sole_provider(&registry), ProviderResolution::Many(_)),
        "a provider registered after an earlier resolution must be seen"
    );
}

// ============================================================================
// Error mapping
// ============================================================================

#[test]
fn none_maps_to_no_provider_available() {
    let result = ProviderResolution::None.into_result();

    assert!(matches!(result, Err(Error::NoProviderAvailable)));
}

#[test]
fn many_maps_to_ambiguous_provider() {
    let resolution = ProviderResolution::Many(vec!["heap".to_string(), "disk".to_string()]);

    match resolution.into_result() {
        Err(Error::AmbiguousProvider { providers }) => {
            assert_eq!(providers, vec!["heap".to_string(), "disk".to_string()]);
        }
        other => panic!("expected AmbiguousProvider, got {other:?}"),
    }
}

// ============================================================================
// Registry table
// ============================================================================

#[test]
fn provider_names_follow_registration_order() {
    let registry = registry_with(vec![
        Arc::new(RecordingProvider::new("heap")),
        Arc::new(RecordingProvider::new("disk")),
    ]);

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.provider_names(),
        vec!["heap".to_string(), "disk".to_string()]
    );
}

// ============================================================================
// Link-time registration
// ============================================================================

fn linked_provider_factory() -> Arc<dyn CachingProvider> {
    Arc::new(RecordingProvider::new("linked"))
}

#[linkme::distributed_slice(CACHING_PROVIDERS)]
static LINKED_PROVIDER: ProviderEntry = ProviderEntry {
    name: "linked",
    description: "Link-time registered test provider",
    factory: linked_provider_factory,
};

#[test]
fn global_registry_is_seeded_from_the_distributed_slice() {
    let registry = ProviderRegistry::global();

    assert_eq!(
        registry.provider_names(),
        vec!["linked".to_string()],
        "the slice submission above is the only provider in this binary"
    );

    // The default builder resolves against the global registry.
    let manager = ManagerBuilder::new().build();
    assert!(
        manager.is_ok(),
        "sole link-time provider should assemble: {:?}",
        manager.err()
    );
}
