//! Pooling strategy resolution for connection providers.
//!
//! [`PooledProviderWrapper`] decorates a [`ConnectionProvider`] with a
//! caller-supplied [`PoolingProfile`]: when the delegate asks for a pooled
//! handling strategy, the override replaces the delegate's default profile.
//! Every other strategy request passes through unchanged.

use serde::{Deserialize, Serialize};

/// What a pool does when all connections are in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustedAction {
    /// Grow the pool beyond its configured maximum.
    #[default]
    Grow,
    /// Block until a connection is released or the wait expires.
    Wait,
    /// Fail the acquisition immediately.
    Fail,
}

/// Pool sizing and eviction policy for a pooled connection provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolingProfile {
    /// Maximum number of connections checked out at once.
    pub max_active: u32,
    /// Maximum number of idle connections kept in the pool.
    pub max_idle: u32,
    /// How long an acquisition waits when the pool is exhausted, in
    /// milliseconds. Only meaningful with [`ExhaustedAction::Wait`].
    pub max_wait_millis: u64,
    /// Behavior when the pool is exhausted.
    pub exhausted_action: ExhaustedAction,
    /// Minimum idle time before a connection is eligible for eviction, in
    /// milliseconds.
    pub min_eviction_millis: u64,
}

impl Default for PoolingProfile {
    fn default() -> Self {
        Self {
            max_active: 5,
            max_idle: 5,
            max_wait_millis: 4000,
            exhausted_action: ExhaustedAction::Grow,
            min_eviction_millis: 60_000,
        }
    }
}

/// How connections handed out by a provider are managed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionHandlingStrategy {
    /// No management; a fresh connection per request.
    None,
    /// One connection cached and reused.
    Cached,
    /// Pooling is supported but optional, with the given profile.
    SupportsPooling(PoolingProfile),
    /// Pooling is mandatory, with the given profile.
    RequiresPooling(PoolingProfile),
}

/// A provider of connections to some external system.
///
/// The only concern modeled here is how the provider wants its connections
/// handled; creation and teardown belong to the surrounding engine.
pub trait ConnectionProvider {
    /// Returns the provider's default handling strategy, including its
    /// default pooling profile when pooling applies.
    fn handling_strategy(&self) -> ConnectionHandlingStrategy;
}

/// Decorates a [`ConnectionProvider`] with an optional user-configured
/// [`PoolingProfile`].
///
/// When no override is supplied, the delegate's behavior applies untouched.
#[derive(Debug)]
pub struct PooledProviderWrapper<P> {
    delegate: P,
    pooling_profile: Option<PoolingProfile>,
}

impl<P> PooledProviderWrapper<P> {
    /// Wraps `delegate`, optionally overriding its default pooling profile.
    #[must_use]
    pub fn new(delegate: P, pooling_profile: Option<PoolingProfile>) -> Self {
        Self {
            delegate,
            pooling_profile,
        }
    }

    /// Returns the wrapped provider.
    #[must_use]
    pub fn delegate(&self) -> &P {
        &self.delegate
    }

    fn resolve(&self, default_profile: PoolingProfile) -> PoolingProfile {
        self.pooling_profile
            .clone()
            .unwrap_or(default_profile)
    }
}

impl<P: ConnectionProvider> ConnectionProvider for PooledProviderWrapper<P> {
    fn handling_strategy(&self) -> ConnectionHandlingStrategy {
        match self.delegate.handling_strategy() {
            ConnectionHandlingStrategy::SupportsPooling(default_profile) => {
                ConnectionHandlingStrategy::SupportsPooling(self.resolve(default_profile))
            }
            ConnectionHandlingStrategy::RequiresPooling(default_profile) => {
                ConnectionHandlingStrategy::RequiresPooling(self.resolve(default_profile))
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct StubProvider {
        strategy: ConnectionHandlingStrategy,
    }

    impl ConnectionProvider for StubProvider {
        fn handling_strategy(&self) -> ConnectionHandlingStrategy {
            self.strategy.clone()
        }
    }

    fn override_profile() -> PoolingProfile {
        PoolingProfile {
            max_active: 20,
            max_idle: 10,
            max_wait_millis: 1000,
            exhausted_action: ExhaustedAction::Wait,
            min_eviction_millis: 30_000,
        }
    }

    #[test]
    fn test_override_replaces_default_for_pooled_strategies() {
        let provider = StubProvider {
            strategy: ConnectionHandlingStrategy::RequiresPooling(PoolingProfile::default()),
        };
        let wrapper = PooledProviderWrapper::new(provider, Some(override_profile()));

        assert_eq!(
            wrapper.handling_strategy(),
            ConnectionHandlingStrategy::RequiresPooling(override_profile())
        );
    }

    #[test]
    fn test_supports_pooling_also_resolved() {
        let provider = StubProvider {
            strategy: ConnectionHandlingStrategy::SupportsPooling(PoolingProfile::default()),
        };
        let wrapper = PooledProviderWrapper::new(provider, Some(override_profile()));

        assert_eq!(
            wrapper.handling_strategy(),
            ConnectionHandlingStrategy::SupportsPooling(override_profile())
        );
    }

    #[test]
    fn test_no_override_keeps_delegate_default() {
        let provider = StubProvider {
            strategy: ConnectionHandlingStrategy::RequiresPooling(PoolingProfile::default()),
        };
        let wrapper = PooledProviderWrapper::new(provider, None);

        assert_eq!(
            wrapper.handling_strategy(),
            ConnectionHandlingStrategy::RequiresPooling(PoolingProfile::default())
        );
    }

    #[test]
    fn test_non_pooled_strategies_pass_through() {
        for strategy in [
            ConnectionHandlingStrategy::None,
            ConnectionHandlingStrategy::Cached,
        ] {
            let provider = StubProvider {
                strategy: strategy.clone(),
            };
            let wrapper = PooledProviderWrapper::new(provider, Some(override_profile()));
            assert_eq!(wrapper.handling_strategy(), strategy);
        }
    }
}
