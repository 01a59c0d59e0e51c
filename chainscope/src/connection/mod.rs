//! Connection-provider pooling collaborators.

mod pooling;

pub use pooling::{
    ConnectionHandlingStrategy, ConnectionProvider, ExhaustedAction, PooledProviderWrapper,
    PoolingProfile,
};
