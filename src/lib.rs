//! # Roster - User Account Service Library
//!
//! Facade crate re-exporting the public APIs of the roster components.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! roster = { path = "../roster" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `RequestedUser`, `NewUser`, `User`, `UserId`, `Role`, events
//! - **Ports**: `UserStore`, `EventPublisher`
//! - **Application**: `UserService`, `UserServiceImpl`, decorators, `RequestContext`
//! - **Adapters**: `HashMapUserStore`, `PostgresUserStore`, `RedisEventPublisher`, settings
//! - **Service**: `RosterService` - The HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use roster_core::*;
}

pub use roster_core::{
    DomainEvent, NewUser, RequestedUser, Role, User, UserCreatedEvent, UserDeletedEvent, UserId,
    ValidationError, ValidationErrors,
};

// ============================================================================
// Ports
// ============================================================================

pub use roster_core::{EventPublisher, EventPublisherError, UserStore, UserStoreError};

// ============================================================================
// Application Layer
// ============================================================================

/// Use cases, the service trait and its decorators
pub mod application {
    pub use roster_application::*;
}

pub use roster_application::{
    Compensator, CredentialPolicy, ErrorKind, RequestContext, UserService, UserServiceError,
    UserServiceExt, UserServiceImpl,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Store implementations
    pub mod persistence {
        pub use roster_adapters::persistence::*;
    }

    /// Event publisher implementations
    pub mod events {
        pub use roster_adapters::events::*;
    }

    /// Credential hashing
    pub mod hashing {
        pub use roster_adapters::hashing::*;
    }

    /// Configuration
    pub mod config {
        pub use roster_adapters::config::*;
    }
}

pub use roster_adapters::{
    HashMapUserStore, InMemoryEventPublisher, PostgresUserStore, RedisEventPublisher,
    config::Settings,
};

// ============================================================================
// HTTP
// ============================================================================

/// Axum routes and problem documents
pub mod http {
    pub use roster_axum::*;
}

/// Main roster service
pub use roster_service::{
    BootstrapError, RosterService, configure_postgresql, configure_redis, shutdown_signal,
    user_service,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

/// Re-export the cancellation token used by `RequestContext`
pub use tokio_util::sync::CancellationToken;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn facade_exposes_a_working_service() {
        let service = user_service(
            HashMapUserStore::new(),
            None,
            CredentialPolicy::default(),
            Compensator::new(),
        );
        let ctx = RequestContext::new().with_cancellation(CancellationToken::new());

        let id = service
            .create(
                &ctx,
                RequestedUser::new("jane@example.com", "Jane", None),
            )
            .await
            .unwrap();

        assert_eq!(service.find_by_id(&ctx, &id).await.unwrap().name(), "Jane");
    }
}
