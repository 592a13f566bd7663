//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `appctl-adapters` crate provides implementations.

use crate::domain::{Organization, RemoteApplication, RemoteResult};

/// Port for the control-plane API.
///
/// Implemented by:
/// - `appctl_adapters::remote::GraphqlClient` (production)
/// - `appctl_adapters::remote::InMemoryControlPlane` (testing, embedding)
///
/// ## Design Notes
///
/// - Every call is synchronous and performed at most once; retry policy, if
///   any, belongs to the implementation
/// - Failures are typed: a structured error list or a transport error. The
///   core never inspects error values at runtime beyond that split
pub trait RemoteOperations: Send + Sync {
    /// Resolve the caller's default organization.
    fn resolve_default_organization(&self) -> RemoteResult<Organization>;

    /// Resolve an organization slug to its identifier.
    fn resolve_organization(&self, slug: &str) -> RemoteResult<String>;

    /// Create an application in the given organization.
    fn create_application(
        &self,
        name: &str,
        organization_id: &str,
    ) -> RemoteResult<RemoteApplication>;

    /// Fetch an application by name.
    fn fetch_application(&self, name: &str) -> RemoteResult<RemoteApplication>;

    /// Delete an application by name.
    fn delete_application(&self, name: &str) -> RemoteResult<()>;
}

#[cfg(test)]
mockall::mock! {
    pub RemoteOperations {}

    impl RemoteOperations for RemoteOperations {
        fn resolve_default_organization(&self) -> RemoteResult<Organization>;
        fn resolve_organization(&self, slug: &str) -> RemoteResult<String>;
        fn create_application(
            &self,
            name: &str,
            organization_id: &str,
        ) -> RemoteResult<RemoteApplication>;
        fn fetch_application(&self, name: &str) -> RemoteResult<RemoteApplication>;
        fn delete_application(&self, name: &str) -> RemoteResult<()>;
    }
}
