//! In-memory control plane for testing and embedding.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use appctl_core::{
    application::ports::RemoteOperations,
    domain::{
        NOT_FOUND_MESSAGE, Organization, OrganizationRef, RemoteApplication, RemoteError,
        RemoteResult,
    },
};
use tracing::debug;
use uuid::Uuid;

/// Thread-safe in-memory control plane.
///
/// Behaves like the real API for the calls the reconciler makes, including
/// the exact error messages it depends on.
#[derive(Debug, Clone, Default)]
pub struct InMemoryControlPlane {
    inner: Arc<RwLock<ControlPlaneInner>>,
}

#[derive(Debug, Default)]
struct ControlPlaneInner {
    /// Organizations keyed by slug.
    organizations: HashMap<String, Organization>,
    default_organization: Option<String>,
    /// Applications keyed by name.
    applications: HashMap<String, RemoteApplication>,
    fail_next: Option<RemoteError>,
}

impl InMemoryControlPlane {
    /// Create a new empty control plane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an organization. The first one added becomes the default.
    pub fn with_organization(self, slug: impl Into<String>, name: impl Into<String>) -> Self {
        self.add_organization(slug, name);
        self
    }

    /// Add an organization and return its generated id.
    pub fn add_organization(&self, slug: impl Into<String>, name: impl Into<String>) -> String {
        let slug = slug.into();
        let organization = Organization {
            id: Uuid::new_v4().to_string(),
            slug: slug.clone(),
            name: name.into(),
        };
        let id = organization.id.clone();

        let mut inner = self.write();
        inner.default_organization.get_or_insert_with(|| slug.clone());
        inner.organizations.insert(slug, organization);
        id
    }

    /// Change the default organization. Unknown slugs clear the default.
    pub fn set_default_organization(&self, slug: &str) {
        let mut inner = self.write();
        inner.default_organization = inner
            .organizations
            .contains_key(slug)
            .then(|| slug.to_owned());
    }

    /// Look up an organization by slug.
    pub fn organization(&self, slug: &str) -> Option<Organization> {
        self.read().organizations.get(slug).cloned()
    }

    /// Insert or replace an application, bypassing the create path.
    pub fn insert_application(&self, app: RemoteApplication) {
        self.write().applications.insert(app.name.clone(), app);
    }

    /// Remove an application out of band.
    pub fn remove_application(&self, name: &str) -> Option<RemoteApplication> {
        self.write().applications.remove(name)
    }

    /// Get an application by name.
    pub fn application(&self, name: &str) -> Option<RemoteApplication> {
        self.read().applications.get(name).cloned()
    }

    /// Number of applications.
    pub fn len(&self) -> usize {
        self.read().applications.len()
    }

    /// Check if there are no applications.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make the next remote call fail with `error`, whatever it is.
    pub fn fail_next(&self, error: RemoteError) {
        self.write().fail_next = Some(error);
    }

    fn read(&self) -> RwLockReadGuard<'_, ControlPlaneInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ControlPlaneInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Take the write lock, failing first if a fault is armed.
    fn begin(&self, call: &str) -> RemoteResult<RwLockWriteGuard<'_, ControlPlaneInner>> {
        debug!(call, "In-memory control plane call");
        let mut inner = self.write();
        match inner.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(inner),
        }
    }
}

impl RemoteOperations for InMemoryControlPlane {
    fn resolve_default_organization(&self) -> RemoteResult<Organization> {
        let inner = self.begin("resolve_default_organization")?;
        inner
            .default_organization
            .as_ref()
            .and_then(|slug| inner.organizations.get(slug))
            .cloned()
            .ok_or_else(|| {
                RemoteError::single(
                    "Could not resolve personal organization",
                    "viewer.personalOrganization",
                )
            })
    }

    fn resolve_organization(&self, slug: &str) -> RemoteResult<String> {
        let inner = self.begin("resolve_organization")?;
        inner
            .organizations
            .get(slug)
            .map(|org| org.id.clone())
            .ok_or_else(|| RemoteError::single("Could not resolve organization", "organization"))
    }

    fn create_application(
        &self,
        name: &str,
        organization_id: &str,
    ) -> RemoteResult<RemoteApplication> {
        let mut inner = self.begin("create_application")?;

        let organization = inner
            .organizations
            .values()
            .find(|org| org.id == organization_id)
            .map(|org| OrganizationRef {
                id: org.id.clone(),
                slug: org.slug.clone(),
            })
            .ok_or_else(|| {
                RemoteError::single("Could not resolve organization", "createApp.organizationId")
            })?;

        if inner.applications.contains_key(name) {
            return Err(RemoteError::single(
                "Name has already been taken",
                "createApp.name",
            ));
        }

        let app = RemoteApplication {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            organization,
            app_url: format!("https://{name}.fly.dev"),
            hostname: format!("{name}.fly.dev"),
            shared_ip_address: String::new(),
        };
        inner.applications.insert(app.name.clone(), app.clone());
        Ok(app)
    }

    fn fetch_application(&self, name: &str) -> RemoteResult<RemoteApplication> {
        let inner = self.begin("fetch_application")?;
        inner
            .applications
            .get(name)
            .cloned()
            .ok_or_else(|| RemoteError::single(NOT_FOUND_MESSAGE, "app"))
    }

    fn delete_application(&self, name: &str) -> RemoteResult<()> {
        let mut inner = self.begin("delete_application")?;
        inner
            .applications
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RemoteError::single(NOT_FOUND_MESSAGE, "deleteApp"))
    }
}
