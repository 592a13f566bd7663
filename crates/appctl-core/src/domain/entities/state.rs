//! Persisted, authoritative state of an application.
//!
//! A `ResourceState` only ever comes from the control plane. The conversions
//! below are the state mapper: a field-for-field copy with no validation.

use serde::{Deserialize, Serialize};

use crate::domain::entities::remote::RemoteApplication;

/// Last-known-good snapshot of an application.
///
/// Either fully present or absent; there is no partially populated state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceState {
    pub id: String,
    pub name: String,
    pub organization_slug: String,
    pub organization_id: String,
    pub application_url: String,
    pub hostname: String,
    pub shared_ip_address: String,
}

impl From<RemoteApplication> for ResourceState {
    fn from(app: RemoteApplication) -> Self {
        Self {
            id: app.id,
            name: app.name,
            organization_slug: app.organization.slug,
            organization_id: app.organization.id,
            application_url: app.app_url,
            hostname: app.hostname,
            shared_ip_address: app.shared_ip_address,
        }
    }
}

impl From<&RemoteApplication> for ResourceState {
    fn from(app: &RemoteApplication) -> Self {
        Self::from(app.clone())
    }
}
