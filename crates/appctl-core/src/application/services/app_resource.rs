//! App Resource Service - the lifecycle reconciler.
//!
//! This service reconciles a desired [`ResourceConfig`] with the application
//! the control plane actually holds. It exposes five entry points:
//! 1. `create` - resolve the organization, create the app, persist what the
//!    remote side returned
//! 2. `read` - refresh persisted state wholesale, detecting removal
//! 3. `update` - validate that immutable fields are unchanged
//! 4. `delete` - delete remotely, always stop tracking locally
//! 5. `import` - adopt an existing app by name
//!
//! Entry points are stateless. Every input arrives as an argument and every
//! effect on persisted state is described by the returned
//! [`OperationOutcome`]; nothing is rolled back after a partial failure.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::RemoteOperations,
        services::outcome::{FailureKind, OperationOutcome, StateDirective},
    },
    domain::{
        Diagnostic, Diagnostics, DomainValidator as validator, FieldValue, Operation,
        ResourceConfig, ResourceState, Sentinel, classifier,
    },
};

const DEFAULT_ORG_FAILED: &str = "Could not detect default organization";
const ORG_FAILED: &str = "Could not resolve organization";
const CREATE_FAILED: &str = "Create app failed";
const READ_FAILED: &str = "Read: query failed";
const DELETE_FAILED: &str = "Delete app failed";
const MISSING_NAME: &str = "Missing application name";
const IMPORT_MISSING: &str = "Cannot import non-existent remote object";

/// Lifecycle reconciler for applications.
pub struct AppResourceService {
    remote: Box<dyn RemoteOperations>,
}

impl AppResourceService {
    /// Create a new service around a remote-operations adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use appctl_core::application::{AppResourceService, RemoteOperations};
    ///
    /// # fn demo(remote: Box<dyn RemoteOperations>) {
    /// let service = AppResourceService::new(remote);
    /// # let _ = service;
    /// # }
    /// ```
    pub fn new(remote: Box<dyn RemoteOperations>) -> Self {
        Self { remote }
    }

    /// Create an application from desired configuration.
    ///
    /// The returned state is built from the control plane's response only,
    /// even for fields the caller supplied.
    #[instrument(skip_all, fields(app = %config.name, org = %config.organization))]
    pub fn create(&self, config: &ResourceConfig) -> OperationOutcome {
        let name = match config.required_name() {
            Ok(name) => name,
            Err(e) => {
                warn!(error = %e, "Create rejected");
                return OperationOutcome::failed(
                    Operation::Create,
                    FailureKind::Validation,
                    Diagnostic::error(MISSING_NAME, e.detail()),
                );
            }
        };

        // 1. Resolve the organization. Nothing has been mutated yet, so a
        //    failure here is safe to retry unchanged.
        let organization_id = match self.resolve_organization_id(&config.organization) {
            Ok(id) => id,
            Err(diagnostic) => {
                warn!(summary = %diagnostic.summary, "Organization resolution failed");
                return OperationOutcome::failed(
                    Operation::Create,
                    FailureKind::Resolution,
                    diagnostic,
                );
            }
        };

        // 2. Create remotely.
        debug!(organization_id = %organization_id, "Creating application");
        match self.remote.create_application(name, &organization_id) {
            Ok(app) => {
                let state = ResourceState::from(app);
                info!(id = %state.id, "Application created");
                OperationOutcome::set(Operation::Create, state)
            }
            Err(e) => {
                warn!(error = %e, "Create failed");
                OperationOutcome::failed(
                    Operation::Create,
                    FailureKind::Remote,
                    classifier::summarize(&e, CREATE_FAILED),
                )
            }
        }
    }

    /// Refresh persisted state from the control plane.
    ///
    /// A `Remove` directive with no error diagnostics means the application no
    /// longer exists remotely.
    #[instrument(skip_all, fields(app = %state.name))]
    pub fn read(&self, state: &ResourceState) -> OperationOutcome {
        self.refresh(Operation::Read, &state.name)
    }

    /// Validate a plan against persisted state.
    ///
    /// Name and organization are immutable; every violation is reported.
    /// Without violations the prior state is returned unchanged.
    pub fn update(&self, plan: &ResourceConfig, prior: &ResourceState) -> OperationOutcome {
        Self::check_update(plan, prior)
    }

    /// [`Self::update`] without a service. Update makes no remote calls, so
    /// callers can run it before (or without) building a client.
    #[instrument(skip_all, fields(app = %prior.name))]
    pub fn check_update(plan: &ResourceConfig, prior: &ResourceState) -> OperationOutcome {
        debug!(existing = ?prior, new = ?plan, "Comparing plan with state");

        let violations = validator::validate_update(plan, prior);
        if !violations.is_empty() {
            warn!(count = violations.len(), "Update rejected");
            return OperationOutcome::failed(
                Operation::Update,
                FailureKind::Validation,
                violations
                    .iter()
                    .map(Diagnostic::from)
                    .collect::<Diagnostics>(),
            );
        }

        // Mutable attributes would be written here. None are modelled yet, so
        // a valid plan never reaches the control plane.
        info!("Update validated; no remote changes required");
        OperationOutcome::set(Operation::Update, prior.clone())
    }

    /// Delete the application.
    ///
    /// The directive is always `Remove`: local tracking ends even when the
    /// remote call fails, and the failure is reported alongside.
    #[instrument(skip_all, fields(app = %state.name))]
    pub fn delete(&self, state: &ResourceState) -> OperationOutcome {
        let outcome = OperationOutcome::remove(Operation::Delete);

        match self.remote.delete_application(&state.name) {
            Ok(()) => {
                info!("Application deleted");
                outcome
            }
            Err(e) => {
                warn!(error = %e, "Delete failed; dropping from tracking anyway");
                let classification = classifier::classify(&e, Sentinel::None, DELETE_FAILED);
                outcome.with_diagnostics(classification.diagnostics, FailureKind::Remote)
            }
        }
    }

    /// Adopt an existing application by name.
    #[instrument(skip_all, fields(app = %identifier))]
    pub fn import(&self, identifier: &str) -> OperationOutcome {
        if identifier.trim().is_empty() {
            return OperationOutcome::failed(
                Operation::Import,
                FailureKind::Validation,
                Diagnostic::error(MISSING_NAME, "An application name is required to import"),
            );
        }

        let outcome = self.refresh(Operation::Import, identifier);
        if outcome.directive != StateDirective::Remove {
            return outcome;
        }

        warn!("Nothing to import");
        outcome.with_directive(StateDirective::Keep).with_error(
            Diagnostic::error(
                IMPORT_MISSING,
                format!("No application named '{identifier}' exists"),
            ),
            FailureKind::Resolution,
        )
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Resolve the organization field to an identifier.
    ///
    /// `Unknown` falls back to the caller's default organization; any other
    /// state is resolved as an explicit slug (`Null` as the empty slug).
    fn resolve_organization_id(
        &self,
        organization: &FieldValue<String>,
    ) -> Result<String, Diagnostic> {
        match organization {
            FieldValue::Unknown => {
                let org = self
                    .remote
                    .resolve_default_organization()
                    .map_err(|e| classifier::summarize(&e, DEFAULT_ORG_FAILED))?;
                debug!(id = %org.id, name = %org.name, "Using default organization");
                Ok(org.id)
            }
            FieldValue::Value(slug) => self.resolve_slug(slug),
            FieldValue::Null => self.resolve_slug(""),
        }
    }

    fn resolve_slug(&self, slug: &str) -> Result<String, Diagnostic> {
        let id = self
            .remote
            .resolve_organization(slug)
            .map_err(|e| classifier::summarize(&e, ORG_FAILED))?;
        debug!(slug, id = %id, "Organization resolved");
        Ok(id)
    }

    /// Fetch by name and rebuild state from the payload.
    fn refresh(&self, operation: Operation, name: &str) -> OperationOutcome {
        match self.remote.fetch_application(name) {
            Ok(app) => {
                debug!("Application fetched");
                OperationOutcome::set(operation, ResourceState::from(app))
            }
            Err(e) => {
                let classification = classifier::classify(&e, Sentinel::NotFound, READ_FAILED);
                let outcome = if classification.sentinel_seen {
                    info!("Application no longer exists remotely");
                    OperationOutcome::remove(operation)
                } else {
                    warn!(error = %e, "Fetch failed");
                    OperationOutcome::keep(operation)
                };
                outcome.with_diagnostics(classification.diagnostics, FailureKind::Remote)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::application::ports::MockRemoteOperations;
    use crate::domain::{
        NOT_FOUND_MESSAGE, Organization, OrganizationRef, RemoteApplication, RemoteError,
        RemoteErrorEntry,
    };

    fn demo_app() -> RemoteApplication {
        RemoteApplication {
            id: "app_123".into(),
            name: "demo-app".into(),
            organization: OrganizationRef {
                slug: "acme".into(),
                id: "org_1".into(),
            },
            app_url: "demo-app.example".into(),
            hostname: "demo-app.fly.dev".into(),
            shared_ip_address: "".into(),
        }
    }

    fn demo_state() -> ResourceState {
        ResourceState::from(demo_app())
    }

    fn service(mock: MockRemoteOperations) -> AppResourceService {
        AppResourceService::new(Box::new(mock))
    }

    // ── create ────────────────────────────────────────────────────────────

    #[test]
    fn create_with_unknown_org_uses_default_once() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_resolve_default_organization()
            .times(1)
            .returning(|| {
                Ok(Organization {
                    id: "org_1".into(),
                    slug: "acme".into(),
                    name: "acme".into(),
                })
            });
        mock.expect_resolve_organization().never();
        mock.expect_create_application()
            .with(eq("demo-app"), eq("org_1"))
            .times(1)
            .returning(|_, _| Ok(demo_app()));

        let outcome = service(mock).create(&ResourceConfig::new("demo-app"));

        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.directive, StateDirective::Set(demo_state()));
        assert_eq!(
            outcome.state().unwrap(),
            &ResourceState {
                id: "app_123".into(),
                name: "demo-app".into(),
                organization_slug: "acme".into(),
                organization_id: "org_1".into(),
                application_url: "demo-app.example".into(),
                hostname: "demo-app.fly.dev".into(),
                shared_ip_address: "".into(),
            }
        );
    }

    #[test]
    fn create_with_explicit_org_never_uses_default() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_resolve_default_organization().never();
        mock.expect_resolve_organization()
            .with(eq("acme"))
            .times(1)
            .returning(|_| Ok("org_1".into()));
        mock.expect_create_application()
            .with(eq("demo-app"), eq("org_1"))
            .times(1)
            .returning(|_, _| Ok(demo_app()));

        let config = ResourceConfig::new("demo-app").with_organization("acme");
        let outcome = service(mock).create(&config);
        assert!(outcome.is_success());
    }

    #[test]
    fn create_state_comes_from_remote_not_config() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_resolve_organization()
            .returning(|_| Ok("org_1".into()));
        mock.expect_create_application().returning(|_, _| {
            let mut app = demo_app();
            app.name = "demo-app-normalized".into();
            Ok(app)
        });

        let config = ResourceConfig::new("demo-app").with_organization("acme");
        let outcome = service(mock).create(&config);
        assert_eq!(outcome.state().unwrap().name, "demo-app-normalized");
    }

    #[test]
    fn create_ignores_caller_supplied_organization_id() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_resolve_organization()
            .returning(|_| Ok("org_resolved".into()));
        mock.expect_create_application()
            .with(eq("demo-app"), eq("org_resolved"))
            .times(1)
            .returning(|_, _| Ok(demo_app()));

        let mut config = ResourceConfig::new("demo-app").with_organization("acme");
        config.organization_id = "org_spoofed".into();
        assert!(service(mock).create(&config).is_success());
    }

    #[test]
    fn create_null_org_resolves_empty_slug() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_resolve_default_organization().never();
        mock.expect_resolve_organization()
            .with(eq(""))
            .times(1)
            .returning(|_| Err(RemoteError::single("Could not resolve organization", "")));
        mock.expect_create_application().never();

        let config = ResourceConfig::new("demo-app").with_organization_field(FieldValue::Null);
        let outcome = service(mock).create(&config);
        assert_eq!(outcome.failure, Some(FailureKind::Resolution));
    }

    #[test]
    fn create_default_org_failure_stops_before_mutation() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_resolve_default_organization()
            .times(1)
            .returning(|| Err(RemoteError::transport("unauthorized")));
        mock.expect_create_application().never();

        let outcome = service(mock).create(&ResourceConfig::new("demo-app"));

        assert_eq!(outcome.directive, StateDirective::Keep);
        assert_eq!(outcome.failure, Some(FailureKind::Resolution));
        assert_eq!(outcome.diagnostics.len(), 1);
        let d = outcome.diagnostics.iter().next().unwrap();
        assert_eq!(d.summary, "Could not detect default organization");
        assert_eq!(d.detail, "unauthorized");
    }

    #[test]
    fn create_org_failure_stops_before_mutation() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_resolve_organization()
            .returning(|_| Err(RemoteError::single("Could not resolve organization", "organization")));
        mock.expect_create_application().never();

        let config = ResourceConfig::new("demo-app").with_organization("nope");
        let outcome = service(mock).create(&config);

        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(
            outcome.diagnostics.iter().next().unwrap().summary,
            "Could not resolve organization"
        );
    }

    #[test]
    fn create_failure_reports_single_diagnostic_and_persists_nothing() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_resolve_organization()
            .returning(|_| Ok("org_1".into()));
        mock.expect_create_application().times(1).returning(|_, _| {
            Err(RemoteError::Failed(vec![
                RemoteErrorEntry::new("Name has already been taken", "createApp"),
                RemoteErrorEntry::new("Validation failed", "createApp.name"),
            ]))
        });

        let config = ResourceConfig::new("demo-app").with_organization("acme");
        let outcome = service(mock).create(&config);

        assert_eq!(outcome.directive, StateDirective::Keep);
        assert_eq!(outcome.failure, Some(FailureKind::Remote));
        assert_eq!(outcome.diagnostics.len(), 1);
        let d = outcome.diagnostics.iter().next().unwrap();
        assert_eq!(d.summary, "Create app failed");
        assert!(d.detail.contains("Name has already been taken"));
    }

    #[test]
    fn create_without_name_makes_no_remote_calls() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_resolve_default_organization().never();
        mock.expect_resolve_organization().never();
        mock.expect_create_application().never();

        let outcome = service(mock).create(&ResourceConfig::default());
        assert_eq!(outcome.failure, Some(FailureKind::Validation));
        assert_eq!(
            outcome.diagnostics.iter().next().unwrap().summary,
            "Missing application name"
        );
    }

    // ── read ──────────────────────────────────────────────────────────────

    #[test]
    fn read_overwrites_state_wholesale() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_fetch_application()
            .with(eq("demo-app"))
            .times(1)
            .returning(|_| {
                let mut app = demo_app();
                app.hostname = "moved.fly.dev".into();
                app.shared_ip_address = "10.0.0.1".into();
                Ok(app)
            });

        let mut stale = demo_state();
        stale.application_url = "stale.example".into();
        let outcome = service(mock).read(&stale);

        let state = outcome.state().unwrap();
        assert_eq!(state.hostname, "moved.fly.dev");
        assert_eq!(state.shared_ip_address, "10.0.0.1");
        assert_eq!(state.application_url, "demo-app.example");
    }

    #[test]
    fn read_is_idempotent() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_fetch_application()
            .times(2)
            .returning(|_| Ok(demo_app()));

        let svc = service(mock);
        let first = svc.read(&demo_state());
        let second = svc.read(first.state().unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn read_not_found_removes_silently() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_fetch_application()
            .returning(|_| Err(RemoteError::single(NOT_FOUND_MESSAGE, "app")));

        let outcome = service(mock).read(&demo_state());
        assert_eq!(outcome.directive, StateDirective::Remove);
        assert!(outcome.diagnostics.is_empty());
        assert!(outcome.is_success());
    }

    #[test]
    fn read_not_found_still_reports_other_errors() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_fetch_application().returning(|_| {
            Err(RemoteError::Failed(vec![
                RemoteErrorEntry::new(NOT_FOUND_MESSAGE, "app"),
                RemoteErrorEntry::new("Internal server error", "app.organization"),
            ]))
        });

        let outcome = service(mock).read(&demo_state());
        assert_eq!(outcome.directive, StateDirective::Remove);
        assert_eq!(outcome.diagnostics.len(), 1);
        let d = outcome.diagnostics.iter().next().unwrap();
        assert_eq!(d.summary, "Internal server error");
        assert_eq!(d.detail, "app.organization");
    }

    #[test]
    fn read_structured_failure_keeps_state() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_fetch_application()
            .returning(|_| Err(RemoteError::single("Unauthorized", "")));

        let outcome = service(mock).read(&demo_state());
        assert_eq!(outcome.directive, StateDirective::Keep);
        assert_eq!(outcome.failure, Some(FailureKind::Remote));
        assert_eq!(outcome.diagnostics.iter().next().unwrap().summary, "Unauthorized");
    }

    #[test]
    fn read_transport_failure_reports_generic_diagnostic() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_fetch_application()
            .returning(|_| Err(RemoteError::transport("connection refused")));

        let outcome = service(mock).read(&demo_state());
        assert_eq!(outcome.directive, StateDirective::Keep);
        let d = outcome.diagnostics.iter().next().unwrap();
        assert_eq!(d.summary, "Read: query failed");
        assert_eq!(d.detail, "connection refused");
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn update_without_changes_returns_prior() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_fetch_application().never();
        mock.expect_create_application().never();
        mock.expect_delete_application().never();

        let prior = demo_state();
        let plan = ResourceConfig::new("demo-app").with_organization("acme");
        let outcome = service(mock).update(&plan, &prior);

        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.directive, StateDirective::Set(prior));
    }

    #[test]
    fn update_with_unknown_org_is_accepted() {
        let prior = demo_state();
        let outcome = service(MockRemoteOperations::new())
            .update(&ResourceConfig::new("demo-app"), &prior);
        assert!(outcome.is_success());
        assert_eq!(outcome.state(), Some(&prior));
    }

    #[test]
    fn update_org_change_reports_one_diagnostic() {
        let plan = ResourceConfig::new("demo-app").with_organization("other-org");
        let outcome = service(MockRemoteOperations::new()).update(&plan, &demo_state());

        assert_eq!(outcome.directive, StateDirective::Keep);
        assert_eq!(outcome.failure, Some(FailureKind::Validation));
        assert_eq!(outcome.diagnostics.len(), 1);
        let d = outcome.diagnostics.iter().next().unwrap();
        assert_eq!(d.summary, "Can't mutate org of existing app");
        assert_eq!(d.detail, "Can't switch org acme to other-org");
    }

    #[test]
    fn update_name_and_org_change_reports_both() {
        let plan = ResourceConfig::new("renamed").with_organization("other-org");
        let outcome = service(MockRemoteOperations::new()).update(&plan, &demo_state());

        let summaries: Vec<_> = outcome
            .diagnostics
            .iter()
            .map(|d| d.summary.as_str())
            .collect();
        assert_eq!(
            summaries,
            [
                "Can't mutate org of existing app",
                "Can't mutate name of existing app"
            ]
        );
    }

    #[test]
    fn check_update_matches_update() {
        let prior = demo_state();
        for plan in [
            ResourceConfig::new("demo-app"),
            ResourceConfig::new("renamed").with_organization("other-org"),
        ] {
            assert_eq!(
                AppResourceService::check_update(&plan, &prior),
                service(MockRemoteOperations::new()).update(&plan, &prior)
            );
        }
    }

    // ── delete ────────────────────────────────────────────────────────────

    #[test]
    fn delete_success_removes() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_delete_application()
            .with(eq("demo-app"))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = service(mock).delete(&demo_state());
        assert_eq!(outcome.directive, StateDirective::Remove);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn delete_failure_still_removes_and_reports_every_entry() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_delete_application().returning(|_| {
            Err(RemoteError::Failed(vec![
                RemoteErrorEntry::new(NOT_FOUND_MESSAGE, "deleteApp"),
                RemoteErrorEntry::new("Machines still running", "deleteApp"),
            ]))
        });

        let outcome = service(mock).delete(&demo_state());
        assert_eq!(outcome.directive, StateDirective::Remove);
        assert_eq!(outcome.diagnostics.len(), 2);
        assert_eq!(outcome.failure, Some(FailureKind::Remote));
    }

    #[test]
    fn delete_transport_failure_still_removes() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_delete_application()
            .returning(|_| Err(RemoteError::transport("timeout")));

        let outcome = service(mock).delete(&demo_state());
        assert_eq!(outcome.directive, StateDirective::Remove);
        assert_eq!(
            outcome.diagnostics.iter().next().unwrap().summary,
            "Delete app failed"
        );
    }

    // ── import ────────────────────────────────────────────────────────────

    #[test]
    fn import_reads_by_identifier() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_fetch_application()
            .with(eq("demo-app"))
            .times(1)
            .returning(|_| Ok(demo_app()));

        let outcome = service(mock).import("demo-app");
        assert_eq!(outcome.operation, Operation::Import);
        assert_eq!(outcome.directive, StateDirective::Set(demo_state()));
    }

    #[test]
    fn import_missing_app_is_an_error() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_fetch_application()
            .returning(|_| Err(RemoteError::single(NOT_FOUND_MESSAGE, "app")));

        let outcome = service(mock).import("ghost");
        assert_eq!(outcome.directive, StateDirective::Keep);
        assert_eq!(outcome.failure, Some(FailureKind::Resolution));
        assert_eq!(
            outcome.diagnostics.iter().next().unwrap().summary,
            "Cannot import non-existent remote object"
        );
    }

    #[test]
    fn import_empty_identifier_is_rejected() {
        let mut mock = MockRemoteOperations::new();
        mock.expect_fetch_application().never();

        let outcome = service(mock).import("  ");
        assert_eq!(outcome.failure, Some(FailureKind::Validation));
    }
}
