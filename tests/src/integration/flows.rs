//! # End-to-End Ban Synchronization Flows
//!
//! Drives the real service graph (filesystem store via the runtime
//! wiring, mock actuator/oracle) through full command sequences and
//! checks both the reported outcomes and the persisted documents.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bansync_core::domain::{ActuatorError, ServerId, SyncError, UserId};
    use bansync_core::ports::{BanSyncApi, MockActuator, MockPrivilegeOracle, SyncBanRequest};
    use bansync_core::service::BanSyncService;
    use bansync_runtime::{build_service, RuntimeConfig};
    use bansync_store::JsonFileStore;

    const MOD: UserId = UserId(10);
    const TARGET: UserId = UserId(99);

    fn config_in(dir: &std::path::Path) -> RuntimeConfig {
        RuntimeConfig {
            data_dir: dir.to_path_buf(),
            ..RuntimeConfig::default()
        }
    }

    async fn wire(
        dir: &std::path::Path,
        actuator: MockActuator,
    ) -> (
        BanSyncService<JsonFileStore, MockActuator, MockPrivilegeOracle>,
        Arc<MockActuator>,
    ) {
        let actuator = Arc::new(actuator);
        let service = build_service(
            &config_in(dir),
            Arc::clone(&actuator),
            Arc::new(MockPrivilegeOracle::default()),
        )
        .await
        .unwrap();
        (service, actuator)
    }

    fn request(origin: ServerId, user: UserId, reason: Option<&str>) -> SyncBanRequest {
        SyncBanRequest {
            origin,
            actor: MOD,
            user,
            reason: reason.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn test_full_lifecycle_with_overlapping_networks() {
        let dir = tempfile::tempdir().unwrap();
        let actuator = MockActuator::new()
            .with_server_name(ServerId(1), "The Hub")
            .with_user_name(TARGET, "Spammer#123");
        let (service, actuator) = wire(dir.path(), actuator).await;

        // alpha = {1, 2}, beta = {1, 2, 3}
        service.create_network("alpha", MOD, ServerId(1)).await.unwrap();
        service.join_network("alpha", MOD, ServerId(2)).await.unwrap();
        service.create_network("beta", MOD, ServerId(1)).await.unwrap();
        service.join_network("beta", MOD, ServerId(2)).await.unwrap();
        service.join_network("beta", MOD, ServerId(3)).await.unwrap();

        let report = service
            .sync_ban(request(ServerId(1), TARGET, Some("spam")))
            .await
            .unwrap();

        // Server 2 is reachable through both networks but banned once
        assert_eq!(report.targets_attempted, 2);
        assert_eq!(report.total_banned, 3);
        assert_eq!(report.networks_affected(), 2);
        assert_eq!(report.user_name, "Spammer#123");

        let attempted = actuator.attempted_servers();
        assert_eq!(attempted.len(), 3);
        assert_eq!(attempted.iter().filter(|&&s| s == ServerId(2)).count(), 1);

        // Remote reasons carry the origin server's display name
        let remote_call = &actuator.calls()[1];
        assert!(remote_call.reason.starts_with("[Ban Sync from The Hub]"));

        let history = service.recent_bans(MOD, ServerId(1), 5).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].networks, vec!["alpha", "beta"]);
        assert_eq!(history[0].initiator_user, MOD);
    }

    #[tokio::test]
    async fn test_local_ban_failure_leaves_no_trace() {
        let dir = tempfile::tempdir().unwrap();
        let (service, actuator) =
            wire(dir.path(), MockActuator::new().forbidding(ServerId(1))).await;

        service.create_network("alpha", MOD, ServerId(1)).await.unwrap();
        service.join_network("alpha", MOD, ServerId(2)).await.unwrap();

        let err = service.sync_ban(request(ServerId(1), TARGET, None)).await;
        assert!(matches!(
            err,
            Err(SyncError::LocalBanFailed {
                source: ActuatorError::Forbidden(_),
                ..
            })
        ));

        // Only the origin was attempted; the persisted log stayed empty
        assert_eq!(actuator.attempted_servers(), vec![ServerId(1)]);
        assert!(service.recent_bans(MOD, ServerId(1), 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_remote_failure_still_logged_once() {
        let dir = tempfile::tempdir().unwrap();
        let (service, _) =
            wire(dir.path(), MockActuator::new().unreachable(ServerId(3))).await;

        service.create_network("alpha", MOD, ServerId(1)).await.unwrap();
        for server in [ServerId(2), ServerId(3), ServerId(4)] {
            service.join_network("alpha", MOD, server).await.unwrap();
        }

        let report = service
            .sync_ban(request(ServerId(1), TARGET, Some("raid")))
            .await
            .unwrap();

        assert_eq!(report.total_banned, 3); // 1 local + 2 of 3 remotes
        assert_eq!(report.remote_banned, 2);

        let history = service.recent_bans(MOD, ServerId(1), 10).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].reason, "raid");
    }

    #[tokio::test]
    async fn test_ban_from_server_outside_all_networks() {
        let dir = tempfile::tempdir().unwrap();
        let (service, actuator) = wire(dir.path(), MockActuator::new()).await;

        service.create_network("alpha", MOD, ServerId(1)).await.unwrap();

        let err = service.sync_ban(request(ServerId(42), TARGET, None)).await;
        assert!(matches!(err, Err(SyncError::NoNetworks(ServerId(42)))));
        assert!(actuator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unprivileged_caller_denied_on_every_operation() {
        let dir = tempfile::tempdir().unwrap();
        let service = build_service(
            &config_in(dir.path()),
            Arc::new(MockActuator::new()),
            Arc::new(MockPrivilegeOracle { privileged: false }),
        )
        .await
        .unwrap();

        let denied = |r: Result<(), SyncError>| {
            matches!(r, Err(SyncError::PermissionDenied { .. }))
        };

        assert!(denied(service.create_network("alpha", MOD, ServerId(1)).await));
        assert!(denied(service.join_network("alpha", MOD, ServerId(1)).await));
        assert!(denied(
            service
                .leave_network("alpha", MOD, ServerId(1))
                .await
                .map(|_| ())
        ));
        assert!(denied(
            service.networks_for(MOD, ServerId(1)).await.map(|_| ())
        ));
        assert!(denied(
            service
                .sync_ban(request(ServerId(1), TARGET, None))
                .await
                .map(|_| ())
        ));
        assert!(denied(
            service
                .recent_bans(MOD, ServerId(1), 1)
                .await
                .map(|_| ())
        ));
    }
}
