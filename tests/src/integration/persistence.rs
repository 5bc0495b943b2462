//! # Durability Across Restarts
//!
//! Rebuilds the service over the same data directory and checks that
//! registry state and the audit trail survive, and that the documents
//! on disk keep the agreed shape.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};

    use bansync_core::domain::{
        placeholder_user_name, BanOrigin, BanRecord, ServerId, UserId, DEFAULT_REASON,
    };
    use bansync_core::ports::{BanSyncApi, DocumentStore, MockActuator, MockPrivilegeOracle};
    use bansync_runtime::{build_service, RuntimeConfig};
    use bansync_store::JsonFileStore;

    const MOD: UserId = UserId(10);

    fn config_in(dir: &std::path::Path) -> RuntimeConfig {
        RuntimeConfig {
            data_dir: dir.to_path_buf(),
            ..RuntimeConfig::default()
        }
    }

    async fn service_over(
        config: &RuntimeConfig,
    ) -> bansync_core::service::BanSyncService<JsonFileStore, MockActuator, MockPrivilegeOracle>
    {
        build_service(
            config,
            Arc::new(MockActuator::new()),
            Arc::new(MockPrivilegeOracle::default()),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_state_survives_service_restart() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        {
            let service = service_over(&config).await;
            service.create_network("alpha", MOD, ServerId(1)).await.unwrap();
            service.join_network("alpha", MOD, ServerId(2)).await.unwrap();
            service
                .sync_ban(bansync_core::ports::SyncBanRequest {
                    origin: ServerId(1),
                    actor: MOD,
                    user: UserId(99),
                    reason: None,
                })
                .await
                .unwrap();
        }

        // Fresh service over the same directory sees everything
        let service = service_over(&config).await;
        assert_eq!(
            service.networks_for(MOD, ServerId(2)).await.unwrap(),
            vec!["alpha"]
        );

        let history = service.recent_bans(MOD, ServerId(1), 10).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_id, UserId(99));
        assert_eq!(history[0].reason, DEFAULT_REASON);
        assert_eq!(history[0].user_name, placeholder_user_name(UserId(99)));
    }

    #[tokio::test]
    async fn test_restart_after_network_dissolution() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        {
            let service = service_over(&config).await;
            service.create_network("alpha", MOD, ServerId(1)).await.unwrap();
            service.leave_network("alpha", MOD, ServerId(1)).await.unwrap();
        }

        let service = service_over(&config).await;
        assert!(service.networks_for(MOD, ServerId(1)).await.unwrap().is_empty());

        // The dissolved network left no key behind in the document
        let raw = tokio::fs::read_to_string(config.registry_path())
            .await
            .unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc, serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_registry_document_shape_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let service = service_over(&config).await;
        service.create_network("alpha", MOD, ServerId(5)).await.unwrap();
        service.join_network("alpha", MOD, ServerId(6)).await.unwrap();

        let raw = tokio::fs::read_to_string(config.registry_path())
            .await
            .unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["alpha"]["owner"], 5);
        assert_eq!(doc["alpha"]["servers"], serde_json::json!([5, 6]));
        assert!(doc["alpha"]["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_recent_bans_ordering_over_reloaded_log() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let store = JsonFileStore::new(config.registry_path(), config.ban_log_path());
        store.initialize().await.unwrap();

        // Seed the log directly with out-of-order timestamps
        let base = Utc::now();
        let record = |user: u64, minutes: i64| BanRecord {
            user_id: UserId(user),
            user_name: format!("user-{user}"),
            reason: DEFAULT_REASON.to_owned(),
            initiator_server: ServerId(1),
            initiator_server_name: "hub".to_owned(),
            initiator_user: MOD,
            initiator_user_name: "mod".to_owned(),
            timestamp: base + Duration::minutes(minutes),
            networks: vec!["alpha".to_owned()],
            origin: BanOrigin::BotInitiated,
        };
        store
            .store_ban_log(&[record(1, 5), record(2, 30), record(3, 1)])
            .await
            .unwrap();

        let service = service_over(&config).await;
        service.create_network("alpha", MOD, ServerId(1)).await.unwrap();

        let history = service.recent_bans(MOD, ServerId(1), 2).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].user_id, UserId(2));
        assert_eq!(history[1].user_id, UserId(1));
    }
}
