use people_service::config::PeopleConfig;
use people_service::services::MongoDb;
use people_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let mut config = PeopleConfig::load().expect("Failed to load configuration");
        config.mongodb.database = format!("people_test_{}", Uuid::new_v4());
        Self::spawn_with_config(config).await
    }

    /// Spawn against a store address nothing listens on, with short driver
    /// timeouts so operations fail fast instead of hanging the tests.
    pub async fn spawn_with_store_down() -> Self {
        let mut config = PeopleConfig::load().expect("Failed to load configuration");
        config.mongodb.uri =
            "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=200&connectTimeoutMS=200".to_string();
        config.mongodb.database = format!("people_test_{}", Uuid::new_v4());
        Self::spawn_with_config(config).await
    }

    async fn spawn_with_config(mut config: PeopleConfig) -> Self {
        config.common.port = 0; // Random port for testing
        let db_name = config.mongodb.database.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept requests; /health answers even when
        // the store is unreachable.
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Cleanup test resources (the per-test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
