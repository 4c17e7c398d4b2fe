use crate::config::PeopleConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::MongoDb;
use crate::ApiDoc;
use axum::{
    routing::{get, put},
    Router,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub config: PeopleConfig,
    pub db: MongoDb,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: PeopleConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
        };

        let mut app = Router::new()
            .route(
                "/people",
                get(handlers::list_people).post(handlers::create_person),
            )
            .route(
                "/people/:id",
                put(handlers::update_person).delete(handlers::delete_person),
            )
            .route("/health", get(handlers::health_check));

        if config.docs.enabled {
            app = app
                .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
        } else {
            // Keep the OpenAPI JSON available for programmatic access
            app = app.route(
                "/api-docs/openapi.json",
                get(|| async { axum::Json(ApiDoc::openapi()) }),
            );
        }

        let app = app
            .fallback_service(ServeDir::new(&config.docs.serve_dir))
            .with_state(state.clone())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
