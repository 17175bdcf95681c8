use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;
use tracing::info;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const API_PREFIX: &str = "/api";

pub struct Server;

impl Server {
    /// API under `/api`, Swagger UI under `/docs` and the document at `/openapi.json`.
    pub fn routes(container: DependencyContainer, public_url: &str) -> Route {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "HVAC Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("{}{}", public_url, API_PREFIX));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest(API_PREFIX, api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let public_url = format!("http://{}", addr);
        let app = Self::routes(container, &public_url)
            .with(config.cors)
            .with(Tracing);
        info!("Server running at {}", public_url);
        info!("Swagger UI at {}/docs", public_url);
        info!("OpenAPI JSON at {}/openapi.json", public_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
