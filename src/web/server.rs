use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use chrono::Utc;
use prometheus::{Encoder, Registry, TextEncoder};
use std::sync::Arc;

/// Register the host routes on an actix `ServiceConfig`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_handler))
        .route("/health", web::get().to(health_handler))
        .route("/metrics", web::get().to(metrics_handler));
}

/// Start the HTTP host and run until the process is signalled to stop
pub async fn start_server(registry: Arc<Registry>, host: &str, port: u16) -> std::io::Result<()> {
    tracing::info!("Starting HTTP host on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(registry.clone()))
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}

async fn index_handler() -> impl Responder {
    HttpResponse::Ok().body("Hello World!")
}

async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "purger",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn metrics_handler(registry: web::Data<Arc<Registry>>) -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return HttpResponse::InternalServerError().finish();
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer)
}
