use dotenvy::dotenv;

use todoapp::logging::init_tracing;
use todoapp::router::init_todo_service_router;
use todoapp::state::init_app_state;
use todoapp_config::ServerConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state().await;
    let app = init_todo_service_router(state);

    let addr = server_config.todo_service_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {}: {}", addr, e));

    tracing::info!("Todo service running on http://{}", addr);
    println!("🚀 Todo service running on http://{}", addr);
    println!("📚 Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.unwrap();
}
