#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // The hosting platform provides PORT; default to 8080 locally
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind");

    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, hello_fn::app()).await.unwrap();
}
