use satchel::{
    data::book::Book, routes::books_router, state::BooksState, store::memory::MemoryBookStore,
};
use std::{env, sync::Arc};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
}

fn opening_stock() -> Vec<Book> {
    vec![Book {
        id: 1,
        title: "The Great Gatsby".to_string(),
        author: "F. Scott".to_string(),
        year: 1925,
    }]
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");

    let state = BooksState::new(Arc::new(MemoryBookStore::new(opening_stock())));
    let app = books_router(state).layer(TraceLayer::new_for_http());

    let server_ip = env::var("BOOKS_SERVER_IP").unwrap_or_else(|_| "127.0.0.1:8081".to_string());
    let listener = TcpListener::bind(&server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("unable to serve app");
}
