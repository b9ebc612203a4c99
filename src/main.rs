use axum::{routing::get, Extension, Router};
use book_search::catalog::handlers::{handle_create_book, handle_get_book, handle_list_books};
use book_search::catalog::seed;
use book_search::catalog::store::BookStore;
use book_search::search::handlers::{
    handle_popular_keywords, handle_search_books, handle_search_books_detailed,
};
use book_search::search::service::SearchService;
use book_search::searchlog::service::SearchLogService;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8080".parse()?;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" if i + 1 < args.len() => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                eprintln!("Example: {} --bind 0.0.0.0:8080", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Shared state:
    let store = Arc::new(BookStore::new());
    let search_log = Arc::new(SearchLogService::new());
    let search_service = Arc::new(SearchService::new(store.clone(), search_log.clone()));

    // 2. Sample catalog:
    seed::load_sample_books(&store);

    // 3. HTTP Router:
    let app = Router::new()
        .route("/api/books", get(handle_list_books).post(handle_create_book))
        .route("/api/books/:id", get(handle_get_book))
        .route("/api/search/books", get(handle_search_books))
        .route("/api/search/books/detailed", get(handle_search_books_detailed))
        .route("/api/search/popular", get(handle_popular_keywords))
        .layer(Extension(store))
        .layer(Extension(search_log))
        .layer(Extension(search_service));

    tracing::info!("Book search service listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
