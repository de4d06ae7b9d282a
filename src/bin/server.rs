//! Library catalog server binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use library_catalog::{api, catalog, Config, InMemoryDocumentStore};
use tracing_subscriber::{fmt, EnvFilter};

/// Library catalog server
#[derive(Parser, Debug)]
#[command(name = "library-catalog")]
#[command(about = "Books, reviews, and an audit log of every API call")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, env = "LIBRARY_LISTEN", default_value = "0.0.0.0:5000")]
    listen: String,

    /// SQLite file for the audit log
    #[arg(short, long, env = "LIBRARY_AUDIT_DB", default_value = "db/books.db")]
    audit_db: PathBuf,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,library_catalog=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("Library catalog v{}", library_catalog::VERSION);

    let config = Config::builder()
        .listen_addr(&args.listen)
        .audit_db_path(&args.audit_db)
        .build();

    let service = match catalog::open(InMemoryDocumentStore::new(), &config) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            tracing::error!("Failed to open catalog: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = api::serve(service, &config.listen_addr).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
