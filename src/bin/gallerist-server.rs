//! Serves `GET /api/photos?page=N` from a directory of fixture pages.
//!
//! ```text
//! gallerist-server fixtures_dir=./data bind=127.0.0.1:3000
//! ```

use gallerist::repository::FixtureRepository;
use gallerist::{parse_args, Config, GalleryError};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_FIXTURES_DIR: &str = "data";

#[tokio::main]
async fn main() -> gallerist::Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = Config::load(&args)?;
    gallerist::observability::init_tracing(&config);

    let dir = config
        .fixtures_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURES_DIR));
    let repository = FixtureRepository::open(dir)?;

    let addr: SocketAddr = config
        .bind
        .parse()
        .map_err(|e| GalleryError::Config(format!("invalid bind address `{}`: {e}", config.bind)))?;

    let source = repository.source().map(|dir| dir.display().to_string()).unwrap_or_default();
    println!(
        "serving {} pages from {source} on http://{addr}{}",
        repository.page_count(),
        gallerist::server::PHOTOS_ROUTE
    );
    gallerist::server::serve(repository, addr).await
}
