//! Backend entry-point: loads the catalogue, then serves the REST API.
//!
//! Startup is strictly ordered: migrations, then CSV seeding, then the
//! listener. Any failure along the way fails the whole process, so a
//! serving instance always has a fully loaded catalogue.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use pokedex_backend::domain::CatalogueSeeder;
use pokedex_backend::inbound::http::health::HealthState;
use pokedex_backend::outbound::persistence::{
    DbPool, DieselPokemonSeedRepository, PoolConfig, run_migrations,
};
use pokedex_backend::server::{ServerConfig, create_server};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SEED_PATH: &str = "data/pokemons.csv";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database_url =
        env::var("DATABASE_URL").map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;
    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;
    let seed_path = env::var("POKEMON_CSV").unwrap_or_else(|_| DEFAULT_SEED_PATH.to_owned());

    // Migrations run on a synchronous connection; keep them off the runtime.
    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || run_migrations(&migration_url))
        .await
        .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
        .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;

    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(std::io::Error::other)?;

    let rows = pokedex_data::read_seed_file(&seed_path).map_err(std::io::Error::other)?;
    let seeder = CatalogueSeeder::new(Arc::new(DieselPokemonSeedRepository::new(pool.clone())));
    let outcome = seeder.seed(rows).await.map_err(std::io::Error::other)?;
    info!(
        inserted = outcome.inserted,
        skipped = outcome.skipped,
        path = %seed_path,
        "catalogue loaded"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, pool))?;
    server.await
}
