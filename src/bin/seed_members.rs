//! Loads the sample team/member data set into the configured database.
//!
//! Usage: `seed_members [COUNT]` (defaults to 100 members).

use std::env;

use dotenvy::dotenv;

use member_search::db::{establish_connection_pool, run_migrations};
use member_search::models::config::ServerConfig;
use member_search::repository::DieselRepository;
use member_search::services::members::seed_sample_members;

const DEFAULT_MEMBER_COUNT: usize = 100;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let count = match env::args().nth(1).map(|arg| arg.parse::<usize>()) {
        None => DEFAULT_MEMBER_COUNT,
        Some(Ok(count)) => count,
        Some(Err(err)) => {
            log::error!("Invalid member count: {err}");
            std::process::exit(2);
        }
    };

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_migrations(&pool) {
        log::error!("Failed to migrate database: {err}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    if let Err(err) = seed_sample_members(&repo, count) {
        log::error!("Failed to seed members: {err}");
        std::process::exit(1);
    }
}
