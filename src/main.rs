use std::process;

use clap::Parser as _;

use tdb_application::sqlite;

mod cli;
mod config;
mod conv;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli::Cli {
        config: config_file,
        db_url,
        command,
    } = cli::Cli::parse();

    let cfg = match config::Config::try_load_from_file_or_default(config_file) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::error!("Unable to load configuration: {err}");
            process::exit(1);
        }
    };

    let db_url = db_url.unwrap_or_else(|| cfg.db.conn_sqlite.clone());
    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        db_url,
        cfg.db.conn_pool_size
    );
    let connections = match sqlite::Connections::init_with_timeout(
        &db_url,
        cfg.db.conn_pool_size.into(),
        cfg.db.conn_timeout,
    )
    .and_then(|connections| {
        sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
        Ok(connections)
    }) {
        Ok(connections) => connections,
        Err(err) => {
            log::error!("Unable to open the database: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = cli::run(command, &cfg, &connections) {
        log::debug!("{err:?}");
        let err = conv::from_app_error(&err);
        match serde_json::to_string_pretty(&err) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("{err}"),
        }
        process::exit(1);
    }
}
