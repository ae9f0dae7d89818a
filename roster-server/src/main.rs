use actix_web::web::Data;
use actix_web::{middleware, App, HttpServer};
use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use roster_server::settings::Settings;
use roster_server::state::AppState;
use roster_server::{api, database};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[derive(Parser)]
#[command(about, version, author)]
struct Opts {
    #[command(subcommand)]
    subcommand: SubCommand,
    /// Config file
    #[arg(long, short)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Run the roster server
    Server,
    /// Fill an empty database with sample teams and members
    Seed,
    /// Print the OpenAPI spec as YAML
    Openapi,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let opts: Opts = Opts::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if cfg!(debug_assertions) {
        log::warn!("This is a debug build")
    };

    match opts.subcommand {
        SubCommand::Server => {
            let (settings, database) = open(opts.config.as_ref()).await?;
            let state = AppState::new(Arc::clone(&settings), database);
            log::info!("Listening on {}", settings.api_socket);
            HttpServer::new(move || {
                App::new()
                    .app_data(Data::new(state.clone()))
                    .configure(api::configure)
                    .wrap(middleware::Logger::default())
            })
            .bind(&settings.api_socket)?
            .run()
            .await
            .context("Http Server failed")?;
        }
        SubCommand::Seed => {
            let (_, database) = open(opts.config.as_ref()).await?;
            database::seed(&database)
                .await
                .context("Failed to seed database")?;
        }
        SubCommand::Openapi => print!("{}", api::api_yaml()?),
    }
    Ok(())
}

async fn open(config: Option<&String>) -> anyhow::Result<(Arc<Settings>, DatabaseConnection)> {
    let settings = Arc::new(Settings::new(config)?);
    let database = database::connect(&settings.database_url)
        .await
        .context("Failed to connect to database")?;
    Ok((settings, database))
}
