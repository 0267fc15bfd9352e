use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use league_core::LeagueStore;
use league_core::utils::TimeEstimation;
use log::info;
use web::{LeagueAppData, LeagueDashboardServer, SeedMode, ServerConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = ServerConfig::from_env()?;

    let store = match config.seed {
        SeedMode::Sample => {
            let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);

            let database = database?;

            info!("database loaded: {} ms", estimated);

            DatabaseGenerator::generate(&database)?
        }
        SeedMode::Empty => {
            info!("starting with an empty league list");

            LeagueStore::new()
        }
    };

    info!("{} leagues ready", store.leagues().len());

    LeagueDashboardServer::new(LeagueAppData::new(store), config.addr()).run().await?;

    Ok(())
}
