use cofe_config::Config;
use cofe_di::Provide;
use tracing::info;

use crate::{
    database,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = database::connect(&config.database).await;

    let config_provider = ConfigProvider::new(&config);
    let mut provider = Provider::new(config_provider, store);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve().await
}
