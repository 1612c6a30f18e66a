use anyhow::Context;
use book_shelf::{cli_args::CliArgs, server::Server, server::ServerConfig};
use clap::Parser;

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "server=trace,book_shelf=trace,tower_http=trace");
    }

    init_tracing()?;

    tracing::info!("Starting ...");

    let cli_args = CliArgs::parse();

    let mut server_config = ServerConfig::from_config_file(&cli_args.config_file).await?;

    if let Some(socket_address) = cli_args.socket_address {
        server_config = server_config.with_socket_address(socket_address);
    }

    tracing::debug!(?server_config, "Loaded configuration");

    let server = Server::new(server_config);

    server.run().await?;

    Ok(())
}
