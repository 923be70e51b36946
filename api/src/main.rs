use std::{net::SocketAddr, sync::Arc};

use anyhow::anyhow;
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use pawplan_api::{
    application::{
        http::server::http_server::{router, state},
        logging::init_logger,
    },
    args::Args,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Failed to install the rustls crypto provider"))?;

    // Refuse to start without certificates
    args.server.ensure_tls_files()?;
    let tls_config =
        RustlsConfig::from_pem_file(&args.server.ssl_certfile, &args.server.ssl_keyfile).await?;

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let addr = SocketAddr::new(args.server.host, args.server.port);
    info!("listening on https://{}", addr);

    axum_server::bind_rustls(addr, tls_config)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
