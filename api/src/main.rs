use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use tracing::info;

use crate::application::{
    http::server::http_server::{router, state},
    logger::init_logger,
};
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log)?;

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("listening on {} (root path {})", addr, args.server.root_path);

    axum::serve(listener, router).await?;

    Ok(())
}
