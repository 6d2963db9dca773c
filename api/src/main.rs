use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::{
    application::{
        http::server::http_server::{router, state},
        logging::init_logger,
    },
    args::Args,
};

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log)?;

    let state = state(args.clone()).await?;
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("nutrimentor listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
