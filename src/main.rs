use clap::Parser;
use log::info;

use pagebar::fonts::FontStore;
use pagebar::server::{router, ServerState};

/// Pagination image generator service
#[derive(Parser, Debug)]
#[command(name = "pagebar", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Fonts are resolved once here; the render path stays I/O-free.
    let state = ServerState::new(FontStore::resolve());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("pagebar listening on {addr}");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
