use pixgate_core::Config;

// Use mimalloc as the global allocator for lower fragmentation inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    let (_state, router) = pixgate_api::setup::initialize_app(config.clone()).await?;

    pixgate_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
