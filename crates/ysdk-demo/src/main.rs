//! ysdk-demo: exercises the SDK adapter end to end
//!
//! Runs against the in-memory backend, so it needs no browser. An optional
//! first argument is a JSON `SdkConfig` fragment, e.g. `{"player_scopes": true}`.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;
use ysdk_core::{DeviceKind, MemoryPlayer, MemorySdk, SdkConfig, Ysdk};

const MONEY: &str = "money";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(json) => SdkConfig::from_json(json)?,
        None => SdkConfig::default(),
    };
    info!("Starting ysdk-demo, config: {:?}", config);

    let sdk = MemorySdk::new()
        .with_device(DeviceKind::Mobile)
        .with_player(MemoryPlayer::new("demo-player").with_stat(MONEY, 3.0));
    let ysdk = Ysdk::new(sdk);

    let device = ysdk.device_info();
    info!("mobile = {:?}", device.is_mobile());
    info!("desktop = {:?}", device.is_desktop());
    info!("tablet = {:?}", device.is_tablet());

    ysdk.ready();

    match ysdk.show_fullscreen_adv().await {
        Ok(was_shown) => info!("Fullscreen ad closed, shown = {}", was_shown),
        Err(e) => warn!("Fullscreen ad failed: {}", e),
    }

    let player = ysdk.player(config.player_scopes).await?;
    let money = player.numeric_data(MONEY).await?.unwrap_or(0.0);
    info!("Player {} has {} {}", player.unique_id(), money, MONEY);

    let ack = player.set_numeric_data(MONEY, money + 1.0).await?;
    info!("Saved {} = {}, ack = {}", MONEY, money + 1.0, ack);

    Ok(())
}
