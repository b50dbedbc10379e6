//! Forwarding operations over an SDK handle
//!
//! Each function hands its arguments to the matching SDK method and returns
//! the platform's result untouched. Failures propagate as-is.

use crate::error::Result;
use crate::sdk::{LoadingApi, PlayerHandle, SdkHandle};
use crate::types::{AdvCallbacks, PlayerOptions, StatMap};
use tracing::debug;

/// Inform the platform that the game has loaded and is ready to play.
///
/// A handle without `LoadingAPI` makes this a no-op.
pub fn signal_ready<S: SdkHandle>(sdk: &S) {
    match sdk.loading_api() {
        Some(loading) => {
            debug!("LoadingAPI.ready()");
            loading.ready();
        }
        None => debug!("LoadingAPI not available, skipping ready()"),
    }
}

/// Request a fullscreen ad with the given lifecycle hooks.
pub fn show_fullscreen_ad<S: SdkHandle>(sdk: &S, callbacks: AdvCallbacks) -> Result<()> {
    debug!("adv.showFullscreenAdv({:?})", callbacks);
    sdk.show_fullscreen_adv(callbacks)
}

/// Request the current player handle.
pub async fn get_player<S: SdkHandle>(
    sdk: &S,
    options: &PlayerOptions,
) -> Result<S::Player> {
    debug!("getPlayer(scopes={})", options.scopes);
    sdk.get_player(options).await
}

/// The player's unique identifier.
pub fn get_player_id<P: PlayerHandle>(player: &P) -> String {
    player.unique_id()
}

/// Read one numeric stat; `None` if it was never set.
pub async fn get_numeric_stat<P: PlayerHandle>(
    player: &P,
    key: &str,
) -> Result<Option<f64>> {
    debug!("getStats([{:?}])", key);
    let stats = player.get_stats(&[key]).await?;
    Ok(stats.get(key).copied())
}

/// Write one numeric stat and return the platform's acknowledgement.
pub async fn set_numeric_stat<P: PlayerHandle>(
    player: &P,
    key: &str,
    value: f64,
) -> Result<serde_json::Value> {
    debug!("setStats({{{:?}: {}}})", key, value);
    let stats = StatMap::from([(key.to_string(), value)]);
    player.set_stats(&stats).await
}
