//! Traits describing the platform SDK object
//!
//! These mirror the shape of the Yandex Games SDK handle. Implement them to
//! plug a backend into the operations in [`crate::ops`]: `ysdk-web` binds the
//! real browser object, [`crate::memory`] provides an in-process stand-in.
//!
//! JS handles never leave the browser thread, so the async methods are
//! `?Send`.

use crate::error::Result;
use crate::types::{AdvCallbacks, DeviceInfo, PlayerOptions, StatMap};
use async_trait::async_trait;

/// `features.LoadingAPI`
pub trait LoadingApi {
    /// Tell the platform the game finished loading and is playable
    fn ready(&self);
}

/// The SDK handle returned by `YaGames.init()`
#[async_trait(?Send)]
pub trait SdkHandle {
    /// Loading capability type
    type Loading: LoadingApi;
    /// Player handle type returned by [`SdkHandle::get_player`]
    type Player: PlayerHandle;

    /// `features.LoadingAPI`, or `None` if the platform does not expose it
    fn loading_api(&self) -> Option<Self::Loading>;

    /// `adv.showFullscreenAdv({ callbacks })`
    ///
    /// Errors only if the call itself throws; ad outcomes arrive through the
    /// callbacks.
    fn show_fullscreen_adv(&self, callbacks: AdvCallbacks) -> Result<()>;

    /// `getPlayer(options)`
    async fn get_player(&self, options: &PlayerOptions) -> Result<Self::Player>;

    /// `deviceInfo`
    fn device_info(&self) -> DeviceInfo;
}

/// The player object returned by `getPlayer`
#[async_trait(?Send)]
pub trait PlayerHandle {
    /// `getUniqueID()`
    fn unique_id(&self) -> String;

    /// `getStats(keys)`
    async fn get_stats(&self, keys: &[&str]) -> Result<StatMap>;

    /// `setStats(stats)`, resolving to whatever the platform acknowledges with
    async fn set_stats(&self, stats: &StatMap) -> Result<serde_json::Value>;
}
