//! `SdkHandle`/`PlayerHandle` over the real browser objects

use crate::convert::{from_js, into_function, platform_error, stats_from_js, stats_to_js, to_js};
use crate::loader;
use crate::sys;
use async_trait::async_trait;
use tracing::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use ysdk_core::{
    AdvCallbacks, DeviceInfo, DeviceKind, LoadingApi, PlayerHandle, PlayerOptions, Result,
    SdkConfig, SdkHandle, StatMap,
};

/// Pick a device kind from the platform's `is*` flags
///
/// The platform sets exactly one flag; with none set the device reads as a
/// desktop.
pub fn kind_from_flags(mobile: bool, tablet: bool, tv: bool) -> DeviceKind {
    if mobile {
        DeviceKind::Mobile
    } else if tablet {
        DeviceKind::Tablet
    } else if tv {
        DeviceKind::Tv
    } else {
        DeviceKind::Desktop
    }
}

/// The browser SDK handle
#[derive(Debug, Clone)]
pub struct WebSdk {
    inner: sys::YaGames,
}

impl WebSdk {
    /// Load the SDK script if needed and await `YaGames.init()`
    pub async fn init(config: &SdkConfig) -> Result<Self> {
        loader::ensure_script(&config.script_url).await?;
        let promise = sys::YaGames::init().map_err(platform_error)?;
        let value = JsFuture::from(promise).await.map_err(platform_error)?;
        info!("Yandex Games SDK initialized");
        Ok(Self::from_js(value))
    }

    /// Wrap an SDK object the host already initialized
    pub fn from_js(value: JsValue) -> Self {
        Self {
            inner: value.unchecked_into(),
        }
    }
}

/// `features.LoadingAPI` of a [`WebSdk`]
#[derive(Debug, Clone)]
pub struct WebLoadingApi(sys::LoadingApi);

impl LoadingApi for WebLoadingApi {
    fn ready(&self) {
        self.0.ready();
    }
}

#[async_trait(?Send)]
impl SdkHandle for WebSdk {
    type Loading = WebLoadingApi;
    type Player = WebPlayer;

    fn loading_api(&self) -> Option<WebLoadingApi> {
        sys::loading_api(&self.inner).map(WebLoadingApi)
    }

    fn show_fullscreen_adv(&self, callbacks: AdvCallbacks) -> Result<()> {
        let AdvCallbacks {
            on_close,
            on_open,
            on_error,
            on_offline,
        } = callbacks;

        let on_close = on_close.map(|f| {
            into_function(Closure::once_into_js(move |was_shown: bool| f(was_shown)))
        });
        let on_open = on_open.map(|f| into_function(Closure::once_into_js(move || f())));
        let on_error = on_error.map(|f| {
            into_function(Closure::once_into_js(move |err: JsValue| {
                f(platform_error(err))
            }))
        });
        let on_offline = on_offline.map(|f| into_function(Closure::once_into_js(move || f())));

        sys::show_fullscreen_adv(&self.inner, on_close, on_open, on_error, on_offline)
            .map_err(platform_error)
    }

    async fn get_player(&self, options: &PlayerOptions) -> Result<WebPlayer> {
        let options = to_js(options)?;
        let promise = self.inner.get_player(&options).map_err(platform_error)?;
        let value = JsFuture::from(promise).await.map_err(platform_error)?;
        Ok(WebPlayer {
            inner: value.unchecked_into(),
        })
    }

    fn device_info(&self) -> DeviceInfo {
        let info = self.inner.device_info();
        DeviceInfo::new(kind_from_flags(
            info.is_mobile(),
            info.is_tablet(),
            info.is_tv(),
        ))
    }
}

/// The browser player object
#[derive(Debug, Clone)]
pub struct WebPlayer {
    inner: sys::Player,
}

#[async_trait(?Send)]
impl PlayerHandle for WebPlayer {
    fn unique_id(&self) -> String {
        self.inner.get_unique_id()
    }

    async fn get_stats(&self, keys: &[&str]) -> Result<StatMap> {
        let keys: js_sys::Array = keys.iter().map(|k| JsValue::from_str(k)).collect();
        let promise = self.inner.get_stats(&keys).map_err(platform_error)?;
        let value = JsFuture::from(promise).await.map_err(platform_error)?;
        stats_from_js(&value)
    }

    async fn set_stats(&self, stats: &StatMap) -> Result<serde_json::Value> {
        let stats = stats_to_js(stats)?;
        let promise = self.inner.set_stats(&stats).map_err(platform_error)?;
        let value = JsFuture::from(promise).await.map_err(platform_error)?;
        let ack: serde_json::Value = from_js(&value)?;
        debug!("setStats acknowledged: {}", ack);
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_flags() {
        assert_eq!(kind_from_flags(true, false, false), DeviceKind::Mobile);
        assert_eq!(kind_from_flags(false, true, false), DeviceKind::Tablet);
        assert_eq!(kind_from_flags(false, false, true), DeviceKind::Tv);
        assert_eq!(kind_from_flags(false, false, false), DeviceKind::Desktop);
    }
}
