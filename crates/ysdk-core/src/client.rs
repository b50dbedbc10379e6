//! Typed client over an SDK handle

use crate::error::{Error, Result};
use crate::ops;
use crate::sdk::{PlayerHandle, SdkHandle};
use crate::types::{AdvCallbacks, DeviceInfo, PlayerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::oneshot;
use tracing::{debug, info};

type AdSlot = Rc<RefCell<Option<oneshot::Sender<Result<bool>>>>>;

/// Deliver the first ad outcome; later ones are dropped.
fn settle(slot: &AdSlot, outcome: Result<bool>) {
    if let Some(sender) = slot.borrow_mut().take() {
        let _ = sender.send(outcome);
    }
}

/// Game-facing wrapper around an SDK handle
pub struct Ysdk<S: SdkHandle> {
    inner: S,
}

impl<S: SdkHandle> Ysdk<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The underlying SDK handle
    pub fn handle(&self) -> &S {
        &self.inner
    }

    /// Informing the platform that the game has loaded and is ready to play
    pub fn ready(&self) {
        ops::signal_ready(&self.inner);
    }

    pub fn device_info(&self) -> DeviceInfo {
        self.inner.device_info()
    }

    /// Fetch the current player, optionally requesting personal data scopes
    pub async fn player(&self, scopes: bool) -> Result<Player<S::Player>> {
        let inner = ops::get_player(&self.inner, &PlayerOptions::new(scopes)).await?;
        info!("Player {} loaded", inner.unique_id());
        Ok(Player { inner })
    }

    /// Show a fullscreen ad and wait for it to finish.
    ///
    /// Resolves to whether the ad was actually shown. Errors if the request
    /// throws, the platform reports a failure, or the device is offline.
    pub async fn show_fullscreen_adv(&self) -> Result<bool> {
        let (sender, receiver) = oneshot::channel();
        let slot: AdSlot = Rc::new(RefCell::new(Some(sender)));

        let callbacks = AdvCallbacks::new()
            .on_close({
                let slot = slot.clone();
                move |was_shown| settle(&slot, Ok(was_shown))
            })
            .on_open(|| debug!("Fullscreen ad opened"))
            .on_error({
                let slot = slot.clone();
                move |err| settle(&slot, Err(err))
            })
            .on_offline({
                let slot = slot.clone();
                move || settle(&slot, Err(Error::Offline))
            });
        // Only the callbacks keep the sender alive from here on.
        drop(slot);

        ops::show_fullscreen_ad(&self.inner, callbacks)?;
        let outcome = receiver.await.map_err(|_| Error::AdAborted)?;
        debug!("Fullscreen ad finished: {:?}", outcome);
        outcome
    }
}

/// Game-facing wrapper around a player handle
pub struct Player<P: PlayerHandle> {
    inner: P,
}

impl<P: PlayerHandle> Player<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn handle(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }

    pub fn unique_id(&self) -> String {
        ops::get_player_id(&self.inner)
    }

    /// Read a numeric stat, `None` if it was never saved
    pub async fn numeric_data(&self, key: &str) -> Result<Option<f64>> {
        ops::get_numeric_stat(&self.inner, key).await
    }

    /// Save a numeric stat
    pub async fn set_numeric_data(&self, key: &str, value: f64) -> Result<serde_json::Value> {
        ops::set_numeric_stat(&self.inner, key, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{AdBehavior, MemoryPlayer, MemorySdk};
    use crate::types::DeviceKind;

    #[test]
    fn test_ready_and_device_info() {
        let ysdk = Ysdk::new(MemorySdk::new().with_device(DeviceKind::Mobile));
        ysdk.ready();
        assert_eq!(ysdk.handle().ready_calls(), 1);
        assert!(ysdk.device_info().is_mobile());
    }

    #[tokio::test]
    async fn test_ad_closed() {
        let sdk = MemorySdk::new().with_ad_behavior(AdBehavior::Close { was_shown: false });
        let ysdk = Ysdk::new(sdk);
        assert_eq!(ysdk.show_fullscreen_adv().await, Ok(false));
    }

    #[tokio::test]
    async fn test_ad_error() {
        let sdk = MemorySdk::new().with_ad_behavior(AdBehavior::Error("no fill".into()));
        let ysdk = Ysdk::new(sdk);
        assert_eq!(
            ysdk.show_fullscreen_adv().await,
            Err(Error::PlatformError("no fill".into()))
        );
    }

    #[tokio::test]
    async fn test_ad_offline() {
        let ysdk = Ysdk::new(MemorySdk::new().with_ad_behavior(AdBehavior::Offline));
        assert_eq!(ysdk.show_fullscreen_adv().await, Err(Error::Offline));
    }

    #[tokio::test]
    async fn test_ad_request_failure_is_returned() {
        let sdk = MemorySdk::new().with_ad_behavior(AdBehavior::Manual);
        sdk.fail_next_ad(Error::PlatformError("adv is undefined".into()));
        let ysdk = Ysdk::new(sdk);

        assert_eq!(
            ysdk.show_fullscreen_adv().await,
            Err(Error::PlatformError("adv is undefined".into()))
        );
    }

    #[tokio::test]
    async fn test_ad_aborted_when_callbacks_dropped() {
        let ysdk = Ysdk::new(MemorySdk::new().with_ad_behavior(AdBehavior::Manual));
        let (outcome, dropped) = tokio::join!(ysdk.show_fullscreen_adv(), async {
            ysdk.handle().take_pending_ad().is_some()
        });
        assert!(dropped);
        assert_eq!(outcome, Err(Error::AdAborted));
    }

    #[tokio::test]
    async fn test_ad_manual_close() {
        let ysdk = Ysdk::new(MemorySdk::new().with_ad_behavior(AdBehavior::Manual));
        let (outcome, opened, closed) = tokio::join!(
            ysdk.show_fullscreen_adv(),
            async { ysdk.handle().fire_open() },
            async { ysdk.handle().fire_close(true) }
        );
        assert!(opened);
        assert!(closed);
        assert_eq!(outcome, Ok(true));
    }

    #[tokio::test]
    async fn test_player_stats_round_trip() {
        let player = MemoryPlayer::new("p-1").with_stat("money", 10.0);
        let ysdk = Ysdk::new(MemorySdk::new().with_player(player));

        let player = ysdk.player(false).await.unwrap();
        assert_eq!(player.unique_id(), "p-1");
        assert_eq!(ysdk.handle().player_requests(), vec![PlayerOptions::new(false)]);

        let money = player.numeric_data("money").await.unwrap().unwrap_or(0.0);
        let ack = player.set_numeric_data("money", money + 5.0).await.unwrap();
        assert_eq!(ack, serde_json::Value::Bool(true));
        assert_eq!(player.numeric_data("money").await.unwrap(), Some(15.0));
        assert_eq!(player.numeric_data("gems").await.unwrap(), None);
    }
}
