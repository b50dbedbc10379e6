//! In-memory SDK backend
//!
//! Stands in for the platform when the game runs outside the browser, and
//! records every call so the forwarding layer can be checked against it.

use crate::error::{Error, Result};
use crate::sdk::{LoadingApi, PlayerHandle, SdkHandle};
use crate::types::{AdvCallbacks, DeviceInfo, DeviceKind, PlayerOptions, StatMap};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::trace;

/// How [`MemorySdk`] reacts to a fullscreen ad request
#[derive(Debug, Clone, PartialEq)]
pub enum AdBehavior {
    /// Hold the callbacks until one of the `fire_*` methods is called
    Manual,
    /// Open, then close immediately
    Close { was_shown: bool },
    /// Fail immediately with a platform error
    Error(String),
    /// Report the device as offline
    Offline,
}

/// Loading capability that counts `ready()` calls
#[derive(Debug, Clone, Default)]
pub struct MemoryLoadingApi {
    calls: Rc<Cell<usize>>,
}

impl MemoryLoadingApi {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl LoadingApi for MemoryLoadingApi {
    fn ready(&self) {
        trace!("memory: ready()");
        self.calls.set(self.calls.get() + 1);
    }
}

/// In-memory SDK handle
pub struct MemorySdk {
    loading: Option<MemoryLoadingApi>,
    device: DeviceInfo,
    ad_behavior: AdBehavior,
    pending_ad: RefCell<Option<AdvCallbacks>>,
    ads_requested: Cell<usize>,
    player: MemoryPlayer,
    player_requests: RefCell<Vec<PlayerOptions>>,
    player_failure: RefCell<Option<Error>>,
    ad_failure: RefCell<Option<Error>>,
}

impl MemorySdk {
    /// Desktop device, loading capability present, ads closed as shown.
    pub fn new() -> Self {
        Self {
            loading: Some(MemoryLoadingApi::default()),
            device: DeviceInfo::new(DeviceKind::Desktop),
            ad_behavior: AdBehavior::Close { was_shown: true },
            pending_ad: RefCell::new(None),
            ads_requested: Cell::new(0),
            player: MemoryPlayer::new("memory-player"),
            player_requests: RefCell::new(Vec::new()),
            player_failure: RefCell::new(None),
            ad_failure: RefCell::new(None),
        }
    }

    pub fn without_loading_api(mut self) -> Self {
        self.loading = None;
        self
    }

    pub fn with_device(mut self, kind: DeviceKind) -> Self {
        self.device = DeviceInfo::new(kind);
        self
    }

    pub fn with_ad_behavior(mut self, behavior: AdBehavior) -> Self {
        self.ad_behavior = behavior;
        self
    }

    pub fn with_player(mut self, player: MemoryPlayer) -> Self {
        self.player = player;
        self
    }

    /// The player handed out by `get_player`
    pub fn player(&self) -> &MemoryPlayer {
        &self.player
    }

    /// Number of `LoadingAPI.ready()` calls so far
    pub fn ready_calls(&self) -> usize {
        self.loading.as_ref().map_or(0, MemoryLoadingApi::calls)
    }

    pub fn ads_requested(&self) -> usize {
        self.ads_requested.get()
    }

    /// Options passed to every `get_player` call, oldest first
    pub fn player_requests(&self) -> Vec<PlayerOptions> {
        self.player_requests.borrow().clone()
    }

    /// Make the next `get_player` call fail with `err`
    pub fn fail_next_get_player(&self, err: Error) {
        *self.player_failure.borrow_mut() = Some(err);
    }

    /// Make the next `show_fullscreen_adv` call throw `err`
    pub fn fail_next_ad(&self, err: Error) {
        *self.ad_failure.borrow_mut() = Some(err);
    }

    pub fn has_pending_ad(&self) -> bool {
        self.pending_ad.borrow().is_some()
    }

    /// Remove the held callbacks without firing anything
    pub fn take_pending_ad(&self) -> Option<AdvCallbacks> {
        self.pending_ad.borrow_mut().take()
    }

    /// Fire `onOpen` on the held ad. Returns false if nothing was listening.
    pub fn fire_open(&self) -> bool {
        let on_open = self
            .pending_ad
            .borrow_mut()
            .as_mut()
            .and_then(|callbacks| callbacks.on_open.take());
        match on_open {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    /// Fire `onClose` and release the held ad.
    pub fn fire_close(&self, was_shown: bool) -> bool {
        let on_close = self.take_pending_ad().and_then(|c| c.on_close);
        match on_close {
            Some(f) => {
                f(was_shown);
                true
            }
            None => false,
        }
    }

    /// Fire `onError` and release the held ad.
    pub fn fire_error(&self, err: Error) -> bool {
        let on_error = self.take_pending_ad().and_then(|c| c.on_error);
        match on_error {
            Some(f) => {
                f(err);
                true
            }
            None => false,
        }
    }

    /// Fire `onOffline` and release the held ad.
    pub fn fire_offline(&self) -> bool {
        let on_offline = self.take_pending_ad().and_then(|c| c.on_offline);
        match on_offline {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }
}

impl Default for MemorySdk {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl SdkHandle for MemorySdk {
    type Loading = MemoryLoadingApi;
    type Player = MemoryPlayer;

    fn loading_api(&self) -> Option<MemoryLoadingApi> {
        self.loading.clone()
    }

    fn show_fullscreen_adv(&self, callbacks: AdvCallbacks) -> Result<()> {
        trace!("memory: showFullscreenAdv behavior={:?}", self.ad_behavior);
        self.ads_requested.set(self.ads_requested.get() + 1);
        if let Some(err) = self.ad_failure.borrow_mut().take() {
            return Err(err);
        }
        *self.pending_ad.borrow_mut() = Some(callbacks);

        match &self.ad_behavior {
            AdBehavior::Manual => {}
            AdBehavior::Close { was_shown } => {
                if *was_shown {
                    self.fire_open();
                }
                self.fire_close(*was_shown);
            }
            AdBehavior::Error(message) => {
                self.fire_error(Error::PlatformError(message.clone()));
            }
            AdBehavior::Offline => {
                self.fire_offline();
            }
        }
        Ok(())
    }

    async fn get_player(&self, options: &PlayerOptions) -> Result<MemoryPlayer> {
        trace!("memory: getPlayer({:?})", options);
        self.player_requests.borrow_mut().push(*options);
        if let Some(err) = self.player_failure.borrow_mut().take() {
            return Err(err);
        }
        Ok(self.player.clone())
    }

    fn device_info(&self) -> DeviceInfo {
        self.device
    }
}

struct PlayerState {
    unique_id: String,
    stats: RefCell<StatMap>,
    reads: RefCell<Vec<Vec<String>>>,
    writes: RefCell<Vec<StatMap>>,
    ack: RefCell<serde_json::Value>,
    failure: RefCell<Option<Error>>,
}

/// In-memory player; clones share the same state
#[derive(Clone)]
pub struct MemoryPlayer {
    state: Rc<PlayerState>,
}

impl MemoryPlayer {
    pub fn new(unique_id: impl Into<String>) -> Self {
        Self {
            state: Rc::new(PlayerState {
                unique_id: unique_id.into(),
                stats: RefCell::new(StatMap::new()),
                reads: RefCell::new(Vec::new()),
                writes: RefCell::new(Vec::new()),
                ack: RefCell::new(serde_json::Value::Bool(true)),
                failure: RefCell::new(None),
            }),
        }
    }

    pub fn with_stat(self, key: impl Into<String>, value: f64) -> Self {
        self.state.stats.borrow_mut().insert(key.into(), value);
        self
    }

    /// Whether `other` is a handle to the same player
    pub fn same_as(&self, other: &MemoryPlayer) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    pub fn stat(&self, key: &str) -> Option<f64> {
        self.state.stats.borrow().get(key).copied()
    }

    /// Value `set_stats` resolves with
    pub fn set_ack(&self, ack: serde_json::Value) {
        *self.state.ack.borrow_mut() = ack;
    }

    /// Make the next `get_stats` or `set_stats` fail with `err`
    pub fn fail_next(&self, err: Error) {
        *self.state.failure.borrow_mut() = Some(err);
    }

    /// Key batches passed to `get_stats`, oldest first
    pub fn reads(&self) -> Vec<Vec<String>> {
        self.state.reads.borrow().clone()
    }

    /// Maps passed to `set_stats`, oldest first
    pub fn writes(&self) -> Vec<StatMap> {
        self.state.writes.borrow().clone()
    }

    fn take_failure(&self) -> Result<()> {
        match self.state.failure.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for MemoryPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryPlayer")
            .field("unique_id", &self.state.unique_id)
            .finish_non_exhaustive()
    }
}

#[async_trait(?Send)]
impl PlayerHandle for MemoryPlayer {
    fn unique_id(&self) -> String {
        self.state.unique_id.clone()
    }

    async fn get_stats(&self, keys: &[&str]) -> Result<StatMap> {
        trace!("memory: getStats({:?})", keys);
        self.state
            .reads
            .borrow_mut()
            .push(keys.iter().map(|k| k.to_string()).collect());
        self.take_failure()?;

        let stats = self.state.stats.borrow();
        // An empty key list reads every stat.
        if keys.is_empty() {
            return Ok(stats.clone());
        }
        Ok(keys
            .iter()
            .filter_map(|k| stats.get(*k).map(|v| (k.to_string(), *v)))
            .collect())
    }

    async fn set_stats(&self, stats: &StatMap) -> Result<serde_json::Value> {
        trace!("memory: setStats({:?})", stats);
        self.take_failure()?;
        self.state.writes.borrow_mut().push(stats.clone());
        self.state
            .stats
            .borrow_mut()
            .extend(stats.iter().map(|(k, v)| (k.clone(), *v)));
        Ok(self.state.ack.borrow().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let sdk = MemorySdk::new();
        assert_eq!(sdk.ready_calls(), 0);
        assert!(sdk.device_info().is_desktop());
        assert_eq!(sdk.player().unique_id(), "memory-player");
    }

    #[test]
    fn test_scripted_close_fires_open_then_close() {
        let sdk = MemorySdk::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let callbacks = AdvCallbacks::new()
            .on_open({
                let log = log.clone();
                move || log.borrow_mut().push("open".to_string())
            })
            .on_close({
                let log = log.clone();
                move |shown| log.borrow_mut().push(format!("close:{}", shown))
            });

        sdk.show_fullscreen_adv(callbacks).unwrap();
        assert_eq!(*log.borrow(), vec!["open", "close:true"]);
        assert!(!sdk.has_pending_ad());
    }

    #[test]
    fn test_manual_fire_without_listener() {
        let sdk = MemorySdk::new().with_ad_behavior(AdBehavior::Manual);
        sdk.show_fullscreen_adv(AdvCallbacks::new().on_close(|_| {}))
            .unwrap();
        assert!(sdk.has_pending_ad());
        assert!(!sdk.fire_open());
        assert!(!sdk.fire_offline());
        assert!(!sdk.has_pending_ad());
        assert!(!sdk.fire_close(true));
    }

    #[test]
    fn test_get_stats_filters_and_reads_all() {
        let player = MemoryPlayer::new("p").with_stat("a", 1.0).with_stat("b", 2.0);

        let some = tokio_test::block_on(player.get_stats(&["a", "zzz"])).unwrap();
        assert_eq!(some, StatMap::from([("a".to_string(), 1.0)]));

        let all = tokio_test::block_on(player.get_stats(&[])).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_set_stats_merges() {
        let player = MemoryPlayer::new("p").with_stat("a", 1.0);
        let clone = player.clone();

        tokio_test::block_on(clone.set_stats(&StatMap::from([("b".to_string(), 3.0)]))).unwrap();
        assert_eq!(player.stat("a"), Some(1.0));
        assert_eq!(player.stat("b"), Some(3.0));
    }
}
