//! Value types passed across the SDK boundary

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Batch of numeric player statistics keyed by name
pub type StatMap = HashMap<String, f64>;

/// Options for `getPlayer`
///
/// Serialized as `{"scopes": <bool>}` and handed to the platform as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerOptions {
    /// Request access to personal data (name, avatar)
    pub scopes: bool,
}

impl PlayerOptions {
    pub fn new(scopes: bool) -> Self {
        Self { scopes }
    }
}

/// Kind of device the game is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Desktop,
    Mobile,
    Tablet,
    Tv,
}

/// Device information reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub kind: DeviceKind,
}

impl DeviceInfo {
    pub fn new(kind: DeviceKind) -> Self {
        Self { kind }
    }

    pub fn is_mobile(&self) -> bool {
        self.kind == DeviceKind::Mobile
    }

    pub fn is_desktop(&self) -> bool {
        self.kind == DeviceKind::Desktop
    }

    pub fn is_tablet(&self) -> bool {
        self.kind == DeviceKind::Tablet
    }
}

/// Called when the ad closes, with whether it was actually shown
pub type OnClose = Box<dyn FnOnce(bool)>;
/// Called when the ad opens
pub type OnOpen = Box<dyn FnOnce()>;
/// Called when the ad fails
pub type OnError = Box<dyn FnOnce(Error)>;
/// Called when the ad cannot be shown for lack of network
pub type OnOffline = Box<dyn FnOnce()>;

/// Lifecycle hooks for a fullscreen ad
///
/// Every hook is optional; the platform calls at most one of
/// `on_close`/`on_error`/`on_offline`, optionally preceded by `on_open`.
#[derive(Default)]
pub struct AdvCallbacks {
    pub on_close: Option<OnClose>,
    pub on_open: Option<OnOpen>,
    pub on_error: Option<OnError>,
    pub on_offline: Option<OnOffline>,
}

impl AdvCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_close(mut self, f: impl FnOnce(bool) + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    pub fn on_open(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_open = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl FnOnce(Error) + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn on_offline(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_offline = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for AdvCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvCallbacks")
            .field("on_close", &self.on_close.is_some())
            .field("on_open", &self.on_open.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_offline", &self.on_offline.is_some())
            .finish()
    }
}
