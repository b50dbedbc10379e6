//! # ysdk-core
//!
//! Adapter over the Yandex Games SDK handle.
//!
//! This crate provides:
//! - `SdkHandle`/`PlayerHandle` traits describing the platform object
//! - Forwarding operations (ready signal, fullscreen ads, player, stats)
//! - A typed `Ysdk`/`Player` client on top of them
//! - An in-memory backend for native builds and tests

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod ops;
pub mod sdk;
pub mod types;

pub use client::{Player, Ysdk};
pub use config::SdkConfig;
pub use error::{Error, Result};
pub use memory::{AdBehavior, MemoryPlayer, MemorySdk};
pub use ops::{
    get_numeric_stat, get_player, get_player_id, set_numeric_stat, show_fullscreen_ad,
    signal_ready,
};
pub use sdk::{LoadingApi, PlayerHandle, SdkHandle};
pub use types::{AdvCallbacks, DeviceInfo, DeviceKind, PlayerOptions, StatMap};
