//! Browser backend for the Yandex Games SDK
//!
//! This crate provides:
//! - wasm-bindgen bindings to the `YaGames` SDK objects
//! - Injection of the SDK `<script>` into the page
//! - `SdkHandle`/`PlayerHandle` implementations for `ysdk-core`

pub mod backend;
pub mod convert;
pub mod loader;
pub mod sys;

pub use backend::{WebLoadingApi, WebPlayer, WebSdk};

use ysdk_core::{Result, SdkConfig, Ysdk};

/// Load and initialize the SDK, returning the typed client
pub async fn init(config: &SdkConfig) -> Result<Ysdk<WebSdk>> {
    Ok(Ysdk::new(WebSdk::init(config).await?))
}
