//! Raw bindings to the SDK objects

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// SDK handle resolved by `YaGames.init()`
    #[derive(Debug, Clone)]
    pub type YaGames;

    #[wasm_bindgen(catch, static_method_of = YaGames, js_name = init)]
    pub fn init() -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, getter, js_name = deviceInfo)]
    pub fn device_info(this: &YaGames) -> DeviceInfo;

    #[wasm_bindgen(method, catch, js_name = getPlayer)]
    pub fn get_player(this: &YaGames, options: &JsValue) -> Result<js_sys::Promise, JsValue>;

    pub type DeviceInfo;

    #[wasm_bindgen(method, js_name = isMobile)]
    pub fn is_mobile(this: &DeviceInfo) -> bool;
    #[wasm_bindgen(method, js_name = isDesktop)]
    pub fn is_desktop(this: &DeviceInfo) -> bool;
    #[wasm_bindgen(method, js_name = isTablet)]
    pub fn is_tablet(this: &DeviceInfo) -> bool;
    #[wasm_bindgen(method, js_name = isTV)]
    pub fn is_tv(this: &DeviceInfo) -> bool;

    /// `features.LoadingAPI`
    #[derive(Debug, Clone)]
    pub type LoadingApi;

    #[wasm_bindgen(method)]
    pub fn ready(this: &LoadingApi);

    #[derive(Debug, Clone)]
    pub type Player;

    #[wasm_bindgen(method, js_name = getUniqueID)]
    pub fn get_unique_id(this: &Player) -> String;

    #[wasm_bindgen(method, catch, js_name = getStats)]
    pub fn get_stats(this: &Player, keys: &js_sys::Array) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = setStats)]
    pub fn set_stats(this: &Player, stats: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[wasm_bindgen(module = "/src/lib.js")]
extern "C" {
    pub fn loading_api(ysdk: &YaGames) -> Option<LoadingApi>;

    #[wasm_bindgen(catch)]
    pub fn show_fullscreen_adv(
        ysdk: &YaGames,
        on_close: Option<js_sys::Function>,
        on_open: Option<js_sys::Function>,
        on_error: Option<js_sys::Function>,
        on_offline: Option<js_sys::Function>,
    ) -> Result<(), JsValue>;
}
