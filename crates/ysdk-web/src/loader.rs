//! Injecting the SDK `<script>` into the page

use crate::convert::platform_error;
use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::oneshot;
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlScriptElement;
use ysdk_core::{Error, Result};

type LoadSlot = Rc<RefCell<Option<oneshot::Sender<Result<()>>>>>;

fn settle(slot: &LoadSlot, outcome: Result<()>) {
    if let Some(sender) = slot.borrow_mut().take() {
        let _ = sender.send(outcome);
    }
}

/// Whether the `YaGames` global is already defined
pub fn is_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("YaGames")).unwrap_or(false)
}

/// Load the SDK script unless the page already has it
pub async fn ensure_script(url: &str) -> Result<()> {
    if is_loaded() {
        debug!("YaGames already present, not loading {}", url);
        return Ok(());
    }
    load_script(url).await
}

/// Insert an async `<script src=url>` and wait for it to load
pub async fn load_script(url: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::Unavailable("window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| Error::Unavailable("document".into()))?;

    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(platform_error)?
        .dyn_into()
        .map_err(|_| Error::Unavailable("HTMLScriptElement".into()))?;
    script.set_src(url);
    script.set_async(true);

    let (sender, receiver) = oneshot::channel();
    let slot: LoadSlot = Rc::new(RefCell::new(Some(sender)));
    let on_load = Closure::once_into_js({
        let slot = slot.clone();
        move |_event: web_sys::Event| settle(&slot, Ok(()))
    });
    let on_error = Closure::once_into_js({
        let slot = slot.clone();
        let url = url.to_string();
        move |_event: web_sys::Event| settle(&slot, Err(Error::ScriptLoadError(url)))
    });
    drop(slot);
    script.set_onload(Some(on_load.unchecked_ref()));
    script.set_onerror(Some(on_error.unchecked_ref()));

    match document.get_elements_by_tag_name("script").get_with_index(0) {
        Some(first) => {
            let parent = first
                .parent_node()
                .ok_or_else(|| Error::Unavailable("script parent".into()))?;
            parent
                .insert_before(&script, Some(&first))
                .map_err(platform_error)?;
        }
        None => {
            let head = document
                .head()
                .ok_or_else(|| Error::Unavailable("head".into()))?;
            head.append_child(&script).map_err(platform_error)?;
        }
    }

    info!("Loading SDK script from {}", url);
    receiver
        .await
        .map_err(|_| Error::ScriptLoadError(url.to_string()))?
}
