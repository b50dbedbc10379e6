//! Moving values across the JS boundary
//!
//! Option objects and acknowledgements go through JSON: `serde_json` on the
//! Rust side, the global `JSON` object on the JS side. Stats are copied
//! number by number so non-finite values survive the trip.

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use ysdk_core::{Error, Result, StatMap};

/// Convert a thrown JS value or rejected promise into an [`Error`].
pub fn platform_error(value: JsValue) -> Error {
    let message = if let Some(s) = value.as_string() {
        s
    } else if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else {
        format!("{:?}", value)
    };
    Error::PlatformError(message)
}

pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(platform_error)
}

/// `undefined` decodes as JSON `null`.
pub fn from_js<T: DeserializeOwned>(value: &JsValue) -> Result<T> {
    if value.is_undefined() {
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }
    let json = js_sys::JSON::stringify(value).map_err(platform_error)?;
    Ok(serde_json::from_str(&String::from(json))?)
}

/// Build the plain object passed to `setStats`.
pub fn stats_to_js(stats: &StatMap) -> Result<JsValue> {
    let object = js_sys::Object::new();
    for (key, value) in stats {
        js_sys::Reflect::set(&object, &JsValue::from_str(key), &JsValue::from_f64(*value))
            .map_err(platform_error)?;
    }
    Ok(object.into())
}

/// Read the object resolved by `getStats`.
///
/// Entries that are not numbers are skipped, so they read as never set.
pub fn stats_from_js(value: &JsValue) -> Result<StatMap> {
    if value.is_undefined() || value.is_null() {
        return Ok(StatMap::new());
    }
    let object: &js_sys::Object = value
        .dyn_ref()
        .ok_or_else(|| Error::PlatformError(format!("getStats resolved with {:?}", value)))?;

    let mut stats = StatMap::new();
    for key in js_sys::Object::keys(object).iter() {
        let Some(name) = key.as_string() else {
            continue;
        };
        let entry = js_sys::Reflect::get(object, &key).map_err(platform_error)?;
        if let Some(number) = entry.as_f64() {
            stats.insert(name, number);
        }
    }
    Ok(stats)
}

/// View a value produced by `Closure::once_into_js` as a function.
pub fn into_function(value: JsValue) -> js_sys::Function {
    value.unchecked_into()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;
    use ysdk_core::PlayerOptions;

    #[wasm_bindgen_test]
    fn test_undefined_ack_is_null() {
        let ack: serde_json::Value = from_js(&JsValue::UNDEFINED).unwrap();
        assert_eq!(ack, serde_json::Value::Null);
    }

    #[wasm_bindgen_test]
    fn test_ack_passes_through() {
        let ack: serde_json::Value = from_js(&JsValue::TRUE).unwrap();
        assert_eq!(ack, serde_json::Value::Bool(true));
    }

    #[wasm_bindgen_test]
    fn test_platform_error_from_string() {
        let err = platform_error(JsValue::from_str("USER_NOT_AUTHORIZED"));
        assert_eq!(err, Error::PlatformError("USER_NOT_AUTHORIZED".into()));
    }

    #[wasm_bindgen_test]
    fn test_platform_error_from_js_error() {
        let err = platform_error(js_sys::Error::new("adv is undefined").into());
        assert_eq!(err, Error::PlatformError("adv is undefined".into()));
    }

    #[wasm_bindgen_test]
    fn test_platform_error_from_other_value() {
        match platform_error(JsValue::from_f64(42.0)) {
            Error::PlatformError(message) => assert!(message.contains("42")),
            other => panic!("Expected PlatformError, got {:?}", other),
        }
    }

    #[wasm_bindgen_test]
    fn test_player_options_shape() {
        let options = to_js(&PlayerOptions::new(true)).unwrap();
        let scopes = js_sys::Reflect::get(&options, &JsValue::from_str("scopes")).unwrap();
        assert_eq!(scopes.as_bool(), Some(true));
        assert_eq!(js_sys::Object::keys(options.unchecked_ref()).length(), 1);
    }

    #[wasm_bindgen_test]
    fn test_stats_keep_non_finite_values() {
        let stats = StatMap::from([
            ("inf".to_string(), f64::INFINITY),
            ("nan".to_string(), f64::NAN),
            ("k".to_string(), 5.0),
        ]);
        let object = stats_to_js(&stats).unwrap();

        let inf = js_sys::Reflect::get(&object, &JsValue::from_str("inf")).unwrap();
        assert_eq!(inf.as_f64(), Some(f64::INFINITY));

        let back = stats_from_js(&object).unwrap();
        assert_eq!(back.get("k"), Some(&5.0));
        assert_eq!(back.get("inf"), Some(&f64::INFINITY));
        assert!(back.get("nan").is_some_and(|v| v.is_nan()));
    }

    #[wasm_bindgen_test]
    fn test_stats_skip_non_numbers() {
        let object = js_sys::Object::new();
        js_sys::Reflect::set(&object, &JsValue::from_str("k"), &JsValue::NULL).unwrap();
        js_sys::Reflect::set(&object, &JsValue::from_str("n"), &JsValue::from_f64(2.0)).unwrap();

        let stats = stats_from_js(&object.into()).unwrap();
        assert_eq!(stats, StatMap::from([("n".to_string(), 2.0)]));
        assert!(stats_from_js(&JsValue::UNDEFINED).unwrap().is_empty());
    }
}
