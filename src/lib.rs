#![cfg(target_arch = "wasm32")]
use canopy_core::{
    compute_placement, plan_update, ConfigStore, Configuration, LayoutSink, PlacementResult,
    SceneUpdate,
};
use wasm_bindgen::prelude::*;

mod payload;

use payload::{instance_floats, LayoutPayload};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("canopy-web starting");
    Ok(())
}

#[inline]
fn js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

fn to_js<T: serde::Serialize>(value: &T) -> anyhow::Result<JsValue> {
    let text = serde_json::to_string(value)?;
    js_sys::JSON::parse(&text).map_err(|e| anyhow::anyhow!("JSON.parse failed: {:?}", e))
}

/// Forwards published layouts to the scene layer's callback.
struct JsSink {
    on_layout: js_sys::Function,
}

impl LayoutSink for JsSink {
    fn apply(&mut self, config: &Configuration, placement: &PlacementResult, update: SceneUpdate) {
        let payload = LayoutPayload::new(config, placement, update);
        let value = match to_js(&payload) {
            Ok(v) => v,
            Err(e) => {
                log::error!("[bridge] layout payload: {:#}", e);
                return;
            }
        };
        let instances = js_sys::Float32Array::from(instance_floats(placement).as_slice());
        if let Err(e) = self.on_layout.call2(&JsValue::NULL, &value, &instances) {
            log::error!("[bridge] onLayout callback threw: {:?}", e);
        }
    }
}

/// Selection store bound to a single scene-update callback.
///
/// JS: `const c = new Configurator((layout, instances) => ...)`, then
/// `c.select("size", "Large")` for every menu pick.
#[wasm_bindgen]
pub struct Configurator {
    store: ConfigStore,
    sink: JsSink,
}

#[wasm_bindgen]
impl Configurator {
    #[wasm_bindgen(constructor)]
    pub fn new(on_layout: js_sys::Function) -> Configurator {
        Configurator {
            store: ConfigStore::default(),
            sink: JsSink { on_layout },
        }
    }

    /// Apply a menu selection and publish the resulting layout.
    pub fn select(&mut self, category: &str, value: &str) -> Result<bool, JsValue> {
        let changed = self
            .store
            .select_raw(category, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        if changed {
            self.store.publish(&mut self.sink);
        }
        Ok(changed)
    }

    #[wasm_bindgen(js_name = setDimensions)]
    pub fn set_dimensions(&mut self, length: f32, width: f32) {
        let mut config = self.store.configuration().clone();
        config.length = Some(length);
        config.width = Some(width);
        if self.store.replace(config) {
            self.store.publish(&mut self.sink);
        }
    }

    /// Replace the whole configuration from a JSON string and publish it.
    #[wasm_bindgen(js_name = load)]
    pub fn load(&mut self, config_json: &str) -> Result<(), JsValue> {
        let config: Configuration = serde_json::from_str(config_json)
            .map_err(|e| js_err(anyhow::Error::new(e).context("parsing configuration")))?;
        self.store.replace(config);
        self.store.publish(&mut self.sink);
        Ok(())
    }

    /// Re-send the current layout, e.g. after the scene layer finished loading assets.
    pub fn publish(&mut self) -> Result<JsValue, JsValue> {
        let update = self.store.publish(&mut self.sink);
        to_js(&update).map_err(js_err)
    }

    pub fn configuration(&self) -> Result<JsValue, JsValue> {
        to_js(self.store.configuration()).map_err(js_err)
    }
}

/// Stateless layout for a JSON configuration; always reports a rebuild.
#[wasm_bindgen(js_name = computeLayout)]
pub fn compute_layout(config_json: &str) -> Result<JsValue, JsValue> {
    let config: Configuration = serde_json::from_str(config_json)
        .map_err(|e| js_err(anyhow::Error::new(e).context("parsing configuration")))?;
    let placement = compute_placement(&config);
    let payload = LayoutPayload::new(&config, &placement, plan_update(None, &placement));
    to_js(&payload).map_err(js_err)
}
