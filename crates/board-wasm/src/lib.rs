//! # board-wasm
//!
//! WebAssembly bindings for the driftboard customizer.
//!
//! The marketing page embeds this module and wires it to its 3D scene: each
//! accepted selection is delivered to a JS callback that starts the scene
//! transition, and the scene calls `transition_complete` when its swap
//! animation finishes.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCustomizer } from 'driftboard-customizer';
//!
//! await init();
//!
//! const customizer = new WasmCustomizer(catalog, (finishId) => {
//!   scene.swapFinish(finishId, () => customizer.transition_complete());
//! });
//!
//! customizer.select('charred-ash');
//! applyDisplay(customizer.display());
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use board_core::FinishCatalog;
use board_customizer::{Customizer, SceneRenderer};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module (called automatically)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Bridges accepted selection targets to the page's scene callback
struct CallbackRenderer {
    on_target: js_sys::Function,
}

impl SceneRenderer for CallbackRenderer {
    fn begin_transition(&mut self, option_id: &str) {
        if let Err(err) = self
            .on_target
            .call1(&JsValue::NULL, &JsValue::from_str(option_id))
        {
            web_sys::console::error_1(&err);
        }
    }
}

/// Customizer state machine exposed to the page
#[wasm_bindgen]
pub struct WasmCustomizer {
    inner: Customizer<CallbackRenderer>,
}

#[wasm_bindgen]
impl WasmCustomizer {
    /// Create a customizer.
    ///
    /// `catalog` is the finish catalog as `{ finishes: [...] }`; `on_target`
    /// receives each accepted finish id and should start the scene
    /// transition.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog: JsValue, on_target: js_sys::Function) -> Result<WasmCustomizer, JsValue> {
        let catalog: FinishCatalog = serde_wasm_bindgen::from_value(catalog)
            .map_err(|e| JsValue::from_str(&format!("Invalid catalog: {e}")))?;

        let inner = Customizer::new(catalog, CallbackRenderer { on_target })
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self { inner })
    }

    /// Handle a selection from the page's finish buttons
    pub fn select(&mut self, option_id: &str) {
        self.inner.select(option_id);
    }

    /// Completion signal from the 3D scene
    pub fn transition_complete(&mut self) {
        self.inner.on_transition_complete();
    }

    /// Whether a scene transition is in flight (for disabling the controls)
    pub fn is_transitioning(&self) -> bool {
        self.inner.is_transitioning()
    }

    /// Currently selected finish id
    pub fn selected_id(&self) -> String {
        self.inner.selected_id().to_string()
    }

    /// Derived display state `{ name, marquee, theme }` for the page
    pub fn display(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.current_display())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Validate a finish id format
#[wasm_bindgen]
pub fn validate_finish_id(finish_id: &str) -> bool {
    !finish_id.is_empty()
        && finish_id.len() <= 100
        && finish_id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Log to browser console
#[wasm_bindgen]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
