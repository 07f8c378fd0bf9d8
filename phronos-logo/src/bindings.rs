// SPDX-License-Identifier: MIT OR Apache-2.0

//! JavaScript surface of the widget.
//!
//! ```js
//! import init, { PhronosLogo, initLogging } from "./phronos_logo.js";
//!
//! await init();
//! initLogging();
//! const logo = new PhronosLogo("logo-container", { theme: "light", showDots: false });
//! logo.setSize(500);
//! ```

use serde_wasm_bindgen::to_value as to_js_value;
use wasm_bindgen::prelude::*;

use crate::options::{pixels_from_js, PartialDisplayOptions};
use crate::widget::LogoWidget;

#[wasm_bindgen(js_name = PhronosLogo)]
pub struct JsPhronosLogo {
    inner: LogoWidget,
}

#[wasm_bindgen(js_class = PhronosLogo)]
impl JsPhronosLogo {
    /// `options` may be omitted. A value that is not an object is logged and
    /// replaced by the defaults; mistyped keys fall back one by one.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, options: JsValue) -> JsPhronosLogo {
        let options = PartialDisplayOptions::from_js(&options).unwrap_or_else(|e| {
            log::warn!("{e}; using default options");
            PartialDisplayOptions::default()
        });
        Self {
            inner: LogoWidget::new(container_id, options),
        }
    }

    pub fn render(&mut self) {
        self.inner.render();
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, theme: &str) {
        self.inner.set_theme(theme);
    }

    /// Fractional sizes are rounded to whole pixels; `NaN` becomes 0.
    #[wasm_bindgen(js_name = setSize)]
    pub fn set_size(&mut self, size: f64) {
        self.inner.set_size(pixels_from_js(size));
    }

    /// Current options as `{ theme, showText, showDots, size }`.
    #[wasm_bindgen(getter)]
    pub fn options(&self) -> JsValue {
        to_js_value(self.inner.options()).unwrap_or_else(|e| {
            log::error!("failed to serialize display options: {e:?}");
            JsValue::UNDEFINED
        })
    }

    #[wasm_bindgen(getter, js_name = containerId)]
    pub fn container_id(&self) -> String {
        self.inner.container_id().to_string()
    }
}

#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    crate::init_logging();
}
