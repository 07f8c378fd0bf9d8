// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Shared test harness for the logo tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div id="{id}">`, attach it to `<body>`, and return it.
pub fn create_container(id: &str) -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    div.set_id(id);
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the container from `<body>` so subsequent tests start clean.
pub fn cleanup(container: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(container)
        .ok();
}

/// Let the Yew scheduler flush pending renders of a mounted component.
pub async fn flush() {
    sleep(Duration::ZERO).await;
}

// ---------------------------------------------------------------------------
// Query helpers
// ---------------------------------------------------------------------------

pub fn count(root: &web_sys::Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

pub fn wrapper(root: &web_sys::Element) -> web_sys::Element {
    root.query_selector(".phronos-logo")
        .unwrap()
        .expect("should render a .phronos-logo wrapper")
}

pub fn wrapper_style(root: &web_sys::Element) -> String {
    wrapper(root).get_attribute("style").unwrap_or_default()
}

pub fn has_light_marker(root: &web_sys::Element) -> bool {
    wrapper(root).class_list().contains("light")
}
