#![allow(dead_code)]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Fresh container appended to the body, so each test queries its own subtree.
pub fn mount_point() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

/// Lets the Yew scheduler flush pending renders and effects.
pub async fn settle() {
    TimeoutFuture::new(20).await;
}

pub async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}

pub fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

pub fn find_all(root: &Element, selector: &str) -> Vec<Element> {
    let nodes = root.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn click(element: &Element) {
    element.clone().dyn_into::<HtmlElement>().unwrap().click();
}

pub fn texts(root: &Element, selector: &str) -> Vec<String> {
    find_all(root, selector)
        .iter()
        .map(|el| el.text_content().unwrap_or_default().trim().to_string())
        .collect()
}
