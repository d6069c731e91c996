#![cfg(target_arch = "wasm32")]

mod common;

use common::{click, find, find_all, mount_point, settle, texts};
use d3_site::config::LINKS;
use d3_site::media::video::VideoDescriptor;
use d3_site::pages::site::{Site, SiteProps};
use wasm_bindgen_test::*;
use web_sys::Element;
use yew::prelude::*;
use yew::AppHandle;

wasm_bindgen_test_configure!(run_in_browser);

async fn mount() -> (Element, AppHandle<Site>) {
    let root = mount_point();
    let handle = yew::Renderer::<Site>::with_root_and_props(root.clone(), SiteProps::default()).render();
    settle().await;
    (root, handle)
}

fn teardown(root: Element, handle: AppHandle<Site>) {
    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn sections_render_with_ids() {
    let (root, handle) = mount().await;

    for id in ["home", "about", "athletics", "nil", "journal", "podcast", "media", "contact"] {
        assert!(find(&root, &format!("#{}", id)).is_some(), "missing #{}", id);
    }

    teardown(root, handle);
}

#[wasm_bindgen_test]
async fn key_links_wired() {
    let (root, handle) = mount().await;

    for href in [LINKS.instagram, LINKS.skool, LINKS.train_build_brand, LINKS.email] {
        let selector = format!("a[href=\"{}\"]", href);
        assert!(find(&root, &selector).is_some(), "no link to {}", href);
    }

    teardown(root, handle);
}

#[wasm_bindgen_test]
async fn primary_cta_exists() {
    let (root, handle) = mount().await;

    let buttons = texts(&root, "button");
    assert!(buttons.iter().any(|text| text.contains("Partner with Dorian")));

    teardown(root, handle);
}

#[wasm_bindgen_test]
async fn icons_mounted() {
    let (root, handle) = mount().await;

    assert!(!find_all(&root, "svg").is_empty());

    teardown(root, handle);
}

#[wasm_bindgen_test]
async fn root_wrapper_unique_with_theme_vars() {
    let (root, handle) = mount().await;

    let roots = find_all(&root, "#dorian-root");
    assert_eq!(roots.len(), 1);

    let styles = web_sys::window()
        .unwrap()
        .get_computed_style(&roots[0])
        .unwrap()
        .unwrap();
    for var in ["--brand-navy", "--brand-gold", "--brand-cream"] {
        let value = styles.get_property_value(var).unwrap();
        assert!(!value.trim().is_empty(), "{} missing", var);
    }

    teardown(root, handle);
}

#[wasm_bindgen_test]
async fn header_uses_navy_background() {
    let (root, handle) = mount().await;

    let style = find(&root, "header")
        .and_then(|header| header.get_attribute("style"))
        .unwrap_or_default();
    assert!(style.contains("--brand-navy"));

    teardown(root, handle);
}

#[wasm_bindgen_test]
async fn hero_leadership_copy_present() {
    let (root, handle) = mount().await;

    let paragraphs = texts(&root, "#home p");
    assert!(paragraphs.iter().any(|p| {
        p.contains("Freshman & Sophomore ASB President; Current Junior Vice President")
    }));

    teardown(root, handle);
}

#[wasm_bindgen_test]
async fn journal_cover_present() {
    let (root, handle) = mount().await;

    assert!(find(&root, "#journal").is_some());
    assert!(find(&root, "img[alt=\"Train, Build, Brand Journal Cover\"]").is_some());

    teardown(root, handle);
}

#[wasm_bindgen_test]
async fn media_section_renders_bundled_catalog() {
    let (root, handle) = mount().await;

    assert_eq!(
        texts(&root, "#media .video-card .card-title"),
        vec!["Game Highlights", "Training Day", "Feature Story"]
    );

    teardown(root, handle);
}

#[wasm_bindgen_test]
async fn contact_form_is_inert() {
    let (root, handle) = mount().await;

    assert!(find(&root, "#contact form").is_none());
    assert_eq!(find_all(&root, "#contact input").len(), 2);
    assert!(find(&root, "#contact textarea").is_some());

    teardown(root, handle);
}

#[function_component(CatalogSwitcher)]
fn catalog_switcher() -> Html {
    let videos = use_state(|| Some(vec![VideoDescriptor::youtube("Game Highlights", "AcxoDAWb8Vk")]));
    let swap = {
        let videos = videos.clone();
        Callback::from(move |_: MouseEvent| {
            videos.set(Some(vec![
                VideoDescriptor::youtube("Training Day", "-1wbSlKZFeE"),
                VideoDescriptor::youtube("Feature Story", "UzFteJrMTX8"),
            ]))
        })
    };

    html! {
        <>
            <button id="swap-catalog" onclick={swap}>{"Swap"}</button>
            <Site videos={(*videos).clone()} />
        </>
    }
}

#[wasm_bindgen_test]
async fn media_section_follows_catalog_prop() {
    let root = mount_point();
    let handle = yew::Renderer::<CatalogSwitcher>::with_root(root.clone()).render();
    settle().await;

    assert_eq!(texts(&root, "#media .video-card .card-title"), vec!["Game Highlights"]);

    click(&find(&root, "#swap-catalog").unwrap());
    settle().await;

    assert_eq!(
        texts(&root, "#media .video-card .card-title"),
        vec!["Training Day", "Feature Story"]
    );

    handle.destroy();
    root.remove();
}
