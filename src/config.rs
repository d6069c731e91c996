use crate::media::video::{parse_catalog, MediaError, VideoDescriptor};

pub struct Brand {
    pub navy: &'static str,
    pub gray: &'static str,
    pub cream: &'static str,
    pub gold: &'static str,
    pub gold_bright: &'static str,
    pub gold_dark: &'static str,
    pub white: &'static str,
}

// Law & Legacy palette
pub const BRAND: Brand = Brand {
    navy: "#001F3F",
    gray: "#3B3B3B",
    cream: "#F8F3E7",
    gold: "#C1A45C",
    gold_bright: "#D9C890",
    gold_dark: "#9E8647",
    white: "#ffffff",
};

pub struct Links {
    pub instagram: &'static str,
    pub skool: &'static str,
    pub train_build_brand: &'static str,
    pub email: &'static str,
}

pub const LINKS: Links = Links {
    instagram: "https://www.instagram.com/_iamd3_/",
    skool: "https://www.skool.com/the-nil-network-9895",
    train_build_brand: "https://www.TrainBuildBrand.com",
    email: "mailto:dorianlaw27@gmail.com",
};

pub const CONTACT_EMAIL: &str = "dorianlaw27@gmail.com";

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#athletics", "Athletics"),
    ("#nil", "NIL Network"),
    ("#journal", "Journal"),
    ("#podcast", "Podcast"),
    ("#media", "Media"),
    ("#contact", "Contact"),
];

const VIDEO_CATALOG: &str = include_str!("../config/videos.json");

pub fn asset_url(name: &str) -> String {
    format!("/assets/{}", name)
}

/// Palette as CSS custom properties, for the root element's style attribute.
pub fn css_vars() -> String {
    [
        ("--brand-navy", BRAND.navy),
        ("--brand-gray", BRAND.gray),
        ("--brand-cream", BRAND.cream),
        ("--brand-gold", BRAND.gold),
        ("--brand-gold-bright", BRAND.gold_bright),
        ("--brand-gold-dark", BRAND.gold_dark),
        ("--brand-white", BRAND.white),
    ]
    .iter()
    .map(|(name, value)| format!("{}: {};", name, value))
    .collect::<Vec<_>>()
    .join(" ")
}

pub fn gold_gradient() -> String {
    format!(
        "linear-gradient(135deg, {} 0%, {} 55%, {} 100%)",
        BRAND.gold, BRAND.gold_bright, BRAND.gold
    )
}

pub fn video_catalog() -> Result<Vec<VideoDescriptor>, MediaError> {
    parse_catalog(VIDEO_CATALOG)
}
