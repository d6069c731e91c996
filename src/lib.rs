pub mod config;
pub mod media {
    pub mod gallery;
    pub mod video;
}
pub mod components {
    pub mod icons;
    pub mod media_gallery;
    pub mod ui;
}
pub mod pages {
    pub mod site;
}
