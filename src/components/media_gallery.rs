use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::ui::{BrandButton, ButtonVariant, Card};
use crate::media::gallery::{GalleryAction, GalleryState, CLEAR_DELAY_MS};
use crate::media::video::VideoDescriptor;

#[derive(Properties, PartialEq)]
struct VideoCardProps {
    video: VideoDescriptor,
    on_watch: Callback<VideoDescriptor>,
}

#[function_component(VideoCard)]
fn video_card(props: &VideoCardProps) -> Html {
    let thumb_failed = use_state(|| false);
    let video = &props.video;

    let thumbnail = if *thumb_failed {
        None
    } else {
        video.thumbnail_url().ok()
    };

    let on_thumb_error = {
        let thumb_failed = thumb_failed.clone();
        let title = video.title.clone();
        Callback::from(move |_: Event| {
            warn!("Thumbnail for \"{}\" failed to load, showing placeholder", title);
            thumb_failed.set(true);
        })
    };

    let on_watch = {
        let video = video.clone();
        props.on_watch.reform(move |_: MouseEvent| video.clone())
    };

    html! {
        <Card title={video.title.clone()} class="video-card">
            <div class="video-thumb">
                if let Some(src) = thumbnail {
                    <img
                        src={src}
                        alt={format!("{} thumbnail", video.title)}
                        onerror={on_thumb_error}
                    />
                } else {
                    <div class="video-thumb-placeholder">
                        <IconSvg icon={Icon::PlayCircle} size={40} />
                    </div>
                }
            </div>
            <BrandButton variant={ButtonVariant::Outline} class="video-watch" onclick={on_watch}>
                <IconSvg icon={Icon::PlayCircle} />
                {" Watch"}
            </BrandButton>
        </Card>
    }
}

#[derive(Properties, PartialEq)]
pub struct MediaGalleryProps {
    pub videos: Vec<VideoDescriptor>,
}

#[function_component(MediaGallery)]
pub fn media_gallery(props: &MediaGalleryProps) -> Html {
    let state = use_reducer(GalleryState::default);
    // Pending clear after a close. Dropping the Timeout cancels it.
    let clear_timer = use_mut_ref(|| None::<Timeout>);

    let open_video = {
        let state = state.clone();
        let clear_timer = clear_timer.clone();
        Callback::from(move |video: VideoDescriptor| {
            if video.embed_url().is_ok() {
                drop(clear_timer.borrow_mut().take());
            }
            state.dispatch(GalleryAction::Open(video));
        })
    };

    let close_video = {
        let state = state.clone();
        let clear_timer = clear_timer.clone();
        Callback::from(move |_: ()| {
            if !state.is_open() {
                return;
            }
            let generation = state.generation();
            state.dispatch(GalleryAction::Close);
            let dispatcher = state.dispatcher();
            *clear_timer.borrow_mut() = Some(Timeout::new(CLEAR_DELAY_MS, move || {
                dispatcher.dispatch(GalleryAction::ClearExpired(generation));
            }));
        })
    };

    // Escape closes the overlay while it is showing.
    {
        let close_video = close_video.clone();
        use_effect_with_deps(
            move |(is_open, _generation): &(bool, u64)| {
                let document = web_sys::window().and_then(|w| w.document());
                let listener = match (*is_open, document) {
                    (true, Some(document)) => {
                        let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                close_video.emit(());
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>);
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                        Some((document, keydown))
                    }
                    _ => None,
                };
                move || {
                    if let Some((document, keydown)) = listener {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (state.is_open(), state.generation()),
        );
    }

    let player = state
        .playing()
        .and_then(|video| video.embed_url().ok().map(|src| (video.clone(), src)));

    let on_backdrop_click = close_video.reform(|_: MouseEvent| ());
    let on_close_click = close_video.reform(|_: MouseEvent| ());
    let contain_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <>
            <div class="media-grid">
                {
                    props.videos.iter().enumerate().map(|(idx, video)| {
                        html! {
                            <VideoCard key={idx} video={video.clone()} on_watch={open_video.clone()} />
                        }
                    }).collect::<Html>()
                }
            </div>

            if let Some((video, src)) = player {
                <div class="video-modal-backdrop" onclick={on_backdrop_click}>
                    <div class="video-modal" role="dialog" aria-modal="true" onclick={contain_click}>
                        <button type="button" class="video-modal-close" onclick={on_close_click}>
                            {"Close"}
                        </button>
                        <div class="video-frame">
                            // Keyed by id so switching videos recreates the iframe.
                            <iframe
                                key={video.external_id.clone()}
                                src={src}
                                title={video.title.clone()}
                                allow="autoplay; encrypted-media; fullscreen; picture-in-picture"
                            />
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
