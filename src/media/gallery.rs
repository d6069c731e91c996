//! Open/close state for the video lightbox.
//!
//! The overlay hides as soon as it is closed, but the active video is only
//! released after [`CLEAR_DELAY_MS`]. Each successful open bumps a generation
//! counter and the delayed clear carries the generation it was scheduled
//! under, so a clear that fires after a reopen does nothing.

use std::rc::Rc;

use log::{info, warn};
use yew::Reducible;

use super::video::VideoDescriptor;

/// Grace period between hiding the overlay and dropping the active video.
pub const CLEAR_DELAY_MS: u32 = 200;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GalleryPhase {
    #[default]
    Closed,
    Open(VideoDescriptor),
    /// Overlay hidden, active video not yet released.
    Closing(VideoDescriptor),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    Open(VideoDescriptor),
    Close,
    ClearExpired(u64),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    phase: GalleryPhase,
    generation: u64,
}

impl GalleryState {
    pub fn phase(&self) -> &GalleryPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, GalleryPhase::Open(_))
    }

    pub fn active_video(&self) -> Option<&VideoDescriptor> {
        match &self.phase {
            GalleryPhase::Closed => None,
            GalleryPhase::Open(video) | GalleryPhase::Closing(video) => Some(video),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The video to mount in the overlay, if the overlay is showing.
    pub fn playing(&self) -> Option<&VideoDescriptor> {
        match &self.phase {
            GalleryPhase::Open(video) => Some(video),
            _ => None,
        }
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            GalleryAction::Open(video) => {
                if let Err(e) = video.embed_url() {
                    warn!(
                        "Refusing to open {} video \"{}\": {}",
                        video.provider.as_str(),
                        video.title,
                        e
                    );
                    return self;
                }
                if self.playing() == Some(&video) {
                    return self;
                }
                info!("Opening video \"{}\"", video.title);
                Rc::new(Self {
                    phase: GalleryPhase::Open(video),
                    generation: self.generation + 1,
                })
            }
            GalleryAction::Close => {
                if let GalleryPhase::Open(video) = &self.phase {
                    info!("Closing video \"{}\"", video.title);
                    return Rc::new(Self {
                        phase: GalleryPhase::Closing(video.clone()),
                        generation: self.generation,
                    });
                }
                self
            }
            GalleryAction::ClearExpired(generation) => {
                let expired = matches!(self.phase, GalleryPhase::Closing(_))
                    && generation == self.generation;
                if !expired {
                    return self;
                }
                Rc::new(Self {
                    phase: GalleryPhase::Closed,
                    generation: self.generation,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlights() -> VideoDescriptor {
        VideoDescriptor::youtube("Game Highlights", "AcxoDAWb8Vk")
    }

    fn training() -> VideoDescriptor {
        VideoDescriptor::youtube("Training Day", "-1wbSlKZFeE")
    }

    fn apply(state: Rc<GalleryState>, actions: Vec<GalleryAction>) -> Rc<GalleryState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    #[test]
    fn test_initial_state_is_closed() {
        let state = GalleryState::default();
        assert_eq!(state.phase(), &GalleryPhase::Closed);
        assert!(!state.is_open());
        assert!(state.active_video().is_none());
    }

    #[test]
    fn test_open_sets_active_video() {
        let state = Rc::new(GalleryState::default()).reduce(GalleryAction::Open(highlights()));
        assert!(state.is_open());
        assert_eq!(state.active_video(), Some(&highlights()));
        assert_eq!(state.playing(), Some(&highlights()));
    }

    #[test]
    fn test_open_while_open_replaces_video() {
        let state = apply(
            Rc::new(GalleryState::default()),
            vec![GalleryAction::Open(highlights()), GalleryAction::Open(training())],
        );
        assert_eq!(state.phase(), &GalleryPhase::Open(training()));
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_close_then_timer_clears() {
        let opened = Rc::new(GalleryState::default()).reduce(GalleryAction::Open(highlights()));
        let generation = opened.generation();
        let closing = opened.reduce(GalleryAction::Close);
        assert!(!closing.is_open());
        assert!(closing.playing().is_none());
        assert_eq!(closing.active_video(), Some(&highlights()));

        let closed = closing.reduce(GalleryAction::ClearExpired(generation));
        assert_eq!(closed.phase(), &GalleryPhase::Closed);
        assert!(closed.active_video().is_none());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let state = Rc::new(GalleryState::default());
        let after = state.clone().reduce(GalleryAction::Close);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn test_close_when_closing_is_noop() {
        let closing = apply(
            Rc::new(GalleryState::default()),
            vec![GalleryAction::Open(highlights()), GalleryAction::Close],
        );
        let after = closing.clone().reduce(GalleryAction::Close);
        assert!(Rc::ptr_eq(&closing, &after));
    }

    #[test]
    fn test_stale_clear_after_reopen_is_noop() {
        let opened = Rc::new(GalleryState::default()).reduce(GalleryAction::Open(highlights()));
        let stale = opened.generation();
        let reopened = apply(
            opened,
            vec![GalleryAction::Close, GalleryAction::Open(training())],
        );
        let after_timer = reopened.reduce(GalleryAction::ClearExpired(stale));
        assert_eq!(after_timer.phase(), &GalleryPhase::Open(training()));
        assert_eq!(after_timer.active_video(), Some(&training()));
    }

    #[test]
    fn test_stale_clear_after_reopen_same_video_is_noop() {
        let opened = Rc::new(GalleryState::default()).reduce(GalleryAction::Open(highlights()));
        let stale = opened.generation();
        let state = apply(
            opened,
            vec![
                GalleryAction::Close,
                GalleryAction::Open(highlights()),
                GalleryAction::Close,
                GalleryAction::ClearExpired(stale),
            ],
        );
        // Second close is still inside its own grace period.
        assert_eq!(state.phase(), &GalleryPhase::Closing(highlights()));
    }

    #[test]
    fn test_clear_while_open_is_noop() {
        let opened = Rc::new(GalleryState::default()).reduce(GalleryAction::Open(highlights()));
        let generation = opened.generation();
        let after = opened.reduce(GalleryAction::ClearExpired(generation));
        assert!(after.is_open());
    }

    #[test]
    fn test_malformed_id_open_is_noop() {
        let state = Rc::new(GalleryState::default());
        let after = state
            .clone()
            .reduce(GalleryAction::Open(VideoDescriptor::youtube("Broken", "")));
        assert!(Rc::ptr_eq(&state, &after));
        assert!(!after.is_open());
    }

    #[test]
    fn test_malformed_open_keeps_current_video() {
        let opened = Rc::new(GalleryState::default()).reduce(GalleryAction::Open(highlights()));
        let after = opened.reduce(GalleryAction::Open(VideoDescriptor::youtube("Broken", "a b")));
        assert_eq!(after.playing(), Some(&highlights()));
    }
}
