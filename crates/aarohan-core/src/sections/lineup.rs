use crate::content::{Artist, ARTISTS};
use crate::error::{Result, SiteError};
use crate::hub::OverlayHub;
use crate::modal::{CloseReason, Modal, Transition};
use crate::overlay::SurfaceId;

/// Artist cards plus the artist detail modal.
pub struct Lineup {
    artists: &'static [Artist],
    detail: Modal<usize>,
}

impl Lineup {
    pub fn new(hub: &OverlayHub) -> Self {
        Self::with_artists(hub, ARTISTS)
    }

    pub fn with_artists(hub: &OverlayHub, artists: &'static [Artist]) -> Self {
        Self {
            artists,
            detail: Modal::new(hub.register(SurfaceId::ArtistDetail)),
        }
    }

    pub fn select(&mut self, index: usize) -> Result<Transition> {
        if index >= self.artists.len() {
            return Err(SiteError::UnknownItem {
                section: "lineup",
                index,
            });
        }
        log::info!("[lineup] open {}", self.artists[index].name);
        Ok(self.detail.open(index))
    }

    pub fn close(&mut self, reason: CloseReason) -> bool {
        self.detail.close(reason)
    }

    pub fn selected(&self) -> Option<&'static Artist> {
        let artists = self.artists;
        self.detail.payload().map(|i| &artists[*i])
    }

    pub fn is_open(&self) -> bool {
        self.detail.is_open()
    }

    pub fn artists(&self) -> &'static [Artist] {
        self.artists
    }
}
