//! Authenticated gallery reads and edits
//!
//! The client borrows the caller's access token and attaches it to each
//! request itself; the session manager is not involved in these calls.

use super::models::{Album, Id, Photo, Profile, User};
use crate::api::GalleryApi;
use crate::error::{GalleryError, GalleryResult};
use crate::session::Session;
use futures_util::future::try_join;
use serde::Serialize;
use tracing::{debug, error, info};

/// Users and albums shown on the home screen
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub users: Vec<User>,
    pub albums: Vec<Album>,
}

impl Overview {
    /// Albums owned by `user_id`
    pub fn albums_for(&self, user_id: &Id) -> Vec<&Album> {
        self.albums
            .iter()
            .filter(|a| a.user.as_ref() == Some(user_id))
            .collect()
    }

    /// Photos across all albums owned by `user_id`
    pub fn photo_count(&self, user_id: &Id) -> usize {
        self.albums_for(user_id)
            .iter()
            .map(|a| a.photo_count())
            .sum()
    }
}

/// An album together with its photos
#[derive(Debug, Clone, Serialize)]
pub struct AlbumView {
    pub album: Album,
    pub photos: Vec<Photo>,
}

/// Gallery client bound to one access token
pub struct GalleryClient<'a, G> {
    api: &'a G,
    token: String,
}

impl<'a, G: GalleryApi> GalleryClient<'a, G> {
    /// Create a client for an explicit token
    pub fn new(api: &'a G, token: impl Into<String>) -> Self {
        Self {
            api,
            token: token.into(),
        }
    }

    /// Create a client from the current session
    pub fn from_session(api: &'a G, session: &Session) -> GalleryResult<Self> {
        let token = session.bearer().ok_or(GalleryError::NotAuthenticated)?;
        Ok(Self::new(api, token))
    }

    /// Fetch users and albums concurrently
    pub async fn home(&self) -> GalleryResult<Overview> {
        let (users, albums) = try_join(self.api.users(&self.token), self.api.albums(&self.token))
            .await
            .inspect_err(|e| error!("Failed to fetch data: {}", e))?;

        debug!("Loaded {} users and {} albums", users.len(), albums.len());
        Ok(Overview { users, albums })
    }

    /// Profile of `username`
    pub async fn profile(&self, username: &str) -> GalleryResult<Profile> {
        let profiles = self
            .api
            .profiles(&self.token)
            .await
            .inspect_err(|e| error!("Failed to fetch profile: {}", e))?;

        profiles
            .into_iter()
            .find(|p| p.username == username)
            .ok_or_else(|| GalleryError::NotFound(format!("Profile for {}", username)))
    }

    /// Album `album_id` with its photos.
    ///
    /// Uses the photos embedded in the album when present, otherwise lists
    /// all photos and keeps those belonging to the album.
    pub async fn album(&self, album_id: &str) -> GalleryResult<AlbumView> {
        let album = self
            .api
            .album(&self.token, album_id)
            .await
            .inspect_err(|e| error!("Failed to fetch album: {}", e))?;

        let photos = match album.nested_photos() {
            Some(photos) => photos,
            None => {
                debug!("Album {} has no embedded photos, listing separately", album_id);
                self.api
                    .photos(&self.token)
                    .await
                    .inspect_err(|e| error!("Failed to fetch photos: {}", e))?
                    .into_iter()
                    .filter(|p| p.belongs_to(album_id))
                    .collect()
            }
        };

        Ok(AlbumView { album, photos })
    }

    pub async fn photo(&self, photo_id: &str) -> GalleryResult<Photo> {
        self.api
            .photo(&self.token, photo_id)
            .await
            .inspect_err(|e| error!("Failed to fetch photo: {}", e))
    }

    /// Rename a photo, returning the updated record
    pub async fn update_photo_title(&self, photo_id: &str, title: &str) -> GalleryResult<Photo> {
        let photo = self
            .api
            .update_photo_title(&self.token, photo_id, title)
            .await
            .inspect_err(|e| error!("Failed to update photo: {}", e))?;

        info!("Photo title updated");
        Ok(photo)
    }
}
