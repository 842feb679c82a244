//! Scripted API implementation for unit tests

use super::types::{ApiErrorBody, LoginRequest, RegisterRequest, TokenPair};
use super::{AuthApi, GalleryApi};
use crate::error::{GalleryError, GalleryResult};
use crate::gallery::{Album, Photo, Profile, User};
use async_trait::async_trait;
use std::sync::Mutex;

/// Canned outcome for one endpoint
#[derive(Debug, Clone)]
pub(crate) enum Reply<T> {
    Ok(T),
    Reject { status: u16, body: ApiErrorBody },
    Offline,
}

impl<T: Clone> Reply<T> {
    pub(crate) fn reject_detail(status: u16, detail: &str) -> Self {
        Reply::Reject {
            status,
            body: ApiErrorBody {
                detail: Some(detail.to_string()),
                ..Default::default()
            },
        }
    }

    fn result(&self, context: &str) -> GalleryResult<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Reject { status, body } => Err(GalleryError::Api {
                status: *status,
                body: body.clone(),
            }),
            Reply::Offline => Err(GalleryError::network(context, "connection refused")),
        }
    }
}

/// API double that answers from fixed replies and records each call
pub(crate) struct ScriptedApi {
    pub login: Reply<TokenPair>,
    pub logout: Reply<()>,
    pub register: Reply<()>,
    pub users: Reply<Vec<User>>,
    pub albums: Reply<Vec<Album>>,
    pub profiles: Reply<Vec<Profile>>,
    pub album: Reply<Album>,
    pub photos: Reply<Vec<Photo>>,
    pub photo: Reply<Photo>,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl Default for ScriptedApi {
    fn default() -> Self {
        Self {
            login: Reply::Offline,
            logout: Reply::Ok(()),
            register: Reply::Ok(()),
            users: Reply::Ok(vec![]),
            albums: Reply::Ok(vec![]),
            profiles: Reply::Ok(vec![]),
            album: Reply::Offline,
            photos: Reply::Ok(vec![]),
            photo: Reply::Offline,
            calls: Mutex::new(vec![]),
        }
    }
}

impl ScriptedApi {
    /// API whose login endpoint issues the given pair
    pub(crate) fn issuing(access: &str, refresh: &str) -> Self {
        Self {
            login: Reply::Ok(TokenPair {
                access: crate::session::AccessToken::new(access),
                refresh: crate::session::RefreshToken::new(refresh),
            }),
            ..Default::default()
        }
    }

    /// Calls made so far, formatted as `"<endpoint> <args...>"`
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AuthApi for ScriptedApi {
    async fn login(&self, request: &LoginRequest) -> GalleryResult<TokenPair> {
        self.record(format!("login {}", request.email));
        self.login.result("POST /api/user/login/")
    }

    async fn logout(&self, refresh: &str, access: &str) -> GalleryResult<()> {
        self.record(format!("logout {} {}", refresh, access));
        self.logout.result("POST /api/user/logout/")
    }

    async fn register(&self, request: &RegisterRequest) -> GalleryResult<()> {
        self.record(format!("register {} {}", request.username, request.email));
        self.register.result("POST /api/user/register/")
    }
}

#[async_trait]
impl GalleryApi for ScriptedApi {
    async fn users(&self, token: &str) -> GalleryResult<Vec<User>> {
        self.record(format!("users {}", token));
        self.users.result("GET /api/user/users/")
    }

    async fn albums(&self, token: &str) -> GalleryResult<Vec<Album>> {
        self.record(format!("albums {}", token));
        self.albums.result("GET /api/photos/albums/")
    }

    async fn profiles(&self, token: &str) -> GalleryResult<Vec<Profile>> {
        self.record(format!("profiles {}", token));
        self.profiles.result("GET /api/user/profiles/")
    }

    async fn album(&self, token: &str, album_id: &str) -> GalleryResult<Album> {
        self.record(format!("album {} {}", album_id, token));
        self.album.result("GET /api/photos/albums/{id}/")
    }

    async fn photos(&self, token: &str) -> GalleryResult<Vec<Photo>> {
        self.record(format!("photos {}", token));
        self.photos.result("GET /api/photos/photos/")
    }

    async fn photo(&self, token: &str, photo_id: &str) -> GalleryResult<Photo> {
        self.record(format!("photo {} {}", photo_id, token));
        self.photo.result("GET /api/photos/{id}/")
    }

    async fn update_photo_title(
        &self,
        token: &str,
        photo_id: &str,
        title: &str,
    ) -> GalleryResult<Photo> {
        self.record(format!("update_photo {} {} {}", photo_id, title, token));
        let mut photo = self.photo.result("PATCH /api/photos/{id}/")?;
        photo.title = title.to_string();
        Ok(photo)
    }
}
