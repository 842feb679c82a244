//! Remote API abstraction
//!
//! Two traits split the service surface:
//! - [`AuthApi`]: login, logout and registration, used by the session manager
//! - [`GalleryApi`]: users, profiles, albums and photos, used by page commands
//!
//! [`HttpApi`] implements both over HTTP. Tests substitute scripted
//! implementations.

mod http;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use http::HttpApi;
pub use types::{ApiErrorBody, LoginRequest, LogoutRequest, RegisterRequest, TokenPair};

use crate::error::GalleryResult;
use crate::gallery::{Album, Photo, Profile, User};
use async_trait::async_trait;

/// Authentication endpoints
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an access/refresh token pair
    async fn login(&self, request: &LoginRequest) -> GalleryResult<TokenPair>;

    /// Revoke `refresh` on the server, authorized with `access`
    async fn logout(&self, refresh: &str, access: &str) -> GalleryResult<()>;

    /// Create an account. Succeeds only on `201 Created`.
    async fn register(&self, request: &RegisterRequest) -> GalleryResult<()>;
}

/// Gallery endpoints. Every call carries the caller's bearer token.
#[async_trait]
pub trait GalleryApi: Send + Sync {
    async fn users(&self, token: &str) -> GalleryResult<Vec<User>>;

    async fn albums(&self, token: &str) -> GalleryResult<Vec<Album>>;

    async fn profiles(&self, token: &str) -> GalleryResult<Vec<Profile>>;

    async fn album(&self, token: &str, album_id: &str) -> GalleryResult<Album>;

    async fn photos(&self, token: &str) -> GalleryResult<Vec<Photo>>;

    async fn photo(&self, token: &str, photo_id: &str) -> GalleryResult<Photo>;

    async fn update_photo_title(
        &self,
        token: &str,
        photo_id: &str,
        title: &str,
    ) -> GalleryResult<Photo>;
}
