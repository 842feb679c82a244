//! HTTP implementation of the API traits on top of `ureq`
//!
//! `ureq` is blocking, so every request runs on the tokio blocking pool.
//! Status codes are not turned into transport errors by the agent; the
//! response status is inspected here instead so error bodies can be read.

use super::types::{ApiErrorBody, LoginRequest, LogoutRequest, RegisterRequest, TokenPair};
use super::{AuthApi, GalleryApi};
use crate::config::schema::ApiConfig;
use crate::error::{GalleryError, GalleryResult};
use crate::gallery::{Album, Listing, Photo, Profile, User};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

const LOGIN_PATH: &str = "/api/user/login/";
const LOGOUT_PATH: &str = "/api/user/logout/";
const REGISTER_PATH: &str = "/api/user/register/";
const USERS_PATH: &str = "/api/user/users/";
const PROFILES_PATH: &str = "/api/user/profiles/";
const ALBUMS_PATH: &str = "/api/photos/albums/";
const PHOTOS_PATH: &str = "/api/photos/photos/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

/// A fully prepared request that can be moved onto the blocking pool
struct Call {
    method: Method,
    url: String,
    bearer: Option<String>,
    body: Option<String>,
}

/// Status and raw body of a completed exchange
struct Reply {
    status: u16,
    text: String,
}

impl Reply {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx reply into an API error
    fn into_error(self) -> GalleryError {
        GalleryError::Api {
            status: self.status,
            body: ApiErrorBody::parse(&self.text),
        }
    }

    fn json<T: DeserializeOwned>(self) -> GalleryResult<T> {
        if !self.is_success() {
            return Err(self.into_error());
        }
        Ok(serde_json::from_str(&self.text)?)
    }
}

/// Gallery service client
#[derive(Clone)]
pub struct HttpApi {
    agent: ureq::Agent,
    config: ApiConfig,
}

impl HttpApi {
    /// Create a client for the configured base URL
    pub fn new(config: ApiConfig) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .http_status_as_error(false)
            .build();

        Self {
            agent: ureq::Agent::new_with_config(agent_config),
            config,
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        body: Option<&(impl Serialize + Sync)>,
    ) -> GalleryResult<Reply> {
        let call = Call {
            method,
            url: self.config.url(path),
            bearer: bearer.map(str::to_string),
            body: body.map(serde_json::to_string).transpose()?,
        };

        let context = format!("{} {}", method.as_str(), path);
        debug!("{}", context);

        let agent = self.agent.clone();
        let reply = tokio::task::spawn_blocking(move || execute(&agent, call))
            .await
            .map_err(|e| GalleryError::Internal(format!("request task failed: {}", e)))?
            .map_err(|e| GalleryError::network(context.clone(), e))?;

        debug!("{} -> {}", context, reply.status);
        Ok(reply)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> GalleryResult<T> {
        self.send(Method::Get, path, Some(token), None::<&()>)
            .await?
            .json()
    }

    async fn get_listing<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> GalleryResult<Vec<T>> {
        let listing: Listing<T> = self.get_json(path, token).await?;
        Ok(listing.into_vec())
    }
}

fn execute(agent: &ureq::Agent, call: Call) -> Result<Reply, ureq::Error> {
    let Call {
        method,
        url,
        bearer,
        body,
    } = call;
    let authorization = bearer.map(|token| format!("Bearer {}", token));

    let mut response = match method {
        Method::Get => {
            let mut request = agent.get(&url);
            if let Some(ref value) = authorization {
                request = request.header("Authorization", value);
            }
            request.call()?
        }
        Method::Post | Method::Patch => {
            let mut request = if method == Method::Post {
                agent.post(&url)
            } else {
                agent.patch(&url)
            };
            if let Some(ref value) = authorization {
                request = request.header("Authorization", value);
            }
            request
                .header("Content-Type", "application/json")
                .send(body.unwrap_or_else(|| "{}".to_string()))?
        }
    };

    let status = response.status().as_u16();
    let text = response.body_mut().read_to_string()?;
    Ok(Reply { status, text })
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> GalleryResult<TokenPair> {
        self.send(Method::Post, LOGIN_PATH, None, Some(request))
            .await?
            .json()
    }

    async fn logout(&self, refresh: &str, access: &str) -> GalleryResult<()> {
        let reply = self
            .send(
                Method::Post,
                LOGOUT_PATH,
                Some(access),
                Some(&LogoutRequest { refresh }),
            )
            .await?;

        if reply.is_success() {
            Ok(())
        } else {
            Err(reply.into_error())
        }
    }

    async fn register(&self, request: &RegisterRequest) -> GalleryResult<()> {
        let reply = self
            .send(Method::Post, REGISTER_PATH, None, Some(request))
            .await?;

        if reply.status == 201 {
            Ok(())
        } else {
            Err(reply.into_error())
        }
    }
}

#[async_trait]
impl GalleryApi for HttpApi {
    async fn users(&self, token: &str) -> GalleryResult<Vec<User>> {
        self.get_listing(USERS_PATH, token).await
    }

    async fn albums(&self, token: &str) -> GalleryResult<Vec<Album>> {
        self.get_listing(ALBUMS_PATH, token).await
    }

    async fn profiles(&self, token: &str) -> GalleryResult<Vec<Profile>> {
        self.get_listing(PROFILES_PATH, token).await
    }

    async fn album(&self, token: &str, album_id: &str) -> GalleryResult<Album> {
        self.get_json(&format!("{}{}/", ALBUMS_PATH, album_id), token)
            .await
    }

    async fn photos(&self, token: &str) -> GalleryResult<Vec<Photo>> {
        self.get_listing(PHOTOS_PATH, token).await
    }

    async fn photo(&self, token: &str, photo_id: &str) -> GalleryResult<Photo> {
        self.get_json(&photo_path(photo_id), token).await
    }

    async fn update_photo_title(
        &self,
        token: &str,
        photo_id: &str,
        title: &str,
    ) -> GalleryResult<Photo> {
        let body = serde_json::json!({ "title": title });
        self.send(Method::Patch, &photo_path(photo_id), Some(token), Some(&body))
            .await?
            .json()
    }
}

/// Single photos live directly under `/api/photos/`
fn photo_path(photo_id: &str) -> String {
    format!("/api/photos/{}/", photo_id)
}
