//! Gallery resources as returned by the service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource identifier. The service uses integers for users and UUID
/// strings for albums and photos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(i64),
    Text(String),
}

impl Id {
    /// Compare against an identifier given on the command line
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Id::Num(n) => raw.parse::<i64>().is_ok_and(|r| r == *n),
            Id::Text(s) => s == raw,
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

/// List endpoints answer either with a bare array or a paginated object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Items(Vec<T>),
    Page {
        #[serde(default = "Vec::new")]
        results: Vec<T>,
    },
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Items(items) => items,
            Listing::Page { results } => results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: Id,
    #[serde(default)]
    pub title: String,
    /// Owning album
    #[serde(default)]
    pub album: Option<Id>,
    /// Uploaded file, relative to the service root
    #[serde(default)]
    pub image: Option<String>,
    /// Externally hosted media
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Photo {
    /// Absolute URL of the media, preferring the uploaded file
    pub fn media_url(&self, base_url: &str) -> Option<String> {
        if let Some(ref image) = self.image {
            if image.starts_with("http://") || image.starts_with("https://") {
                return Some(image.clone());
            }
            return Some(format!("{}{}", base_url.trim_end_matches('/'), image));
        }
        self.image_url.clone()
    }

    pub fn media_kind(&self) -> MediaKind {
        self.image_url
            .as_deref()
            .or(self.image.as_deref())
            .map(MediaKind::of)
            .unwrap_or(MediaKind::Image)
    }

    pub fn belongs_to(&self, album_id: &str) -> bool {
        self.album.as_ref().is_some_and(|a| a.matches(album_id))
    }
}

/// Album photos are nested either as full objects or as bare ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhotoRef {
    Full(Photo),
    Id(Id),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: Id,
    #[serde(default)]
    pub title: String,
    /// Owner
    #[serde(default)]
    pub user: Option<Id>,
    #[serde(default)]
    pub photos: Option<Vec<PhotoRef>>,
}

impl Album {
    /// Number of photos listed in the album
    pub fn photo_count(&self) -> usize {
        self.photos.as_ref().map_or(0, Vec::len)
    }

    /// Nested photos, when the service embedded complete photo objects
    pub fn nested_photos(&self) -> Option<Vec<Photo>> {
        self.photos
            .as_ref()?
            .iter()
            .map(|p| match p {
                PhotoRef::Full(photo) => Some(photo.clone()),
                PhotoRef::Id(_) => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub albums: Vec<Album>,
}

/// What a media URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn of(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        let video_ext = [".mp4", ".webm", ".ogg"]
            .iter()
            .any(|ext| lower.ends_with(ext));
        if video_ext || url.contains("pexels.com/video") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}
