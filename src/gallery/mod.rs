//! Users, profiles, albums and photos

mod client;
mod models;

pub use client::{AlbumView, GalleryClient, Overview};
pub use models::{Album, Id, Listing, MediaKind, Photo, PhotoRef, Profile, User};
