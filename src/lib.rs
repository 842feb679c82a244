//! Gallery - client for the photo gallery service
//!
//! Keeps an authenticated session on disk and exposes the service's users,
//! profiles, albums and photos to the command line.

pub mod account;
pub mod api;
pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod gallery;
pub mod session;
pub mod storage;
pub mod ui;

pub use error::{GalleryError, GalleryResult};
