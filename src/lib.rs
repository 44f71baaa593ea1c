pub mod client;
pub mod config;
pub mod error;
pub mod rest;
pub mod token;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Client + credential
pub use client::Instagram;
pub use config::{InstagramConfig, DEFAULT_API_URL};
pub use error::{ApiErrorKind, InstagramError, Result};
pub use token::Token;

// REST transport
pub use rest::{InstagramHttpClient, RawResponse};

// Feeds + pagination
pub use types::{Endpoint, Feed, PageCursor};

// Entities
pub use types::{Caption, Count, Image, ImageSet, LocationInfo, MediaItem, TagInfo};
pub use types::{UserCounts, UserInfo, UserSummary};
