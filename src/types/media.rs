use serde::{Deserialize, Serialize};

use super::location::LocationInfo;
use super::user::UserSummary;

/// One rendition of a media item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// The renditions returned for every media item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSet {
    pub low_resolution: Option<Image>,
    pub thumbnail: Option<Image>,
    pub standard_resolution: Option<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caption {
    pub id: Option<String>,
    pub text: String,
    pub from: Option<UserSummary>,
}

/// Like/comment counter block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Count {
    pub count: u64,
}

/// One media entry from a media or tag feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub link: String,
    pub filter: Option<String>,
    pub created_time: Option<String>,
    pub images: Option<ImageSet>,
    pub caption: Option<Caption>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub likes: Option<Count>,
    pub comments: Option<Count>,
    pub user: Option<UserSummary>,
    pub location: Option<LocationInfo>,
}
