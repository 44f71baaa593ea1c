use serde::{Deserialize, Serialize};

/// Media/follow counters attached to a full profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCounts {
    pub media: u64,
    pub follows: u64,
    pub followed_by: u64,
}

/// Full profile for the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub profile_picture: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub counts: Option<UserCounts>,
}

/// Compact user record returned by search and follower/following feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub profile_picture: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
}
