use url::Url;

use crate::config::InstagramConfig;
use crate::error::{InstagramError, Result};
use crate::rest::InstagramHttpClient;
use crate::token::Token;
use crate::types::{Endpoint, Feed, LocationInfo, MediaItem, PageCursor, TagInfo, UserInfo, UserSummary};

/// Main client for the Instagram REST API.
///
/// One token binds to one client instance. The client holds no mutable
/// state between calls and may be cloned or shared across tasks; every
/// operation is a single round trip with no retry and no caching.
#[derive(Debug, Clone)]
pub struct Instagram {
    /// HTTP transport.
    pub http_client: InstagramHttpClient,
    token: Token,
}

impl Instagram {
    /// Create a client against the default API endpoint.
    pub fn new(token: Token) -> Self {
        Self {
            http_client: InstagramHttpClient::new(crate::config::DEFAULT_API_URL),
            token,
        }
    }

    /// Create a client with an explicit configuration. The base URL is
    /// validated up front so a malformed one fails here rather than on
    /// the first request.
    pub fn with_config(token: Token, config: InstagramConfig) -> Result<Self> {
        Url::parse(&config.api_url)
            .map_err(|e| InstagramError::Validation(format!("invalid api_url: {e}")))?;
        let http_client = match config.timeout {
            Some(timeout) => InstagramHttpClient::with_timeout(&config.api_url, timeout)?,
            None => InstagramHttpClient::new(&config.api_url),
        };
        Ok(Self { http_client, token })
    }

    /// GET /users/self - Profile of the authenticated user.
    pub async fn get_current_user_info(&self) -> Result<UserInfo> {
        self.http_client
            .fetch_object(Endpoint::CurrentUser, &self.token)
            .await
    }

    /// GET /media/popular - Currently popular media.
    pub async fn get_popular_media(&self) -> Result<Feed<MediaItem>> {
        self.http_client
            .fetch_feed(Endpoint::PopularMedia, &[], &self.token)
            .await
    }

    /// GET /users/{user_id}/media/recent - Recent media posted by a user.
    pub async fn get_recent_media_feed(&self, user_id: &str) -> Result<Feed<MediaItem>> {
        let endpoint = Endpoint::UserRecentMedia {
            user_id: user_id.to_string(),
        };
        self.http_client.fetch_feed(endpoint, &[], &self.token).await
    }

    /// Next page of a recent-media feed.
    pub async fn get_recent_media_next_page(
        &self,
        cursor: &PageCursor,
    ) -> Result<Feed<MediaItem>> {
        self.http_client
            .fetch_next_page(
                cursor,
                "user recent media",
                |e| matches!(e, Endpoint::UserRecentMedia { .. }),
                &self.token,
            )
            .await
    }

    /// GET /tags/{tag}/media/recent - Recent media carrying a tag.
    pub async fn get_recent_media_tags(&self, tag: &str) -> Result<Feed<MediaItem>> {
        let endpoint = Endpoint::TagRecentMedia {
            tag: tag.to_string(),
        };
        self.http_client.fetch_feed(endpoint, &[], &self.token).await
    }

    /// Next page of a tag media feed.
    pub async fn get_recent_media_tags_next_page(
        &self,
        cursor: &PageCursor,
    ) -> Result<Feed<MediaItem>> {
        self.http_client
            .fetch_next_page(
                cursor,
                "tag recent media",
                |e| matches!(e, Endpoint::TagRecentMedia { .. }),
                &self.token,
            )
            .await
    }

    /// GET /users/search?q= - Search users by name.
    pub async fn search_user(&self, query: &str) -> Result<Feed<UserSummary>> {
        self.http_client
            .fetch_feed(Endpoint::UserSearch, &[("q", query)], &self.token)
            .await
    }

    /// GET /users/{user_id}/followed-by - Users following `user_id`.
    pub async fn get_user_followed_by_list(&self, user_id: &str) -> Result<Feed<UserSummary>> {
        let endpoint = Endpoint::FollowedBy {
            user_id: user_id.to_string(),
        };
        self.http_client.fetch_feed(endpoint, &[], &self.token).await
    }

    /// Next page of a followed-by feed.
    pub async fn get_user_followed_by_list_next_page(
        &self,
        cursor: &PageCursor,
    ) -> Result<Feed<UserSummary>> {
        self.http_client
            .fetch_next_page(
                cursor,
                "followed-by",
                |e| matches!(e, Endpoint::FollowedBy { .. }),
                &self.token,
            )
            .await
    }

    /// GET /users/{user_id}/follows - Users that `user_id` follows.
    pub async fn get_user_follow_list(&self, user_id: &str) -> Result<Feed<UserSummary>> {
        let endpoint = Endpoint::Follows {
            user_id: user_id.to_string(),
        };
        self.http_client.fetch_feed(endpoint, &[], &self.token).await
    }

    /// Next page of a follows feed.
    pub async fn get_user_follow_list_next_page(
        &self,
        cursor: &PageCursor,
    ) -> Result<Feed<UserSummary>> {
        self.http_client
            .fetch_next_page(
                cursor,
                "follows",
                |e| matches!(e, Endpoint::Follows { .. }),
                &self.token,
            )
            .await
    }

    /// GET /locations/search?lat=&lng= - Places near a coordinate.
    pub async fn search_location(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Feed<LocationInfo>> {
        let lat = latitude.to_string();
        let lng = longitude.to_string();
        self.http_client
            .fetch_feed(
                Endpoint::LocationSearch,
                &[("lat", lat.as_str()), ("lng", lng.as_str())],
                &self.token,
            )
            .await
    }

    /// GET /tags/search?q= - Search tags by name.
    pub async fn search_tags(&self, query: &str) -> Result<Feed<TagInfo>> {
        self.http_client
            .fetch_feed(Endpoint::TagSearch, &[("q", query)], &self.token)
            .await
    }
}
