/// Logical endpoints of the API.
///
/// Paginated endpoints carry the request context (user id, tag) that a
/// continuation request needs, so a caller following a cursor does not
/// have to remember the original query. The endpoints disagree on where
/// the cursor lives in the `pagination` object and on the query
/// parameter that carries it back, so both are configured here per
/// variant instead of being assumed uniform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    CurrentUser,
    PopularMedia,
    UserRecentMedia { user_id: String },
    TagRecentMedia { tag: String },
    UserSearch,
    FollowedBy { user_id: String },
    Follows { user_id: String },
    LocationSearch,
    TagSearch,
}

impl Endpoint {
    /// Request path relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Endpoint::CurrentUser => "/users/self".to_string(),
            Endpoint::PopularMedia => "/media/popular".to_string(),
            Endpoint::UserRecentMedia { user_id } => format!("/users/{user_id}/media/recent"),
            Endpoint::TagRecentMedia { tag } => format!("/tags/{tag}/media/recent"),
            Endpoint::UserSearch => "/users/search".to_string(),
            Endpoint::FollowedBy { user_id } => format!("/users/{user_id}/followed-by"),
            Endpoint::Follows { user_id } => format!("/users/{user_id}/follows"),
            Endpoint::LocationSearch => "/locations/search".to_string(),
            Endpoint::TagSearch => "/tags/search".to_string(),
        }
    }

    /// Field inside the response's `pagination` object that holds the
    /// next cursor. `None` for endpoints that never paginate.
    pub fn cursor_field(&self) -> Option<&'static str> {
        match self {
            Endpoint::UserRecentMedia { .. } => Some("next_max_id"),
            Endpoint::TagRecentMedia { .. } => Some("next_max_tag_id"),
            Endpoint::FollowedBy { .. } | Endpoint::Follows { .. } => Some("next_cursor"),
            _ => None,
        }
    }

    /// Query parameter that carries the cursor on a continuation request.
    pub fn cursor_param(&self) -> Option<&'static str> {
        match self {
            Endpoint::UserRecentMedia { .. } => Some("max_id"),
            Endpoint::TagRecentMedia { .. } => Some("max_tag_id"),
            Endpoint::FollowedBy { .. } | Endpoint::Follows { .. } => Some("cursor"),
            _ => None,
        }
    }

    /// Human-readable endpoint name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::CurrentUser => "current user",
            Endpoint::PopularMedia => "popular media",
            Endpoint::UserRecentMedia { .. } => "user recent media",
            Endpoint::TagRecentMedia { .. } => "tag recent media",
            Endpoint::UserSearch => "user search",
            Endpoint::FollowedBy { .. } => "followed-by",
            Endpoint::Follows { .. } => "follows",
            Endpoint::LocationSearch => "location search",
            Endpoint::TagSearch => "tag search",
        }
    }
}

/// Opaque continuation token for a specific paginated endpoint.
///
/// Valid only for the endpoint that produced it; the continuation
/// operations reject cursors minted elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    pub(crate) endpoint: Endpoint,
    pub(crate) next_cursor: String,
}

impl PageCursor {
    /// The endpoint that minted this cursor.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The raw cursor value supplied by the server.
    pub fn next_cursor(&self) -> &str {
        &self.next_cursor
    }
}

/// One typed page of results plus an optional continuation cursor.
///
/// `data` preserves server order. `pagination` is `Some` iff the server
/// indicated more results exist.
#[derive(Debug, Clone)]
pub struct Feed<T> {
    pub data: Vec<T>,
    pub pagination: Option<PageCursor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_interpolate_context() {
        let e = Endpoint::UserRecentMedia {
            user_id: "18428658".to_string(),
        };
        assert_eq!(e.path(), "/users/18428658/media/recent");

        let e = Endpoint::TagRecentMedia {
            tag: "london".to_string(),
        };
        assert_eq!(e.path(), "/tags/london/media/recent");

        let e = Endpoint::FollowedBy {
            user_id: "25025320".to_string(),
        };
        assert_eq!(e.path(), "/users/25025320/followed-by");
    }

    #[test]
    fn cursor_fields_differ_per_endpoint() {
        let media = Endpoint::UserRecentMedia {
            user_id: "1".to_string(),
        };
        let tag = Endpoint::TagRecentMedia {
            tag: "t".to_string(),
        };
        let follows = Endpoint::Follows {
            user_id: "1".to_string(),
        };

        assert_eq!(media.cursor_field(), Some("next_max_id"));
        assert_eq!(media.cursor_param(), Some("max_id"));
        assert_eq!(tag.cursor_field(), Some("next_max_tag_id"));
        assert_eq!(tag.cursor_param(), Some("max_tag_id"));
        assert_eq!(follows.cursor_field(), Some("next_cursor"));
        assert_eq!(follows.cursor_param(), Some("cursor"));
    }

    #[test]
    fn unpaginated_endpoints_have_no_cursor_config() {
        for e in [
            Endpoint::CurrentUser,
            Endpoint::PopularMedia,
            Endpoint::UserSearch,
            Endpoint::LocationSearch,
            Endpoint::TagSearch,
        ] {
            assert_eq!(e.cursor_field(), None, "{}", e.name());
            assert_eq!(e.cursor_param(), None, "{}", e.name());
        }
    }
}
