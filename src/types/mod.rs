pub mod feed;
pub mod location;
pub mod media;
pub mod tag;
pub mod user;

pub use feed::{Endpoint, Feed, PageCursor};
pub use location::LocationInfo;
pub use media::{Caption, Count, Image, ImageSet, MediaItem};
pub use tag::TagInfo;
pub use user::{UserCounts, UserInfo, UserSummary};

use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use serde_json::Value;

/// Deserialize an id that the API sends as either a JSON string or a
/// number into an optional string.
pub(crate) fn opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
