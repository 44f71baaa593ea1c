use serde::{Deserialize, Serialize};

/// A tag and how many media items carry it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagInfo {
    pub name: String,
    pub media_count: u64,
}
