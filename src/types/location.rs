use serde::{Deserialize, Serialize};

/// A place record. Search results carry an id; locations embedded in
/// media payloads may not. The API sends the id as either a string or
/// a number, so it normalizes to a string here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInfo {
    #[serde(default, deserialize_with = "super::opt_id_string")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
