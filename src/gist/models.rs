//! Gist data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single file inside a gist
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GistFile {
    pub name: String,
}

/// Gist node as returned by the GraphQL `viewer.gists` connection
#[derive(Deserialize, Debug, Clone)]
pub struct Gist {
    /// Gist identifier (GraphQL exposes it as `name`)
    #[serde(rename = "name")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<GistFile>,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "isPublic", default)]
    pub public: bool,
}

impl Gist {
    /// Description, empty when the gist has none
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Name of the first file, if the gist has any
    pub fn first_file_name(&self) -> Option<&str> {
        self.files.first().map(|f| f.name.as_str())
    }
}

/// GraphQL response envelope
#[derive(Deserialize, Debug)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// Single entry of a GraphQL `errors` array
#[derive(Deserialize, Debug)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct GistListData {
    pub viewer: Viewer,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Viewer {
    pub gists: GistConnection,
}

/// One page of the viewer's gists
#[derive(Deserialize, Debug)]
pub(crate) struct GistConnection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<Gist>,
    #[serde(rename = "pageInfo", default, deserialize_with = "null_as_default")]
    pub page_info: PageInfo,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct PageInfo {
    #[serde(rename = "hasNextPage", default)]
    pub has_next_page: bool,
    #[serde(rename = "endCursor", default)]
    pub end_cursor: Option<String>,
}
