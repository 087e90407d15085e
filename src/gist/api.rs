//! Gist API operations

use log::debug;
use serde_json::json;

use crate::config::api;
use crate::error::{GistError, Result};
use crate::gist::GistClient;

use super::models::{Gist, GistListData, GraphQlResponse};

const GIST_LIST_QUERY: &str = r#"query GistList($per_page: Int, $endCursor: String) {
  viewer {
    gists(first: $per_page, after: $endCursor, privacy: ALL, orderBy: {field: CREATED_AT, direction: DESC}) {
      nodes {
        name
        files { name }
        description
        updatedAt
        isPublic
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
}"#;

impl GistClient {
    /// List the authenticated user's gists, up to `limit`, in server order
    pub async fn list_my_gists(&self, limit: usize) -> Result<Vec<Gist>> {
        let url = self.graphql_url();
        let per_page = limit.clamp(1, api::MAX_PAGE_SIZE);
        let mut gists: Vec<Gist> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let body = json!({
                "query": GIST_LIST_QUERY,
                "variables": {
                    "per_page": per_page,
                    "endCursor": cursor,
                }
            });

            let response = self.post(&url).json(&body).send().await?;

            let status = response.status().as_u16();
            match status {
                200 => {}
                401 => {
                    return Err(GistError::Auth(format!(
                        "Authentication failed for host '{}': token is invalid or expired",
                        self.host()
                    )))
                }
                status => {
                    let error_body = response.text().await.unwrap_or_default();
                    return Err(GistError::Api {
                        status,
                        message: format!("Failed to list gists: {}", error_body),
                    });
                }
            }

            let text = response.text().await?;
            let parsed: GraphQlResponse<GistListData> = serde_json::from_str(&text)?;

            if !parsed.errors.is_empty() {
                let messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();
                return Err(GistError::Api {
                    status,
                    message: format!("GraphQL: {}", messages.join("; ")),
                });
            }

            let connection = parsed
                .data
                .ok_or_else(|| GistError::Json("GraphQL response has no data".to_string()))?
                .viewer
                .gists;

            debug!(
                "Fetched {} gists (has next page: {})",
                connection.nodes.len(),
                connection.page_info.has_next_page
            );

            gists.extend(connection.nodes);

            if gists.len() >= limit || !connection.page_info.has_next_page {
                break;
            }
            match connection.page_info.end_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        gists.truncate(limit);
        Ok(gists)
    }

    /// Delete a gist by ID
    pub async fn delete_gist(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/{}/{}",
            self.rest_url(),
            api::GISTS,
            urlencoding::encode(id)
        );

        debug!("Deleting gist: {}", id);

        let response = self.delete(&url).send().await?;

        match response.status().as_u16() {
            200 | 204 => {
                debug!("Successfully deleted gist {}", id);
                Ok(())
            }
            401 => Err(GistError::Auth(format!(
                "Authentication failed for host '{}': token is invalid or expired",
                self.host()
            ))),
            403 => Err(GistError::Forbidden(format!(
                "unable to delete gist {}: you do not own this gist",
                id
            ))),
            404 => Err(GistError::NotFound(format!(
                "unable to delete gist {}: either the gist is not found or it is not owned by you",
                id
            ))),
            status => {
                let error_body = response.text().await.unwrap_or_default();
                Err(GistError::Api {
                    status,
                    message: format!("Failed to delete gist '{}': {}", id, error_body),
                })
            }
        }
    }
}
