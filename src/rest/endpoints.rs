use serde::de::DeserializeOwned;

use crate::error::{InstagramError, Result};
use crate::rest::classify::classify;
use crate::rest::decode::{decode_feed, decode_object};
use crate::rest::InstagramHttpClient;
use crate::token::Token;
use crate::types::{Endpoint, Feed, PageCursor};

impl InstagramHttpClient {
    /// Run the full pipeline for one page: request, classify, decode.
    pub async fn fetch_feed<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, &str)],
        token: &Token,
    ) -> Result<Feed<T>> {
        let raw = self.get_raw(&endpoint.path(), query, token).await?;
        let body = classify(&raw)?;
        decode_feed(&endpoint, &body)
    }

    /// Run the pipeline for an endpoint whose `data` is a single object.
    pub async fn fetch_object<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        token: &Token,
    ) -> Result<T> {
        let raw = self.get_raw(&endpoint.path(), &[], token).await?;
        let body = classify(&raw)?;
        decode_object(&endpoint, &body)
    }

    /// Fetch the page after `cursor`. The request is derived entirely
    /// from the cursor; `accepts` names the continuation operation's
    /// endpoint, and a cursor minted elsewhere is rejected as a bad
    /// request before any network call.
    pub async fn fetch_next_page<T: DeserializeOwned>(
        &self,
        cursor: &PageCursor,
        operation: &str,
        accepts: fn(&Endpoint) -> bool,
        token: &Token,
    ) -> Result<Feed<T>> {
        if !accepts(cursor.endpoint()) {
            return Err(InstagramError::cursor_mismatch(
                operation,
                cursor.endpoint().name(),
            ));
        }
        let Some(param) = cursor.endpoint().cursor_param() else {
            return Err(InstagramError::cursor_mismatch(
                operation,
                cursor.endpoint().name(),
            ));
        };
        self.fetch_feed(
            cursor.endpoint().clone(),
            &[(param, cursor.next_cursor())],
            token,
        )
        .await
    }
}
