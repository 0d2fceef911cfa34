use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Member, error::FetchError, protocol::decode_member_list};
use tracing::{error, info};

pub mod pagination;
pub mod table;

pub use pagination::{Pagination, ITEMS_PER_PAGE};
pub use table::{MemberRow, MemberTableController};

pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Where the member list comes from. The table only ever reads it once per
/// load; there is no write-back.
#[async_trait]
pub trait MemberSource: Send + Sync {
    async fn fetch_members(&self) -> Result<Vec<Member>, FetchError>;
}

pub struct HttpMemberSource {
    http: Client,
    url: String,
}

impl HttpMemberSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FetchError::transport(format!("failed to build http client: {err}")))?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MemberSource for HttpMemberSource {
    async fn fetch_members(&self) -> Result<Vec<Member>, FetchError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|err| FetchError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::transport(err.to_string()))?;
        decode_member_list(&body)
    }
}

/// Fetches the member list, logging the outcome. Failures are only logged;
/// callers leave the table as it was.
pub async fn fetch_members_logged(source: &dyn MemberSource) -> Result<Vec<Member>, FetchError> {
    match source.fetch_members().await {
        Ok(members) => {
            info!(count = members.len(), "fetched member list");
            Ok(members)
        }
        Err(err) => {
            error!("error fetching members: {err}");
            Err(err)
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
