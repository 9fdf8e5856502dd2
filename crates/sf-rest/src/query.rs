//! SOQL query result page.

use serde::{Deserialize, Serialize};

use crate::sobject::SObject;

/// One page of a SOQL query.
///
/// When `done` is false, `next_records_url` holds the server-relative path of
/// the next page; pass the page to
/// [`SalesforceRestClient::query_more`](crate::SalesforceRestClient::query_more)
/// to fetch it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct QueryResult {
    /// Total number of records matching the query, across all pages.
    #[serde(rename = "totalSize", default)]
    pub total_size: u64,

    /// Whether this is the last page.
    #[serde(default)]
    pub done: bool,

    /// Path of the next page, absent on the last page.
    #[serde(
        rename = "nextRecordsUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_records_url: Option<String>,

    /// Records in server order.
    #[serde(default)]
    pub records: Vec<SObject>,
}

impl QueryResult {
    /// The continuation path, if another page exists.
    ///
    /// An empty `nextRecordsUrl` is treated the same as a missing one.
    pub fn next_page(&self) -> Option<&str> {
        self.next_records_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}
