use tracing::instrument;

use crate::error::{Error, Result};
use crate::query::QueryResult;
use crate::sobject::SObject;

impl super::SalesforceRestClient {
    /// Execute a SOQL query, or fetch a continuation page.
    ///
    /// A non-empty `next_records_url` wins: it is requested as-is relative
    /// to the base URL and `soql` is ignored. It must start with `/`.
    /// Otherwise `soql` is sent as the `q` parameter.
    #[instrument(skip(self))]
    pub async fn query(&self, soql: &str, next_records_url: Option<&str>) -> Result<QueryResult> {
        let request = match next_records_url.filter(|url| !url.is_empty()) {
            Some(next) => self.http.get(self.instance_url(next)?),
            None if !soql.is_empty() => self.http.get(self.rest_url("query")).query("q", soql),
            None => {
                return Err(Error::validation(
                    "either a query or a next records URL is required",
                ))
            }
        };

        let response = self.send(request).await?;
        Self::decode("query", response).await
    }

    /// Fetch the page after `page`, or `None` if `page` is the last one.
    #[instrument(skip(self, page))]
    pub async fn query_more(&self, page: &QueryResult) -> Result<Option<QueryResult>> {
        match page.next_page() {
            Some(next) if !page.done => self.query("", Some(next)).await.map(Some),
            _ => Ok(None),
        }
    }

    /// Execute a SOQL query and follow every continuation page.
    ///
    /// Records come back in server order.
    #[instrument(skip(self))]
    pub async fn query_all(&self, soql: &str) -> Result<Vec<SObject>> {
        let mut page = self.query(soql, None).await?;
        let mut records = std::mem::take(&mut page.records);

        while let Some(mut next) = self.query_more(&page).await? {
            records.append(&mut next.records);
            page = next;
        }

        Ok(records)
    }
}
