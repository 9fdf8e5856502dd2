use tracing::instrument;

use crate::describe::SObjectMeta;
use crate::error::Result;
use crate::sobject::SObject;

use super::{require_type, segment};

impl super::SalesforceRestClient {
    /// Describe the schema of the record's type.
    #[instrument(skip(self, record), fields(sobject_type = %record.sobject_type()))]
    pub async fn describe_sobject(&self, record: &SObject) -> Result<SObjectMeta> {
        let sobject_type = require_type(record)?;
        let url = self.rest_url(&format!("sobjects/{}/describe", segment(sobject_type)));
        let response = self.send(self.http.get(url)).await?;
        Self::decode("describe", response).await
    }

    /// List every object type available to the current user.
    #[instrument(skip(self))]
    pub async fn describe_global(&self) -> Result<SObjectMeta> {
        let response = self.send(self.http.get(self.rest_url("sobjects"))).await?;
        Self::decode("describe global", response).await
    }
}
