use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};
use crate::sobject::{CreateResult, SObject, UpsertResult, DEFAULT_BLACKLIST};

use super::{require_id, require_type, segment};

const CREATE_FAILED: &str = "CREATE_FAILED";

impl super::SalesforceRestClient {
    /// Create `record` and store the new id on it.
    ///
    /// `attributes`, `Id` and every name in `blacklist` are left out of the
    /// payload. On failure the record is left untouched.
    #[instrument(skip(self, record, blacklist), fields(sobject_type = %record.sobject_type()))]
    pub async fn create_sobject(
        &self,
        record: &mut SObject,
        blacklist: &[&str],
        allow_duplicates: bool,
        auto_assign: Option<bool>,
    ) -> Result<()> {
        let sobject_type = require_type(record)?;
        let url = self.rest_url(&format!("sobjects/{}", segment(sobject_type)));
        let request = self
            .http
            .post(url)
            .json(&payload(record, blacklist))?
            .allow_duplicates(allow_duplicates)
            .auto_assign(auto_assign);

        let response = self.send(request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        let result = if body.iter().all(u8::is_ascii_whitespace) {
            CreateResult::default()
        } else {
            serde_json::from_slice(&body).map_err(|e| Error::decode("create", e))?
        };

        match result.id {
            Some(ref id) if result.success && !id.is_empty() => {
                record.set_id(id.as_str());
                Ok(())
            }
            _ => Err(create_failed(status, &result)),
        }
    }

    /// Fetch the record named by its type and id, replacing its fields.
    ///
    /// Type and id are kept if the response does not carry them.
    #[instrument(skip(self, record), fields(sobject_type = %record.sobject_type(), id = %record.id()))]
    pub async fn get_sobject(&self, record: &mut SObject) -> Result<()> {
        let url = self.record_url(record)?;
        let response = self.send(self.http.get(url)).await?;
        let fetched: SObject = Self::decode("get", response).await?;
        record.replace_with(fetched);
        Ok(())
    }

    /// Send the record's fields (minus the blacklist) as a partial update.
    #[instrument(skip(self, record, blacklist), fields(sobject_type = %record.sobject_type(), id = %record.id()))]
    pub async fn update_sobject(
        &self,
        record: &SObject,
        blacklist: &[&str],
        auto_assign: Option<bool>,
    ) -> Result<()> {
        let url = self.record_url(record)?;
        let request = self
            .http
            .patch(url)
            .json(&payload(record, blacklist))?
            .auto_assign(auto_assign);
        self.send(request).await?;
        Ok(())
    }

    /// Insert or update by external id.
    ///
    /// A 201 reports the created record; an empty 2xx body means an
    /// existing record was updated.
    #[instrument(skip(self, record), fields(sobject_type = %record.sobject_type()))]
    pub async fn upsert_sobject(
        &self,
        record: &SObject,
        external_id_field: &str,
        external_id_value: &str,
        auto_assign: Option<bool>,
    ) -> Result<UpsertResult> {
        let sobject_type = require_type(record)?;
        if external_id_field.is_empty() {
            return Err(Error::validation("external id field is empty"));
        }
        if external_id_value.is_empty() {
            return Err(Error::validation("external id value is empty"));
        }

        let url = self.rest_url(&format!(
            "sobjects/{}/{}/{}",
            segment(sobject_type),
            segment(external_id_field),
            segment(external_id_value)
        ));
        let request = self
            .http
            .patch(url)
            .json(&payload(record, &[]))?
            .auto_assign(auto_assign);

        let response = self.send(request).await?;
        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(UpsertResult::updated());
        }

        serde_json::from_slice(&body).map_err(|e| Error::decode("upsert", e))
    }

    /// Delete the record named by its type and id.
    #[instrument(skip(self, record), fields(sobject_type = %record.sobject_type(), id = %record.id()))]
    pub async fn delete_sobject(&self, record: &SObject) -> Result<()> {
        let url = self.record_url(record)?;
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    fn record_url(&self, record: &SObject) -> Result<String> {
        let sobject_type = require_type(record)?;
        let id = require_id(record)?;
        Ok(self.rest_url(&format!(
            "sobjects/{}/{}",
            segment(sobject_type),
            segment(id)
        )))
    }
}

fn payload(record: &SObject, blacklist: &[&str]) -> SObject {
    let mut excluded = DEFAULT_BLACKLIST.to_vec();
    excluded.extend_from_slice(blacklist);
    record.redacted_copy(&excluded)
}

fn create_failed(status: u16, result: &CreateResult) -> Error {
    let (error_code, message, fields) = match result.errors.first() {
        Some(err) => (
            err.status_code.clone(),
            err.message.clone(),
            err.fields.clone(),
        ),
        None => (
            CREATE_FAILED.to_string(),
            "create returned no id".to_string(),
            Vec::new(),
        ),
    };

    Error::new(ErrorKind::Api {
        status,
        error_code,
        message,
        fields,
        body: serde_json::to_string(result).unwrap_or_default(),
    })
}
