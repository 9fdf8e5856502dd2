use std::path::Path;

use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

use crate::error::{Error, Result};

use super::segment;

impl super::SalesforceRestClient {
    /// Download the binary content of a ContentVersion into `destination`.
    ///
    /// The file is created (or truncated) once the server answers 2xx, and
    /// the body is streamed into it chunk by chunk. Returns the number of
    /// bytes written. A failure mid-stream leaves a partial file behind.
    #[instrument(skip(self, destination))]
    pub async fn download_file(
        &self,
        content_version_id: &str,
        destination: impl AsRef<Path>,
    ) -> Result<u64> {
        if content_version_id.is_empty() {
            return Err(Error::validation("content version id is empty"));
        }

        let url = self.rest_url(&format!(
            "sobjects/ContentVersion/{}/VersionData",
            segment(content_version_id)
        ));
        let mut response = self.send(self.http.get(url)).await?;

        let mut file = tokio::fs::File::create(destination.as_ref()).await?;
        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!(bytes = written, "Download complete");
        Ok(written)
    }
}
