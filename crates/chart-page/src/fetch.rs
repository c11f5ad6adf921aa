// File: crates/chart-page/src/fetch.rs
// Summary: Async CSV byte sources: local files and HTTP.

use crate::error::DrawError;
use std::path::PathBuf;

/// Async byte source for a named resource's CSV.
#[allow(async_fn_in_trait)]
pub trait CsvFetch {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>, DrawError>;
}

/// Reads `<dir>/<resource>.csv` from the filesystem.
#[derive(Clone, Debug)]
pub struct FileFetch {
    dir: PathBuf,
}

impl FileFetch {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CsvFetch for FileFetch {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>, DrawError> {
        let path = self.dir.join(format!("{resource}.csv"));
        Ok(tokio::fs::read(&path).await?)
    }
}

/// Fetches `<base>/<resource>.csv` over HTTP.
#[derive(Clone, Debug)]
pub struct HttpFetch {
    base: String,
    client: reqwest::Client,
}

impl HttpFetch {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base, client: reqwest::Client::new() }
    }
}

impl CsvFetch for HttpFetch {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>, DrawError> {
        let url = format!("{}/{resource}.csv", self.base);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
