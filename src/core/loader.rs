use crate::core::ContentSource;
use crate::domain::model::SiteContent;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_SOURCE: &str = "data.json";

pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Requesting site data from: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        tracing::debug!("Site data response status: {}", status);

        if !status.is_success() {
            return Err(SiteError::FetchFailure {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Reading site data from: {}", self.path.display());
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| SiteError::ReadFailure {
                path: self.path.clone(),
                source,
            })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

pub enum DataSource {
    Http(HttpSource),
    File(FileSource),
}

impl DataSource {
    /// http(s) URLs are fetched over the network, anything else is a file path.
    /// Relative paths are taken relative to the host page, like a browser would.
    pub fn resolve(source: &str, host_dir: Option<&Path>) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            return DataSource::Http(HttpSource::new(source));
        }

        let path = Path::new(source);
        match host_dir {
            Some(dir) if path.is_relative() => DataSource::File(FileSource::new(dir.join(path))),
            _ => DataSource::File(FileSource::new(path)),
        }
    }
}

#[async_trait]
impl ContentSource for DataSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            DataSource::Http(source) => source.fetch().await,
            DataSource::File(source) => source.fetch().await,
        }
    }

    fn location(&self) -> String {
        match self {
            DataSource::Http(source) => source.location(),
            DataSource::File(source) => source.location(),
        }
    }
}

pub struct DataLoader<S: ContentSource> {
    source: S,
}

impl<S: ContentSource> DataLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads and parses the site data. Failures are logged here, callers only decide
    /// what to do without the data.
    pub async fn load(&self) -> Result<SiteContent> {
        let result = match self.source.fetch().await {
            Ok(bytes) => serde_json::from_slice::<SiteContent>(&bytes).map_err(SiteError::from),
            Err(e) => Err(e),
        };

        match &result {
            Ok(_) => tracing::debug!("Site data loaded from {}", self.source.location()),
            Err(e) => tracing::error!(
                "❌ Failed to load site data from {}: {}",
                self.source.location(),
                e
            ),
        }

        result
    }
}
