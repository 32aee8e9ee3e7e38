// SPDX-FileCopyrightText: The linkfolio authors
// SPDX-License-Identifier: MPL-2.0

//! Loading the link document

use std::path::PathBuf;

use anyhow::Context as _;
use async_trait::async_trait;
use thiserror::Error;

use crate::document::LinkDocument;

/// An error raised while loading the link document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource could not be read or the response was not successful.
    #[error("failed to load '{resource}'")]
    Unavailable {
        /// The requested resource.
        resource: String,

        /// Transport detail from the fetcher.
        #[source]
        source: anyhow::Error,
    },

    /// The resource contents are not a valid link document.
    #[error("failed to parse '{resource}'")]
    Invalid {
        /// The requested resource.
        resource: String,

        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Port for fetching the raw document bytes.
#[async_trait]
pub trait FetchDocument {
    /// Fetch the raw bytes of the given resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource is unreachable or the response
    /// is not successful.
    async fn fetch(&self, resource: &str) -> anyhow::Result<Vec<u8>>;
}

/// Fetcher reading the document from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileFetcher {
    base_dir: Option<PathBuf>,
}

impl FileFetcher {
    /// Create a fetcher resolving resources relative to the working
    /// directory.
    #[must_use]
    pub const fn new() -> Self {
        Self { base_dir: None }
    }

    /// Create a fetcher resolving resources relative to `base_dir`.
    #[must_use]
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, resource: &str) -> PathBuf {
        match &self.base_dir {
            Some(base_dir) => base_dir.join(resource),
            None => PathBuf::from(resource),
        }
    }
}

#[async_trait]
impl FetchDocument for FileFetcher {
    async fn fetch(&self, resource: &str) -> anyhow::Result<Vec<u8>> {
        let path = self.resolve(resource);
        let contents = tokio::fs::read(&path)
            .await
            .with_context(|| format!("reading {path}", path = path.display()))?;
        Ok(contents)
    }
}

/// Load and parse the link document in a single attempt.
///
/// No retry, no caching, no timeout. The caller decides what to do with
/// a failure; reloading the page is the only retry mechanism.
///
/// # Errors
///
/// Returns [`LoadError::Unavailable`] if fetching fails and
/// [`LoadError::Invalid`] if the contents cannot be parsed.
pub async fn load<F>(fetcher: &F, resource: &str) -> Result<LinkDocument, LoadError>
where
    F: FetchDocument + ?Sized,
{
    let bytes = fetcher
        .fetch(resource)
        .await
        .map_err(|source| LoadError::Unavailable {
            resource: resource.to_owned(),
            source,
        })?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Invalid {
        resource: resource.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticFetcher {
        response: Option<&'static str>,
    }

    #[async_trait]
    impl FetchDocument for StaticFetcher {
        async fn fetch(&self, resource: &str) -> anyhow::Result<Vec<u8>> {
            self.response
                .map(|response| response.as_bytes().to_vec())
                .ok_or_else(|| anyhow::anyhow!("resource '{resource}' not found"))
        }
    }

    #[tokio::test]
    async fn load_parses_a_valid_document() {
        let fetcher = StaticFetcher {
            response: Some(r#"{"profile":{"name":"Jo"},"links":[]}"#),
        };
        let document = load(&fetcher, "links.json").await.unwrap();
        assert_eq!(Some("Jo"), document.profile.unwrap().name.as_deref());
    }

    #[tokio::test]
    async fn load_reports_an_unavailable_resource() {
        let fetcher = StaticFetcher { response: None };
        let err = load(&fetcher, "links.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Unavailable { ref resource, .. } if resource == "links.json"));
    }

    #[tokio::test]
    async fn load_reports_invalid_contents() {
        let fetcher = StaticFetcher {
            response: Some("<!doctype html>"),
        };
        let err = load(&fetcher, "links.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Invalid { ref resource, .. } if resource == "links.json"));
    }

    #[tokio::test]
    async fn file_fetcher_reads_relative_to_base_dir() {
        let base_dir = std::env::temp_dir().join("linkfolio-loader-test");
        std::fs::create_dir_all(&base_dir).unwrap();
        std::fs::write(base_dir.join("links.json"), r#"{"links":[]}"#).unwrap();

        let fetcher = FileFetcher::with_base_dir(&base_dir);
        let document = load(&fetcher, "links.json").await.unwrap();
        assert_eq!(Some(0), document.links.map(|links| links.len()));
    }

    #[tokio::test]
    async fn file_fetcher_reports_a_missing_file() {
        let fetcher = FileFetcher::new();
        let err = load(&fetcher, "no/such/links.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Unavailable { .. }));
    }
}
