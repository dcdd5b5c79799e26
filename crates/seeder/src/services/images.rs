//! Placeholder images for products and admin avatars.
//!
//! Images are stored inline as `data:` URLs so the dashboard can render them
//! without a file server. Every fetch is best-effort: failures are logged and
//! callers get a fallback instead of an error.

use std::path::Path;
use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{AVATAR_NAME_PLACEHOLDER, ImageConfig};

/// Sent with every request; Wikimedia rejects clients without one.
const USER_AGENT: &str = concat!("dashboard-seed/", env!("CARGO_PKG_VERSION"));

/// Used when neither the response nor the path says what the bytes are.
const DEFAULT_MIME: &str = "application/octet-stream";

/// Image loading errors.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is empty")]
    Empty(String),
}

/// Encode raw bytes as a `data:` URL.
#[must_use]
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Guess a MIME type from a file name or URL path.
#[must_use]
pub fn mime_from_path(path: &str) -> &'static str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let extension = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => DEFAULT_MIME,
    }
}

/// Fill an avatar URL template with a display name.
#[must_use]
pub fn avatar_url(template: &str, name: &str) -> String {
    template.replace(AVATAR_NAME_PLACEHOLDER, &urlencoding::encode(name))
}

/// Read an image file into a `data:` URL.
///
/// # Errors
///
/// Returns `ImageError` if the file can't be read or is empty.
pub async fn load_file(path: &Path) -> Result<String, ImageError> {
    let display = path.display().to_string();
    let bytes = tokio::fs::read(path).await.map_err(|source| ImageError::Io {
        path: display.clone(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(ImageError::Empty(display));
    }
    Ok(data_url(mime_from_path(&display), &bytes))
}

/// HTTP client for downloading images.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: reqwest::Client,
}

impl ImageFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::Http` if the client can't be built.
    pub fn new(timeout: Duration) -> Result<Self, ImageError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Download `url` into a `data:` URL.
    ///
    /// # Errors
    ///
    /// Returns `ImageError` on transport errors, non-success statuses or an
    /// empty body.
    pub async fn fetch(&self, url: &str) -> Result<String, ImageError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map_or_else(|| mime_from_path(url).to_string(), str::to_string);

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ImageError::Empty(url.to_string()));
        }

        debug!(url, mime, size = bytes.len(), "Fetched image");
        Ok(data_url(&mime, &bytes))
    }
}

/// Resolves product and avatar images with fallbacks.
#[derive(Debug, Clone)]
pub struct Images {
    config: ImageConfig,
    /// `None` when running offline
    fetcher: Option<ImageFetcher>,
}

impl Images {
    /// # Errors
    ///
    /// Returns `ImageError::Http` if the HTTP client can't be built.
    pub fn new(config: ImageConfig, offline: bool) -> Result<Self, ImageError> {
        let fetcher = if offline {
            None
        } else {
            Some(ImageFetcher::new(config.http_timeout)?)
        };
        Ok(Self { config, fetcher })
    }

    /// Images that never touch the network.
    #[must_use]
    pub const fn offline(config: ImageConfig) -> Self {
        Self {
            config,
            fetcher: None,
        }
    }

    /// The shared product image, or the placeholder URL itself if it can't be
    /// downloaded.
    pub async fn product_image(&self) -> String {
        let url = &self.config.product_image_url;
        let Some(fetcher) = &self.fetcher else {
            return url.clone();
        };
        match fetcher.fetch(url).await {
            Ok(image) => image,
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to fetch product image, storing URL instead");
                url.clone()
            }
        }
    }

    /// The shared avatar read from the configured file, if any.
    pub async fn avatar_placeholder(&self) -> Option<String> {
        let path = self.config.avatar_file.as_deref()?;
        match load_file(path).await {
            Ok(image) => Some(image),
            Err(e) => {
                warn!(error = %e, "Failed to read avatar placeholder");
                None
            }
        }
    }

    /// Whether avatars are fetched per admin.
    #[must_use]
    pub const fn fetches_avatars(&self) -> bool {
        self.fetcher.is_some() && self.config.avatar_endpoint.is_some()
    }

    /// A per-name avatar from the configured endpoint, falling back to
    /// `placeholder`.
    pub async fn avatar_for(&self, name: &str, placeholder: Option<&str>) -> Option<String> {
        let fallback = || placeholder.map(str::to_string);
        let (Some(fetcher), Some(template)) = (&self.fetcher, &self.config.avatar_endpoint) else {
            return fallback();
        };

        let url = avatar_url(template, name);
        match fetcher.fetch(&url).await {
            Ok(image) => Some(image),
            Err(e) => {
                warn!(name, error = %e, "Failed to fetch avatar, using placeholder");
                fallback()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_mime_from_path() {
        assert_eq!(mime_from_path("avatar.JPG"), "image/jpeg");
        assert_eq!(mime_from_path("/tmp/blank-profile.jpeg"), "image/jpeg");
        assert_eq!(
            mime_from_path("https://upload.wikimedia.org/a/No_image_available.svg"),
            "image/svg+xml"
        );
        assert_eq!(mime_from_path("https://img.test/pic.png?size=64"), "image/png");
        assert_eq!(mime_from_path("README"), DEFAULT_MIME);
    }

    #[test]
    fn test_avatar_url_encodes_name() {
        assert_eq!(
            avatar_url("https://avatars.test/api/?name={name}&size=128", "Nur Aisyah"),
            "https://avatars.test/api/?name=Nur%20Aisyah&size=128"
        );
    }

    #[tokio::test]
    async fn test_load_file() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"\x89PNG").unwrap();

        let image = load_file(file.path()).await.unwrap();
        assert!(image.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_load_file_errors() {
        let empty = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            load_file(empty.path()).await,
            Err(ImageError::Empty(_))
        ));
        assert!(matches!(
            load_file(Path::new("/nonexistent/avatar.jpg")).await,
            Err(ImageError::Io { .. })
        ));
    }

    #[tokio::test]
    async fn test_offline_fallbacks() {
        let images = Images::offline(ImageConfig {
            avatar_endpoint: Some("https://avatars.test/{name}".to_string()),
            ..ImageConfig::default()
        });

        assert!(!images.fetches_avatars());
        assert_eq!(
            images.product_image().await,
            ImageConfig::default().product_image_url
        );
        assert_eq!(images.avatar_placeholder().await, None);
        assert_eq!(
            images.avatar_for("Ali Tan", Some("data:x")).await.as_deref(),
            Some("data:x")
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_falls_back() {
        let config = ImageConfig {
            product_image_url: "http://127.0.0.1:9/x.jpg".to_string(),
            avatar_endpoint: Some("http://127.0.0.1:9/{name}".to_string()),
            http_timeout: Duration::from_secs(2),
            ..ImageConfig::default()
        };
        let images = Images::new(config, false).unwrap();

        assert!(images.fetches_avatars());
        assert_eq!(images.product_image().await, "http://127.0.0.1:9/x.jpg");
        assert_eq!(
            images.avatar_for("Ali Tan", Some("data:x")).await.as_deref(),
            Some("data:x")
        );
        assert_eq!(images.avatar_for("Ali Tan", None).await, None);

        let fetcher = ImageFetcher::new(Duration::from_secs(2)).unwrap();
        assert!(matches!(
            fetcher.fetch("http://127.0.0.1:9/x.jpg").await,
            Err(ImageError::Http(_))
        ));
    }
}
