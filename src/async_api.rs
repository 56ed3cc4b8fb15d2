//! Async API for non-blocking file conversion.
//!
//! Enable the `async` feature to use these APIs:
//!
//! ```toml
//! [dependencies]
//! mdwx = { version = "0.1", features = ["async"] }
//! ```

use crate::error::{Error, Result};
use crate::render::RenderOptions;
use std::path::Path;
use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Asynchronously converts a Markdown file to a complete HTML document.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> mdwx::Result<()> {
/// let html = mdwx::async_api::convert_file("article.md").await?;
/// tokio::fs::write("article.html", html).await?;
/// # Ok(())
/// # }
/// ```
pub async fn convert_file(path: impl AsRef<Path>) -> Result<String> {
    convert_file_with_options(path, &RenderOptions::default()).await
}

/// Asynchronously converts a Markdown file with custom options.
pub async fn convert_file_with_options(
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<String> {
    let path = path.as_ref();
    if !fs::try_exists(path).await? {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).await?;
    convert_text(text, options.clone()).await
}

/// Asynchronously reads Markdown from a reader and converts it.
pub async fn convert_reader<R: AsyncRead + Unpin>(
    mut reader: R,
    options: &RenderOptions,
) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text).await?;
    convert_text(text, options.clone()).await
}

// Conversion is CPU-bound, so it runs on a blocking task.
async fn convert_text(text: String, options: RenderOptions) -> Result<String> {
    tokio::task::spawn_blocking(move || crate::to_html_with_options(&text, &options))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_convert_reader() {
        let input: &[u8] = b"# Title\n\n**bold**";
        let html = convert_reader(input, &RenderOptions::default().body_only())
            .await
            .unwrap();
        assert!(html.starts_with("<h1 "));
        assert!(html.contains("<strong"));
    }

    #[tokio::test]
    async fn test_convert_missing_file() {
        let err = convert_file("/nonexistent/input.md").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.md");
        std::fs::write(&path, "---\ntitle: Async\n---\nbody").unwrap();

        let html = convert_file(&path).await.unwrap();
        assert!(html.contains("<title>Async</title>"));
    }
}
