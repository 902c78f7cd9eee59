//! Image upload: files become self-contained `data:` URLs

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::debug;
use std::path::Path;

/// `data:<mime>;base64,<payload>`
pub fn data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// MIME type guessed from the file extension
pub fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

pub fn file_to_data_url(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    debug!("Encoding {} ({} bytes) as data URL", path.display(), bytes.len());
    Ok(data_url(&bytes, mime_for(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_data_url_encoding() {
        assert_eq!(data_url(b"hi", "image/png"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_for(Path::new("logo.PNG")), "image/png");
        assert_eq!(mime_for(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("notes")), "application/octet-stream");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pixel.gif");
        std::fs::write(&path, b"GIF89a").unwrap();
        assert_eq!(file_to_data_url(&path).unwrap(), "data:image/gif;base64,R0lGODlh");
        assert!(file_to_data_url(&dir.path().join("missing.gif")).is_err());
    }
}
