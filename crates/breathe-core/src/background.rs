//! Background artwork picker.
//!
//! Turns a locally chosen image file into an embeddable `data:` URI so the
//! settings record can carry it around as a plain string, the same shape a
//! remote artwork URL has. Read failures are surfaced to the caller -- the
//! picker view shows them inline and keeps the previous background.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("not an image file: {0}")]
    NotAnImage(String),
    #[error("could not read image: {0}")]
    Io(#[from] std::io::Error),
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Read an image file and encode it as a `data:<mime>;base64,...` URI.
pub fn load_data_uri(path: impl AsRef<Path>) -> Result<String, BackgroundError> {
    let path = path.as_ref();
    let mime = mime_for(path)
        .ok_or_else(|| BackgroundError::NotAnImage(path.display().to_string()))?;
    let bytes = std::fs::read(path)?;
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn encodes_a_png_as_a_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calm.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

        let uri = load_data_uri(&path).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(uri, format!("data:image/png;base64,{}", "iVBORw=="));
    }

    #[test]
    fn rejects_non_image_extensions() {
        let err = load_data_uri("notes.txt").unwrap_err();
        assert!(matches!(err, BackgroundError::NotAnImage(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_data_uri(dir.path().join("gone.jpg")).unwrap_err();
        assert!(matches!(err, BackgroundError::Io(_)));
    }
}
