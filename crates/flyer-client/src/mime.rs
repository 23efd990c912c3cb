//! MIME type derivation for ad images.

/// Maps a filename extension to a MIME type.
///
/// Purely extension-based and case-insensitive; no content sniffing. A
/// filename with no extension, or an unrecognized one, falls back to
/// `application/octet-stream`.
#[must_use]
pub fn ext_to_mime(filename: &str) -> &'static str {
    let ext = match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => String::new(),
    };
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(ext_to_mime("milk.jpg"), "image/jpeg");
        assert_eq!(ext_to_mime("milk.jpeg"), "image/jpeg");
        assert_eq!(ext_to_mime("milk.png"), "image/png");
        assert_eq!(ext_to_mime("milk.gif"), "image/gif");
        assert_eq!(ext_to_mime("milk.webp"), "image/webp");
        assert_eq!(ext_to_mime("milk.svg"), "image/svg+xml");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(ext_to_mime("photo.JPG"), "image/jpeg");
        assert_eq!(ext_to_mime("photo.PnG"), "image/png");
    }

    #[test]
    fn missing_or_unknown_extension_falls_back() {
        assert_eq!(ext_to_mime("noext"), "application/octet-stream");
        assert_eq!(ext_to_mime("weird.tiff"), "application/octet-stream");
        assert_eq!(ext_to_mime(""), "application/octet-stream");
    }

    #[test]
    fn last_extension_wins() {
        assert_eq!(ext_to_mime("flyer.page.webp"), "image/webp");
    }
}
