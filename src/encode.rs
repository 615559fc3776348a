//! Image Encoder: turns an uploaded photo into a data-URI-ready base64 string.

use base64::{engine::general_purpose, Engine as _};
use image::ImageFormat;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("empty image upload")]
    Empty,
    #[error("unrecognized image data, expected PNG or JPEG")]
    Unrecognized,
    #[error("unsupported image format {0}, expected PNG or JPEG")]
    Unsupported(String),
}

/// Base64 text of one upload plus its sniffed MIME type.
///
/// A pure function of the input: decoding [`base64`](EncodedImage::base64)
/// yields the uploaded bytes unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    base64: String,
    mime: &'static str,
}

impl EncodedImage {
    pub fn base64(&self) -> &str {
        &self.base64
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Renders the `data:<mime>;base64,<data>` URI embedded in the
    /// chat-completion request.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// Validates and encodes one uploaded image.
///
/// Accepts PNG or JPEG content, sniffed from the magic bytes rather than the
/// filename, and returns the standard-alphabet base64 of exactly the input
/// bytes.
pub fn encode_image(bytes: &[u8]) -> Result<EncodedImage, EncodeError> {
    if bytes.is_empty() {
        return Err(EncodeError::Empty);
    }
    let mime = match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(other) => return Err(EncodeError::Unsupported(format!("{other:?}"))),
        Err(_) => return Err(EncodeError::Unrecognized),
    };
    Ok(EncodedImage {
        base64: general_purpose::STANDARD.encode(bytes),
        mime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    const JPEG_MAGIC: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];

    #[test]
    fn empty_upload_is_rejected() {
        assert!(matches!(encode_image(&[]), Err(EncodeError::Empty)));
    }

    #[test]
    fn png_bytes_are_labelled_png() {
        let encoded = encode_image(&PNG_MAGIC).unwrap();
        assert_eq!(encoded.mime(), "image/png");
        assert!(encoded.to_data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn jpeg_bytes_are_labelled_jpeg() {
        let encoded = encode_image(&JPEG_MAGIC).unwrap();
        assert_eq!(encoded.mime(), "image/jpeg");
        assert!(encoded.to_data_uri().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn recognised_non_photo_formats_are_refused() {
        let gif = b"GIF89a\x01\x00\x01\x00";
        assert!(matches!(encode_image(gif), Err(EncodeError::Unsupported(_))));
    }

    #[test]
    fn garbage_bytes_are_refused() {
        assert!(matches!(
            encode_image(b"definitely not an image"),
            Err(EncodeError::Unrecognized)
        ));
    }

    #[test]
    fn base64_is_exactly_the_input() {
        let mut bytes = PNG_MAGIC.to_vec();
        bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52]);
        let encoded = encode_image(&bytes).unwrap();
        assert_eq!(encoded.base64(), general_purpose::STANDARD.encode(&bytes));
    }

    proptest! {
        #[test]
        fn png_uploads_roundtrip_through_base64(
            tail in proptest::collection::vec(any::<u8>(), 0..2048)
        ) {
            let mut bytes = PNG_MAGIC.to_vec();
            bytes.extend_from_slice(&tail);
            let encoded = encode_image(&bytes).unwrap();
            let decoded = general_purpose::STANDARD.decode(encoded.base64()).unwrap();
            prop_assert_eq!(decoded, bytes);
        }

        #[test]
        fn jpeg_uploads_roundtrip_through_base64(
            tail in proptest::collection::vec(any::<u8>(), 0..2048)
        ) {
            let mut bytes = JPEG_MAGIC.to_vec();
            bytes.extend_from_slice(&tail);
            let encoded = encode_image(&bytes).unwrap();
            let decoded = general_purpose::STANDARD.decode(encoded.base64()).unwrap();
            prop_assert_eq!(decoded, bytes);
        }
    }
}
