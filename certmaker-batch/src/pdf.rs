//! Single-page PDF persistence for rendered certificates.
//!
//! The certificate raster is JPEG-encoded and embedded as an image XObject
//! (`DCTDecode`) on a page whose media box matches the pixel dimensions at
//! 300 DPI, so the image fills the page edge to edge.

use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::RgbaImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use crate::error::BatchError;

/// Output resolution of persisted certificates.
pub const DPI: f32 = 300.0;

const POINTS_PER_INCH: f32 = 72.0;
const JPEG_QUALITY: u8 = 90;

/// Page size in points for a raster of the given pixel dimensions.
pub fn page_size_points(px_width: u32, px_height: u32) -> (f32, f32) {
    (
        px_width as f32 * POINTS_PER_INCH / DPI,
        px_height as f32 * POINTS_PER_INCH / DPI,
    )
}

/// Write `certificate` as a one-page 300 DPI PDF at `path`.
pub fn write_pdf(certificate: &RgbaImage, path: &Path) -> Result<(), BatchError> {
    let (px_width, px_height) = certificate.dimensions();
    let (page_width, page_height) = page_size_points(px_width, px_height);

    // JPEG cannot carry alpha; the certificate is fully opaque by now.
    let rgb = image::DynamicImage::ImageRgba8(certificate.clone()).to_rgb8();
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
        .encode(rgb.as_raw(), px_width, px_height, image::ColorType::Rgb8)
        .map_err(|e| BatchError::Encode(e.to_string()))?;

    let pdf_err = |message: String| BatchError::Pdf {
        path: path.to_path_buf(),
        message,
    };

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => px_width as i64,
            "Height" => px_height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        jpeg,
    ));

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            // Unit image space scaled to fill the page.
            Operation::new(
                "cm",
                vec![
                    page_width.into(),
                    0.0_f32.into(),
                    0.0_f32.into(),
                    page_height.into(),
                    0.0_f32.into(),
                    0.0_f32.into(),
                ],
            ),
            Operation::new("Do", vec!["Im0".into()]),
            Operation::new("Q", vec![]),
        ],
    };
    let encoded = content.encode().map_err(|e| pdf_err(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        },
        "MediaBox" => vec![
            0.0_f32.into(),
            0.0_f32.into(),
            page_width.into(),
            page_height.into(),
        ],
        "Contents" => content_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).map_err(|e| pdf_err(e.to_string()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn page_size_matches_300_dpi() {
        // 300 px at 300 DPI is exactly one inch.
        assert_eq!(page_size_points(300, 600), (72.0, 144.0));
    }

    #[test]
    fn writes_a_single_page_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CERT.pdf");
        let canvas = RgbaImage::from_pixel(30, 20, image::Rgba([255, 255, 255, 255]));

        write_pdf(&canvas, &path).expect("write");

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let doc = Document::load(&path).expect("reload");
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn identical_input_produces_identical_output() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.pdf");
        let b = dir.path().join("b.pdf");
        let canvas = RgbaImage::from_pixel(10, 10, image::Rgba([10, 20, 30, 255]));

        write_pdf(&canvas, &a).unwrap();
        write_pdf(&canvas, &b).unwrap();
        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }
}
