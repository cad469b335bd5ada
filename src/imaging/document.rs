//! Multi-page PDF export.
//!
//! Every framed image becomes one page sized to the image at the requested
//! resolution, with the pixels embedded as an 8-bit `DeviceRGB` image XObject
//! that covers the whole page. Streams are Flate-compressed. No creation date
//! or other volatile metadata is written, so the same pages always serialize
//! to the same bytes.

use super::backend::BackendError;
use super::params::DocumentParams;
use crate::types::FramedImage;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

const POINTS_PER_INCH: f32 = 72.0;

/// Page edge length in points for `pixels` at `dpi`.
pub fn page_points(pixels: u32, dpi: f32) -> f32 {
    pixels as f32 * POINTS_PER_INCH / dpi
}

/// Build the document in memory without touching the filesystem.
pub fn build_pdf(pages: &[FramedImage], dpi: f32) -> Result<Document, BackendError> {
    if pages.is_empty() {
        return Err(BackendError::Encode(
            "a document needs at least one page".into(),
        ));
    }
    if !(dpi.is_finite() && dpi > 0.0) {
        return Err(BackendError::Configuration(format!(
            "document resolution must be positive, got {dpi}"
        )));
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids = pages
        .iter()
        .map(|page| add_page(&mut doc, pages_id, page, dpi).map(Object::Reference))
        .collect::<Result<Vec<_>, _>>()?;

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    Ok(doc)
}

fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    page: &FramedImage,
    dpi: f32,
) -> Result<ObjectId, BackendError> {
    let width_pt = page_points(page.width(), dpi);
    let height_pt = page_points(page.height(), dpi);

    let image = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(page.width()),
            "Height" => i64::from(page.height()),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        page.as_rgb().as_raw().clone(),
    );
    let image_id = doc.add_object(image);

    // Scale the unit image square up to the full page.
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Real(width_pt),
                    0.into(),
                    0.into(),
                    Object::Real(height_pt),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let encoded = content
        .encode()
        .map_err(|e| BackendError::Encode(format!("PDF content stream: {e}")))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let media_box = vec![
        0.into(),
        0.into(),
        Object::Real(width_pt),
        Object::Real(height_pt),
    ];
    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => media_box,
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                "Im0" => image_id,
            },
        },
    }))
}

/// Write `pages` to `params.output` as one PDF, first page first.
pub fn write_pdf(pages: &[FramedImage], params: &DocumentParams) -> Result<(), BackendError> {
    let mut doc = build_pdf(pages, params.dpi)?;
    let file = std::fs::File::create(&params.output)?;
    let mut writer = std::io::BufWriter::new(file);
    doc.save_to(&mut writer)
        .map_err(|e| BackendError::Encode(format!("PDF write failed: {e}")))?;
    Ok(())
}
