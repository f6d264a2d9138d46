use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use tracing::debug;

use crate::render::RasterImage;
use crate::report::ReportError;
use crate::report::header::HeaderFields;
use crate::report::layout::{PageLayout, Rect, VerticalAnchor};

const FONT_KEY: &str = "F1";
const IMAGE_KEY: &str = "Im1";

/// Builds the two-page report: header and line chart on a portrait page,
/// bar chart on a landscape page. No timestamps are written, so equal inputs
/// give equal bytes.
pub fn assemble_pdf(
    header: &HeaderFields,
    line_chart: &RasterImage,
    bar_chart: &RasterImage,
    layout: &PageLayout,
) -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let lines = header.lines();
    let line_frame = layout.line_chart_frame(lines.len());
    let line_place = line_frame.fit(line_chart.width(), line_chart.height(), VerticalAnchor::Top);
    debug_assert!(line_frame.contains(&line_place));
    let mut operations = Vec::new();
    for (line, baseline) in lines
        .iter()
        .zip(layout.header_baselines(lines.len(), line_frame.top()))
    {
        operations.extend(text_ops(line, layout.header_x, baseline, layout.font_size));
    }
    operations.extend(image_ops(&line_place));
    let first = add_page(
        &mut doc,
        pages_id,
        layout.portrait(),
        operations,
        Some(font_id),
        image_xobject(line_chart)?,
    )?;

    let bar_place = layout
        .bar_chart_frame()
        .fit(bar_chart.width(), bar_chart.height(), VerticalAnchor::Center);
    let second = add_page(
        &mut doc,
        pages_id,
        layout.landscape(),
        image_ops(&bar_place),
        None,
        image_xobject(bar_chart)?,
    )?;

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![first.into(), second.into()],
        "Count" => 2i64,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(win_ansi(&header.document_title()), StringFormat::Literal),
        "Producer" => Object::string_literal(concat!("lessonobs ", env!("CARGO_PKG_VERSION"))),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    debug!(bytes = out.len(), "assembled report pdf");
    Ok(out)
}

fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    (width, height): (f32, f32),
    operations: Vec<Operation>,
    font: Option<ObjectId>,
    image: Stream,
) -> Result<ObjectId, ReportError> {
    let image_id = doc.add_object(image);
    let content = Content { operations }.encode()?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

    let mut resources = dictionary! {
        "XObject" => dictionary! { IMAGE_KEY => image_id },
    };
    if let Some(font_id) = font {
        resources.set("Font", dictionary! { FONT_KEY => font_id });
    }
    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width),
            Object::Real(height),
        ],
        "Resources" => resources,
        "Contents" => content_id,
    }))
}

fn text_ops(text: &str, x: f32, y: f32, size: f32) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![FONT_KEY.into(), Object::Real(size)]),
        Operation::new("Td", vec![Object::Real(x), Object::Real(y)]),
        Operation::new(
            "Tj",
            vec![Object::String(win_ansi(text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}

fn image_ops(place: &Rect) -> Vec<Operation> {
    vec![
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![
                Object::Real(place.width),
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(place.height),
                Object::Real(place.x),
                Object::Real(place.y),
            ],
        ),
        Operation::new("Do", vec![Object::Name(IMAGE_KEY.as_bytes().to_vec())]),
        Operation::new("Q", vec![]),
    ]
}

/// RGB8 raster as a Flate-compressed DeviceRGB image XObject.
fn image_xobject(image: &RasterImage) -> Result<Stream, ReportError> {
    let expected = image.width() as usize * image.height() as usize * 3;
    if image.width() == 0 || image.height() == 0 || image.pixels().len() != expected {
        return Err(ReportError::InvalidImage(format!(
            "{}x{} raster with {} bytes",
            image.width(),
            image.height(),
            image.pixels().len()
        )));
    }
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(image.pixels())?;
    let data = encoder.finish()?;

    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => image.width() as i64,
        "Height" => image.height() as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8i64,
        "Filter" => "FlateDecode",
    };
    Ok(Stream::new(dict, data).with_compression(false))
}

/// Encodes text for the standard Helvetica font (WinAnsiEncoding).
/// Characters outside the code page become `?`.
pub(crate) fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/pdf.rs"]
mod tests;
