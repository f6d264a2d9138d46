use super::*;

fn sample_header() -> HeaderFields {
    HeaderFields {
        name: "Alex".to_string(),
        school: "Gesamtschule Nord".to_string(),
        class_level: "7b".to_string(),
        date_time: "12.03. 8:00".to_string(),
        topic: "Brüche".to_string(),
    }
}

fn media_box(doc: &Document, page: ObjectId) -> Vec<f32> {
    doc.get_object(page)
        .and_then(Object::as_dict)
        .and_then(|d| d.get(b"MediaBox"))
        .and_then(Object::as_array)
        .unwrap()
        .iter()
        .map(|v| v.as_float().unwrap())
        .collect()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_two_pages_portrait_then_landscape() {
    let line = RasterImage::blank(140, 60);
    let bar = RasterImage::blank(156, 108);
    let bytes = assemble_pdf(&sample_header(), &line, &bar, &PageLayout::default()).unwrap();

    let doc = Document::load_mem(&bytes).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 2);
    assert_eq!(media_box(&doc, pages[&1]), vec![0.0, 0.0, 612.0, 792.0]);
    assert_eq!(media_box(&doc, pages[&2]), vec![0.0, 0.0, 792.0, 612.0]);
}

#[test]
fn test_header_text_is_in_first_page_content() {
    let line = RasterImage::blank(10, 10);
    let bar = RasterImage::blank(10, 10);
    let bytes = assemble_pdf(&sample_header(), &line, &bar, &PageLayout::default()).unwrap();
    assert!(contains(&bytes, b"Name: Alex"));
    assert!(contains(&bytes, b"Klassenstufe: 7b"));
    assert!(contains(&bytes, b"/Helvetica"));
    assert!(contains(&bytes, b"/DeviceRGB"));
}

#[test]
fn test_output_is_deterministic() {
    let line = RasterImage::blank(20, 30);
    let bar = RasterImage::blank(30, 20);
    let layout = PageLayout::default();
    let a = assemble_pdf(&sample_header(), &line, &bar, &layout).unwrap();
    let b = assemble_pdf(&sample_header(), &line, &bar, &layout).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_raster_is_rejected() {
    let line = RasterImage::blank(0, 0);
    let bar = RasterImage::blank(10, 10);
    let err = assemble_pdf(&sample_header(), &line, &bar, &PageLayout::default()).unwrap_err();
    assert!(matches!(err, ReportError::InvalidImage(_)));
}

#[test]
fn test_win_ansi_maps_umlauts_and_unknowns() {
    assert_eq!(win_ansi("Brüche"), b"Br\xfcche".to_vec());
    assert_eq!(win_ansi("a–b"), vec![b'a', 0x96, b'b']);
    assert_eq!(win_ansi("漢"), b"?".to_vec());
}
