//! Serializes a laid-out `Document` to PDF bytes with lopdf.
//!
//! Output depends only on the document: no random file IDs, and the single
//! date written (`CreationDate`) is the document's own generation timestamp.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document as PdfDocument, Object, StringFormat, Stream};
use tracing::debug;

use crate::layout::document::{Document, Page};
use crate::layout::font_metrics::{is_zero_width, FontStyle};
use crate::render::RenderError;

const PDF_VERSION: &str = "1.5";
const PRODUCER: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

pub fn write_pdf(document: &Document) -> Result<Vec<u8>, RenderError> {
    let mut pdf = PdfDocument::with_version(PDF_VERSION);

    let pages_id = pdf.new_object_id();
    let regular_id = pdf.add_object(font_dictionary(FontStyle::Regular));
    let bold_id = pdf.add_object(font_dictionary(FontStyle::Bold));
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! {
            FontStyle::Regular.resource_name() => regular_id,
            FontStyle::Bold.resource_name() => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(document.pages.len());
    for page in &document.pages {
        let content = Content {
            operations: page_operations(page),
        };
        let encoded = content
            .encode()
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let content_id = pdf.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i32;
    pdf.set_object(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                document.page_width_pt.into(),
                document.page_height_pt.into(),
            ],
        },
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);

    let info_id = pdf.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(&document.title), StringFormat::Literal),
        "Producer" => Object::string_literal(PRODUCER),
        "CreationDate" => Object::string_literal(
            document.generated_at.format("D:%Y%m%d%H%M%S").to_string()
        ),
    });
    pdf.trailer.set("Info", info_id);
    pdf.compress();

    let mut buffer = Vec::new();
    pdf.save_to(&mut buffer)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    debug!(
        pages = document.pages.len(),
        bytes = buffer.len(),
        "PDF serialized"
    );
    Ok(buffer)
}

fn font_dictionary(style: FontStyle) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => style.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn page_operations(page: &Page) -> Vec<Operation> {
    if page.segments.is_empty() {
        return Vec::new();
    }
    let mut ops = Vec::with_capacity(page.segments.len() * 3 + 2);
    ops.push(Operation::new("BT", vec![]));
    for segment in &page.segments {
        ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(segment.style.resource_name().as_bytes().to_vec()),
                segment.font_size_pt.into(),
            ],
        ));
        ops.push(Operation::new(
            "Tm",
            vec![
                1.into(),
                0.into(),
                0.into(),
                1.into(),
                segment.x.into(),
                segment.y.into(),
            ],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(&segment.text),
                StringFormat::Literal,
            )],
        ));
    }
    ops.push(Operation::new("ET", vec![]));
    ops
}

/// Encodes text for a WinAnsiEncoding base-14 font. Zero-width code points are
/// dropped; anything WinAnsi cannot express becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|c| !is_zero_width(*c))
        .map(win_ansi_byte)
        .collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' | '\u{A0}'..='\u{FF}' => c as u8,
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
        '™' => 0x99,
        _ => b'?',
    }
}
