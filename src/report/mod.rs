//! PDF rendering of physician reports.
//!
//! A report is the title line, a blank line and the summary text, set in
//! built-in Helvetica and word-wrapped onto as many A4 pages as needed.
//! Built-in PDF fonts only cover basic Latin text; other characters may not
//! render.

use crate::constants::{
    PAGE_BOTTOM_MM, PAGE_HEIGHT_MM, PAGE_MARGIN_LEFT_MM, PAGE_TOP_MM, PAGE_WIDTH_MM,
    REPORT_FONT_SIZE, REPORT_LINE_HEIGHT_MM, REPORT_TEXT_WIDTH_MM, REPORT_TITLE,
};
use crate::errors::ExportError;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::io::BufWriter;
use tracing::debug;

const MM_PER_POINT: f32 = 25.4 / 72.0;

/// Helvetica advance widths for ASCII 32..=126, in 1/1000 em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Width given to characters outside the table: a full em.
const FALLBACK_WIDTH: u16 = 1000;

/// The full text placed in a report for `summary`.
pub fn report_text(summary: &str) -> String {
    format!("{}\n\n{}", REPORT_TITLE, summary)
}

/// Renders `summary` into PDF bytes.
///
/// # Errors
///
/// Returns `ExportError::Render` if the font cannot be registered or the
/// document cannot be serialized.
pub fn render_pdf(summary: &str) -> Result<Vec<u8>, ExportError> {
    let lines = layout_lines(&report_text(summary), REPORT_TEXT_WIDTH_MM);

    let (doc, first_page, first_layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Render(format!("font error: {e}")))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = Mm(PAGE_TOP_MM);
    let mut pages = 1;

    for line in &lines {
        if y.0 < PAGE_BOTTOM_MM {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            y = Mm(PAGE_TOP_MM);
            pages += 1;
        }
        if !line.is_empty() {
            layer.use_text(line.as_str(), REPORT_FONT_SIZE, Mm(PAGE_MARGIN_LEFT_MM), y, &font);
        }
        y -= Mm(REPORT_LINE_HEIGHT_MM);
    }

    debug!("Rendered report: {} lines on {} pages", lines.len(), pages);

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Render(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Render(format!("buffer error: {e}")))
}

/// Width of `text` in millimetres when set in Helvetica at the body font size.
fn text_width_mm(text: &str) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let width = (c as u32)
                .checked_sub(32)
                .and_then(|i| HELVETICA_WIDTHS.get(i as usize))
                .copied()
                .unwrap_or(FALLBACK_WIDTH);
            u32::from(width)
        })
        .sum();
    units as f32 / 1000.0 * REPORT_FONT_SIZE * MM_PER_POINT
}

/// Splits text into printable lines.
///
/// Explicit newlines are kept (blank lines stay blank); each paragraph is
/// word-wrapped so no line is wider than `max_width_mm`.
fn layout_lines(text: &str, max_width_mm: f32) -> Vec<String> {
    text.lines()
        .flat_map(|paragraph| wrap_text(paragraph, max_width_mm))
        .collect()
}

fn wrap_text(text: &str, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in split_word(word, max_width_mm) {
            let candidate = if current.is_empty() {
                piece.clone()
            } else {
                format!("{} {}", current, piece)
            };
            if text_width_mm(&candidate) > max_width_mm && !current.is_empty() {
                lines.push(std::mem::replace(&mut current, piece));
            } else {
                current = candidate;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Breaks a word wider than a whole line into pieces that each fit.
fn split_word(word: &str, max_width_mm: f32) -> Vec<String> {
    if text_width_mm(word) <= max_width_mm {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        current.push(c);
        if text_width_mm(&current) > max_width_mm && current.chars().count() > 1 {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(c);
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
