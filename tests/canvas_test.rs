//! Integration tests for the drawing-backend seam.

use chatpress::{
    Canvas, DocumentCanvas, DrawOp, ExportOptions, Exporter, FontSpec, Message, Rgb, Transcript,
    to_draw_list,
};
use chrono::{TimeZone, Utc};

/// Recording backend standing in for a real PDF-drawing library.
#[derive(Default)]
struct RecordingCanvas {
    pages: Vec<u32>,
    events: Vec<String>,
}

impl Canvas for RecordingCanvas {
    fn begin_page(&mut self, number: u32) {
        self.pages.push(number);
        self.events.push(format!("page {}", number));
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, _font: &FontSpec, _color: Rgb) {
        self.events.push(format!("text {:.1},{:.1} {}", x, y, text));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, _fill: Rgb) {
        self.events
            .push(format!("rect {:.1},{:.1} {:.1}x{:.1}", x, y, width, height));
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, _color: Rgb) {
        self.events
            .push(format!("line {:.1},{:.1}-{:.1},{:.1}", x1, y1, x2, y2));
    }
}

impl DocumentCanvas for RecordingCanvas {
    fn finish(self) -> Vec<u8> {
        self.events.join("\n").into_bytes()
    }
}

fn options() -> ExportOptions {
    ExportOptions::new().with_exported_at(Utc.with_ymd_and_hms(2026, 2, 3, 9, 30, 0).unwrap())
}

fn sample() -> Transcript {
    Transcript::new("Canvas Test")
        .with_message(Message::user("see `code` here"))
        .with_message(Message::ai("---\nanswer"))
}

#[test]
fn test_replay_preserves_counts_and_order() {
    let list = to_draw_list(&sample(), &options()).unwrap();

    let mut canvas = RecordingCanvas::default();
    list.replay(&mut canvas);

    assert_eq!(canvas.events.len(), list.len());
    assert_eq!(canvas.events[0], "page 1");

    let text_ops = list
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Text { .. }))
        .count();
    let text_events = canvas
        .events
        .iter()
        .filter(|e| e.starts_with("text"))
        .count();
    assert_eq!(text_events, text_ops);

    // The horizontal rule came through as a line event.
    assert!(canvas.events.iter().any(|e| e.starts_with("line")));
    // The inline code highlight came through as a rect event.
    assert!(canvas.events.iter().any(|e| e.starts_with("rect")));
}

#[test]
fn test_replay_page_sequence() {
    let mut transcript = Transcript::new("Many Pages");
    for i in 0..40 {
        transcript.add_message(Message::ai(format!("message number {}", i)));
    }
    let list = to_draw_list(&transcript, &options()).unwrap();
    assert!(list.page_count > 1);

    let mut canvas = RecordingCanvas::default();
    list.replay(&mut canvas);

    let expected: Vec<u32> = (1..=list.page_count).collect();
    assert_eq!(canvas.pages, expected);
}

#[test]
fn test_document_artifact_via_canvas() {
    let artifact = Exporter::with_options(options())
        .document(&sample(), RecordingCanvas::default())
        .unwrap();

    assert_eq!(artifact.filename, "canvas_test_report.pdf");
    assert_eq!(artifact.mime_type, "application/pdf");
    assert!(!artifact.is_empty());

    let body = artifact.as_text().expect("recording canvas emits text");
    assert!(body.starts_with("page 1"));
    assert!(body.contains("Canvas Test"));
}

#[test]
fn test_export_dispatches_on_format() {
    use chatpress::OutputFormat;

    let markdown = Exporter::with_options(options().with_format(OutputFormat::Markdown))
        .export(&sample(), RecordingCanvas::default())
        .unwrap();
    assert_eq!(markdown.mime_type, "text/markdown");

    let text = Exporter::with_options(options().with_format(OutputFormat::Text))
        .export(&sample(), RecordingCanvas::default())
        .unwrap();
    assert_eq!(text.mime_type, "text/plain");

    let document = Exporter::with_options(options().with_format(OutputFormat::Document))
        .export(&sample(), RecordingCanvas::default())
        .unwrap();
    assert_eq!(document.mime_type, "application/pdf");
}
