//! Page composition: cursor tracking, pagination, and draw-command emission.
//!
//! The composer owns the layout cursor `(x, y)` and the page counter. Within
//! a page `y` only moves down; a page break starts the next page, redraws the
//! running header and footer, and resets the cursor to the post-header
//! offset.

use log::debug;

use crate::layout::{
    line_height, wrap_text, ColorTheme, DrawList, DrawOp, FontSpec, PageGeometry, Rgb, TextMetrics,
};
use crate::model::{Citation, Sender, Token, TokenKind};

/// Text centered in page footers.
const FOOTER_LINE: &str = "Chat Session Report";

/// Longest citation source name rendered before truncation.
const CITATION_NAME_MAX: usize = 60;

/// Cursor-driven page composer producing a [`DrawList`].
pub struct PageComposer<'a, M: TextMetrics> {
    geometry: &'a PageGeometry,
    theme: &'a ColorTheme,
    metrics: &'a M,
    base_size: f32,
    title: String,
    date_line: String,
    ops: Vec<DrawOp>,
    page: u32,
    x: f32,
    y: f32,
}

impl<'a, M: TextMetrics> PageComposer<'a, M> {
    /// Create a composer and open page 1 (title header plus footer).
    pub fn new(
        geometry: &'a PageGeometry,
        theme: &'a ColorTheme,
        metrics: &'a M,
        base_size: f32,
        title: impl Into<String>,
        date_line: impl Into<String>,
    ) -> Self {
        let mut composer = Self {
            geometry,
            theme,
            metrics,
            base_size,
            title: title.into(),
            date_line: date_line.into(),
            ops: Vec::new(),
            page: 1,
            x: geometry.margin,
            y: 0.0,
        };
        composer.open_page();
        composer
    }

    /// Line advance at the body font size.
    fn line_height(&self) -> f32 {
        line_height(self.base_size)
    }

    /// Emit the current page's header and footer and position the cursor.
    fn open_page(&mut self) {
        self.ops.push(DrawOp::BeginPage { number: self.page });
        let margin = self.geometry.margin;

        if self.page == 1 {
            self.text(margin, 30.0, self.title.clone(), FontSpec::bold(24.0), self.theme.title);
            self.text(
                margin,
                40.0,
                self.date_line.clone(),
                FontSpec::body(10.0),
                self.theme.citation,
            );
            self.y = 55.0;
        } else {
            let font = FontSpec::body(9.0);
            self.text(margin, 15.0, self.title.clone(), font, self.theme.citation);
            self.text_right(
                self.geometry.width - margin,
                15.0,
                format!("Page {}", self.page),
                font,
                self.theme.citation,
            );
            self.y = 25.0;
        }

        // Footer goes down with the header so content never has to reach it.
        let footer_font = FontSpec::body(8.0);
        let footer_y = self.geometry.height - 10.0;
        self.text_center(
            self.geometry.width / 2.0,
            footer_y,
            FOOTER_LINE.to_string(),
            footer_font,
            self.theme.citation,
        );
        if self.page == 1 {
            self.text_right(
                self.geometry.width - margin,
                footer_y,
                "Page 1".to_string(),
                footer_font,
                self.theme.citation,
            );
        }

        self.x = margin;
    }

    /// Break to the next page and reset the cursor.
    fn break_page(&mut self) {
        debug!(
            "page break: y={:.1} exceeded threshold {:.1}, starting page {}",
            self.y,
            self.geometry.break_threshold(),
            self.page + 1
        );
        self.page += 1;
        self.open_page();
    }

    /// Break the page if `needed` vertical units do not fit above the bottom
    /// threshold. Returns whether a break happened.
    pub fn ensure_space(&mut self, needed: f32) -> bool {
        if self.y + needed > self.geometry.break_threshold() {
            self.break_page();
            return true;
        }
        false
    }

    /// Advance the cursor by a fixed vertical gap (no page-break check; the
    /// next space-checked element handles overflow).
    pub fn vertical_gap(&mut self, amount: f32) {
        self.y += amount;
    }

    /// Lay out one token at the cursor.
    pub fn token(&mut self, token: &Token) {
        self.ensure_space(0.0);

        match token.kind {
            TokenKind::Heading1 => self.heading(&token.content, 6.0, 6.0),
            TokenKind::Heading2 => self.heading(&token.content, 5.0, 4.0),
            TokenKind::Heading3 => self.heading(&token.content, 4.0, 2.0),
            TokenKind::HorizontalRule => self.horizontal_rule(),
            TokenKind::CodeBlock => self.code_block(&token.content),
            TokenKind::ListItem => self.list_item(&token.content),
            TokenKind::LineBreak => {
                self.y += self.line_height() + 2.0;
                self.x = self.geometry.margin;
            }
            TokenKind::Plain | TokenKind::Bold | TokenKind::Italic | TokenKind::InlineCode => {
                self.inline_run(token.kind, &token.content);
            }
        }
    }

    /// Headings share a shape: pre-gap, space check, one bold line at an
    /// enlarged size, advance. `size_delta` is added to the base font size;
    /// the pre-gap doubles as the extra post-advance.
    fn heading(&mut self, content: &str, pre_gap: f32, size_delta: f32) {
        self.y += pre_gap;
        self.ensure_space(self.base_size + size_delta + 4.0);

        let font = FontSpec::bold(self.base_size + size_delta);
        self.text(self.geometry.margin, self.y, content.to_string(), font, self.theme.body);

        self.y += self.base_size + pre_gap;
        self.x = self.geometry.margin;
    }

    fn horizontal_rule(&mut self) {
        self.y += 4.0;
        self.ensure_space(10.0);

        self.ops.push(DrawOp::Line {
            x1: self.geometry.margin,
            y1: self.y,
            x2: self.geometry.width - self.geometry.margin,
            y2: self.y,
            color: self.theme.rule,
        });

        self.y += 8.0;
        self.x = self.geometry.margin;
    }

    /// Code blocks are kept whole: the entire block is space-checked at once
    /// and never split across pages.
    fn code_block(&mut self, content: &str) {
        self.y += 4.0;

        let font = FontSpec::mono(self.base_size - 1.0);
        let inset_width = self.geometry.usable_width() - 10.0;
        let lines = wrap_text(content, inset_width, &font, self.metrics);
        let block_height = lines.len() as f32 * self.line_height() + 10.0;
        debug!("code block: {} wrapped lines, height {:.1}", lines.len(), block_height);

        self.ensure_space(block_height);

        self.ops.push(DrawOp::Rect {
            x: self.geometry.margin,
            y: self.y,
            width: self.geometry.usable_width(),
            height: block_height,
            fill: self.theme.code_background,
        });

        let mut line_y = self.y + 7.0;
        for line in &lines {
            if !line.is_empty() {
                self.text(self.geometry.margin + 5.0, line_y, line.clone(), font, self.theme.body);
            }
            line_y += self.line_height();
        }

        self.y += block_height + 6.0;
        self.x = self.geometry.margin;
    }

    fn list_item(&mut self, content: &str) {
        let font = FontSpec::body(self.base_size);
        let text = format!("\u{2022} {}", content);
        let lines = wrap_text(&text, self.geometry.usable_width(), &font, self.metrics);

        self.ensure_space(lines.len() as f32 * self.line_height());

        let mut line_y = self.y;
        for line in &lines {
            self.text(self.geometry.margin + 5.0, line_y, line.clone(), font, self.theme.body);
            line_y += self.line_height();
        }

        self.y += lines.len() as f32 * self.line_height() + 2.0;
        self.x = self.geometry.margin;
    }

    /// Word-level flow shared by all inline styles, so mixed-style runs wrap
    /// consistently. Each word keeps its trailing space except the last of
    /// the run.
    fn inline_run(&mut self, kind: TokenKind, content: &str) {
        let font = match kind {
            TokenKind::Bold => FontSpec::bold(self.base_size),
            TokenKind::Italic => FontSpec::italic(self.base_size),
            TokenKind::InlineCode => FontSpec::mono(self.base_size),
            _ => FontSpec::body(self.base_size),
        };

        let words: Vec<&str> = content.split(' ').collect();
        let last = words.len() - 1;

        for (i, word) in words.iter().enumerate() {
            let rendered = if i == last {
                (*word).to_string()
            } else {
                format!("{} ", word)
            };
            if rendered.is_empty() {
                continue;
            }

            let width = self.metrics.text_width(&rendered, &font);
            if self.x + width > self.geometry.width - self.geometry.margin {
                self.y += self.line_height() + 2.0;
                self.x = self.geometry.margin;
                self.ensure_space(self.line_height());
            }

            if kind == TokenKind::InlineCode {
                self.ops.push(DrawOp::Rect {
                    x: self.x,
                    y: self.y - self.base_size + 2.0,
                    width,
                    height: self.base_size,
                    fill: self.theme.code_background,
                });
            }

            self.text(self.x, self.y, rendered, font, self.theme.body);
            self.x += width;
        }
    }

    /// Draw the bold sender label that opens a message block.
    pub fn message_label(&mut self, sender: Sender) {
        self.ensure_space(20.0);

        let color = match sender {
            Sender::User => self.theme.user_label,
            Sender::Ai => self.theme.ai_label,
        };
        let font = FontSpec::bold(self.base_size + 1.0);
        self.text(self.geometry.margin, self.y, sender.label().to_string(), font, color);

        self.y += 6.0;
        self.x = self.geometry.margin;
    }

    /// Draw the "Sources:" block for a message's citations, one line per
    /// reference, each space-checked.
    pub fn citations(&mut self, citations: &[Citation]) {
        self.y += 2.0;

        let font = FontSpec::italic(self.base_size - 1.0);
        self.ensure_space(10.0);
        self.text(
            self.geometry.margin,
            self.y,
            "Sources:".to_string(),
            font,
            self.theme.citation,
        );
        self.y += 5.0;

        for (i, citation) in citations.iter().enumerate() {
            self.ensure_space(10.0);
            let line = format!(
                "[{}] {} (Page {})",
                i + 1,
                truncate_name(&citation.source_name),
                citation.page_number
            );
            self.text(self.geometry.margin + 5.0, self.y, line, font, self.theme.citation);
            self.y += 5.0;
        }
    }

    /// Finish composition.
    pub fn finish(self) -> DrawList {
        DrawList {
            ops: self.ops,
            page_count: self.page,
            geometry: self.geometry.clone(),
        }
    }

    fn text(&mut self, x: f32, y: f32, text: String, font: FontSpec, color: Rgb) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text,
            font,
            color,
        });
    }

    /// Draw text with its right edge at `x`.
    fn text_right(&mut self, x: f32, y: f32, text: String, font: FontSpec, color: Rgb) {
        let width = self.metrics.text_width(&text, &font);
        self.text(x - width, y, text, font, color);
    }

    /// Draw text centered on `x`.
    fn text_center(&mut self, x: f32, y: f32, text: String, font: FontSpec, color: Rgb) {
        let width = self.metrics.text_width(&text, &font);
        self.text(x - width / 2.0, y, text, font, color);
    }
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > CITATION_NAME_MAX {
        let cut: String = name.chars().take(CITATION_NAME_MAX).collect();
        format!("{}...", cut)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ApproxMetrics;

    fn composer<'a>(
        geometry: &'a PageGeometry,
        theme: &'a ColorTheme,
        metrics: &'a ApproxMetrics,
    ) -> PageComposer<'a, ApproxMetrics> {
        PageComposer::new(geometry, theme, metrics, 10.0, "Test", "Generated on 2026-01-01")
    }

    fn page_count(ops: &[DrawOp]) -> usize {
        ops.iter()
            .filter(|op| matches!(op, DrawOp::BeginPage { .. }))
            .count()
    }

    #[test]
    fn test_page_one_header_and_footer() {
        let geometry = PageGeometry::a4();
        let theme = ColorTheme::default();
        let metrics = ApproxMetrics;
        let list = composer(&geometry, &theme, &metrics).finish();

        assert_eq!(list.page_count, 1);
        let texts: Vec<&str> = list.text_runs().collect();
        assert!(texts.contains(&"Test"));
        assert!(texts.contains(&"Generated on 2026-01-01"));
        assert!(texts.contains(&FOOTER_LINE));
        assert!(texts.contains(&"Page 1"));
    }

    #[test]
    fn test_ensure_space_breaks_page() {
        let geometry = PageGeometry::a4();
        let theme = ColorTheme::default();
        let metrics = ApproxMetrics;
        let mut c = composer(&geometry, &theme, &metrics);

        assert!(!c.ensure_space(10.0));
        c.vertical_gap(500.0);
        assert!(c.ensure_space(10.0));

        let list = c.finish();
        assert_eq!(list.page_count, 2);
        assert_eq!(page_count(&list.ops), 2);
        assert!(list.text_runs().any(|t| t == "Page 2"));
    }

    #[test]
    fn test_heading_draws_enlarged_bold_line() {
        let geometry = PageGeometry::a4();
        let theme = ColorTheme::default();
        let metrics = ApproxMetrics;
        let mut c = composer(&geometry, &theme, &metrics);

        c.token(&Token::new(TokenKind::Heading1, "Big"));
        let list = c.finish();

        let found = list.ops.iter().any(|op| {
            matches!(op, DrawOp::Text { text, font, .. }
                if text == "Big" && font.size == 16.0 && font.style == crate::layout::FontStyle::Bold)
        });
        assert!(found);
    }

    #[test]
    fn test_code_block_emits_background_rect() {
        let geometry = PageGeometry::a4();
        let theme = ColorTheme::default();
        let metrics = ApproxMetrics;
        let mut c = composer(&geometry, &theme, &metrics);

        c.token(&Token::new(TokenKind::CodeBlock, "let x = 1;"));
        let list = c.finish();

        let rect = list.ops.iter().any(|op| {
            matches!(op, DrawOp::Rect { fill, .. } if *fill == theme.code_background)
        });
        assert!(rect);
        assert!(list.text_runs().any(|t| t == "let x = 1;"));
    }

    #[test]
    fn test_inline_code_word_gets_highlight() {
        let geometry = PageGeometry::a4();
        let theme = ColorTheme::default();
        let metrics = ApproxMetrics;
        let mut c = composer(&geometry, &theme, &metrics);

        c.token(&Token::new(TokenKind::InlineCode, "two words"));
        let list = c.finish();

        let rects = list
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { .. }))
            .count();
        assert_eq!(rects, 2);
    }

    #[test]
    fn test_long_run_wraps_and_resets_x() {
        let geometry = PageGeometry::a4();
        let theme = ColorTheme::default();
        let metrics = ApproxMetrics;
        let mut c = composer(&geometry, &theme, &metrics);

        let long = "word ".repeat(120);
        c.token(&Token::plain(long.trim_end()));
        let list = c.finish();

        // Several runs must start back at the left margin after wrapping.
        let at_margin = list
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { x, .. } if *x == geometry.margin))
            .count();
        assert!(at_margin > 2);
    }

    #[test]
    fn test_citation_name_truncated() {
        let geometry = PageGeometry::a4();
        let theme = ColorTheme::default();
        let metrics = ApproxMetrics;
        let mut c = composer(&geometry, &theme, &metrics);

        let long_name = "n".repeat(80);
        c.citations(&[Citation::new(long_name, 4)]);
        let list = c.finish();

        let line = list
            .text_runs()
            .find(|t| t.starts_with("[1]"))
            .expect("citation line");
        assert!(line.contains(&"n".repeat(60)));
        assert!(!line.contains(&"n".repeat(61)));
        assert!(line.contains("..."));
        assert!(line.ends_with("(Page 4)"));
    }
}
