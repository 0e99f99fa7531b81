//! Flattening a documentation page into styled terminal lines.
//!
//! Every section starts on its own row; the row index of each heading is
//! recorded so the table of contents can scroll to it.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use setup_blog_app::pages::{DocumentationPage, Footer};
use setup_blog_core::{Block, Section, Step};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{palette, styles};

const GUTTER: &str = "▍ ";

/// A page laid out for one column width.
#[derive(Debug, Default)]
pub(crate) struct DocLayout {
    pub lines: Vec<Line<'static>>,
    /// Row of each section heading, in section order
    pub anchor_rows: Vec<usize>,
}

impl DocLayout {
    pub(crate) fn build(page: &DocumentationPage<'_>, width: u16) -> Self {
        let mut writer = Writer::new(usize::from(width));

        writer.text(vec![], vec![], page.header, styles::page_title());
        writer.rule();
        writer.blank();

        for section in page.sections {
            writer.section(section);
        }

        writer.footer(&page.footer);

        DocLayout {
            lines: writer.lines,
            anchor_rows: writer.anchor_rows,
        }
    }
}

struct Writer {
    width: usize,
    lines: Vec<Line<'static>>,
    anchor_rows: Vec<usize>,
}

impl Writer {
    fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            lines: Vec::new(),
            anchor_rows: Vec::new(),
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn rule(&mut self) {
        self.lines
            .push(Line::styled("─".repeat(self.width), styles::border_inactive()));
    }

    /// Word-wrap `text` after `first` on the opening row and `rest` on
    /// continuation rows.
    fn text(
        &mut self,
        first: Vec<Span<'static>>,
        rest: Vec<Span<'static>>,
        text: &str,
        style: Style,
    ) {
        let first_width: usize = first.iter().map(|s| s.width()).sum();
        let rest_width: usize = rest.iter().map(|s| s.width()).sum();
        let budget = self.width.saturating_sub(first_width.max(rest_width));

        for (i, row) in wrap(text, budget).into_iter().enumerate() {
            let mut spans = if i == 0 { first.clone() } else { rest.clone() };
            spans.push(Span::styled(row, style));
            self.lines.push(Line::from(spans));
        }
    }

    /// Hard-wrap preformatted text, keeping its whitespace.
    fn code(&mut self, prefix: Vec<Span<'static>>, text: &str) {
        let prefix_width: usize = prefix.iter().map(|s| s.width()).sum();
        let budget = self.width.saturating_sub(prefix_width);
        for row in wrap_code(text, budget) {
            let mut spans = prefix.clone();
            spans.push(Span::styled(row, styles::code()));
            self.lines.push(Line::from(spans));
        }
    }

    fn section(&mut self, section: &Section) {
        self.anchor_rows.push(self.lines.len());
        self.text(vec![], vec![], &section.title, styles::section_heading());
        self.blank();

        for block in &section.blocks {
            self.block(block);
            self.blank();
        }

        self.rule();
        self.blank();
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Heading { text } => {
                self.text(
                    vec![],
                    vec![],
                    text,
                    styles::subheading().add_modifier(Modifier::BOLD),
                );
            }
            Block::Paragraph { text } => self.text(vec![], vec![], text, styles::body()),
            Block::Pills { labels } => self.pills(labels),
            Block::Items { items } => {
                for item in items {
                    self.text(
                        vec![Span::styled("• ", styles::accent())],
                        vec![Span::raw("  ")],
                        &item.primary,
                        styles::text_primary().add_modifier(Modifier::BOLD),
                    );
                    if let Some(secondary) = &item.secondary {
                        self.text(
                            vec![Span::raw("  ")],
                            vec![Span::raw("  ")],
                            secondary,
                            styles::text_secondary(),
                        );
                    }
                }
            }
            Block::Step(step) => self.step(step),
            Block::Choice {
                title,
                choice,
                tone,
                note,
            } => {
                let tone_style = styles::tone(*tone);
                self.text(
                    vec![
                        Span::styled("◆ ", tone_style),
                        Span::styled(
                            format!("{}: ", title),
                            styles::text_primary().add_modifier(Modifier::BOLD),
                        ),
                    ],
                    vec![Span::raw("  ")],
                    choice,
                    tone_style,
                );
                self.text(
                    vec![Span::raw("  ")],
                    vec![Span::raw("  ")],
                    note,
                    styles::text_secondary(),
                );
            }
            Block::Code { caption, text } => {
                if let Some(caption) = caption {
                    self.text(vec![], vec![], caption, styles::text_muted());
                }
                self.code(vec![Span::styled("│ ", styles::border_inactive())], text);
            }
            Block::Summary { text } => {
                let label = Span::styled(
                    "✔ Result: ",
                    styles::tone(setup_blog_core::Tone::Success).add_modifier(Modifier::BOLD),
                );
                let indent = " ".repeat(label.width());
                self.text(vec![label], vec![Span::raw(indent)], text, styles::body());
            }
        }
    }

    fn step(&mut self, step: &Step) {
        let gutter = || Span::styled(GUTTER, Style::default().fg(palette::CARD_ACCENT));

        self.text(
            vec![
                gutter(),
                Span::styled(format!("{} ", step.label), styles::accent_bold()),
            ],
            vec![gutter()],
            &step.title,
            styles::text_primary().add_modifier(Modifier::BOLD),
        );

        let fields = [
            ("What: ", &step.what),
            ("Why: ", &step.why),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                self.text(
                    vec![gutter(), Span::styled(label, styles::subheading())],
                    vec![gutter()],
                    value,
                    styles::body(),
                );
            }
        }

        if let Some(command) = &step.command {
            self.code(vec![gutter(), Span::styled("$ ", styles::text_muted())], command);
        }

        if let Some(expect) = &step.expect {
            self.text(
                vec![gutter(), Span::styled("Expect: ", styles::subheading())],
                vec![gutter()],
                expect,
                styles::body(),
            );
        }

        if let Some(note) = &step.note {
            self.text(
                vec![gutter(), Span::styled("Note: ", styles::keybinding())],
                vec![gutter()],
                note,
                styles::text_secondary().add_modifier(Modifier::ITALIC),
            );
        }
    }

    /// Labels packed into rows of ` label ` chips.
    fn pills(&mut self, labels: &[String]) {
        let chip = Style::default()
            .fg(palette::TEXT_BRIGHT)
            .bg(palette::INPUT_BG);
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut used = 0;

        for label in labels {
            let text = format!(" {} ", label);
            let w = text.width() + 1;
            if used > 0 && used + w > self.width {
                self.lines.push(Line::from(std::mem::take(&mut row)));
                used = 0;
            }
            row.push(Span::styled(text, chip));
            row.push(Span::raw(" "));
            used += w;
        }
        if !row.is_empty() {
            self.lines.push(Line::from(row));
        }
    }

    fn footer(&mut self, footer: &Footer) {
        self.text(vec![], vec![], &footer.text, styles::text_secondary());
        for link in &footer.social {
            self.text(
                vec![Span::styled(format!("{} ", link.label), styles::text_muted())],
                vec![Span::raw("  ")],
                &link.path,
                styles::accent(),
            );
        }
    }
}

/// Greedy word wrap. Words wider than `width` are split.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if current_width > 0 && current_width + 1 + word_width > width {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width > width {
                for ch in word.chars() {
                    let w = ch.width().unwrap_or(0);
                    if current_width + w > width && current_width > 0 {
                        rows.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += w;
                }
                continue;
            }

            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        rows.push(current);
    }

    rows
}

/// Split each source line into `width`-column chunks.
pub(crate) fn wrap_code(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;
        for ch in line.chars() {
            let w = ch.width().unwrap_or(0);
            if current_width + w > width && current_width > 0 {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
        rows.push(current);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use setup_blog_app::config::SocialSettings;
    use setup_blog_app::pages;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn sample_sections() -> Vec<Section> {
        vec![
            Section::new("intro", "Introduction").with_blocks(vec![Block::Paragraph {
                text: "A short paragraph.".into(),
            }]),
            Section::new("docker", "Install Docker").with_blocks(vec![
                Block::Step(Step {
                    label: "A3.1".into(),
                    title: "Add the repository".into(),
                    command: Some("sudo apt update\nsudo apt install docker-ce".into()),
                    ..Step::default()
                }),
                Block::Summary {
                    text: "Docker runs.".into(),
                },
            ]),
        ]
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_keeps_explicit_newlines() {
        assert_eq!(wrap("one\n\ntwo", 20), vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_code_preserves_indent() {
        assert_eq!(
            wrap_code("  a b\nlonger-line", 6),
            vec!["  a b", "longer", "-line"]
        );
    }

    #[test]
    fn test_anchor_rows_point_at_section_titles() {
        let sections = sample_sections();
        let page = pages::documentation(&sections, &SocialSettings::default(), 2026);
        let layout = DocLayout::build(&page, 60);

        assert_eq!(layout.anchor_rows.len(), 2);
        assert_eq!(line_text(&layout.lines[layout.anchor_rows[0]]), "Introduction");
        assert_eq!(
            line_text(&layout.lines[layout.anchor_rows[1]]),
            "Install Docker"
        );
        assert!(layout.anchor_rows[0] < layout.anchor_rows[1]);
    }

    #[test]
    fn test_each_section_closes_with_a_rule() {
        let sections = sample_sections();
        let page = pages::documentation(&sections, &SocialSettings::default(), 2026);
        let layout = DocLayout::build(&page, 30);
        let text: Vec<String> = layout.lines.iter().map(line_text).collect();
        let is_rule = |l: &String| l.as_str() == "─".repeat(30);

        let first = &text[layout.anchor_rows[0]..layout.anchor_rows[1]];
        assert_eq!(first.iter().filter(|l| is_rule(l)).count(), 1);
        assert!(is_rule(&text[layout.anchor_rows[1] - 2]));

        let last = &text[layout.anchor_rows[1]..];
        assert!(last.iter().any(is_rule));
    }

    #[test]
    fn test_step_command_lines_are_prefixed() {
        let sections = sample_sections();
        let page = pages::documentation(&sections, &SocialSettings::default(), 2026);
        let layout = DocLayout::build(&page, 60);
        let text: Vec<String> = layout.lines.iter().map(line_text).collect();

        assert!(text.contains(&"▍ $ sudo apt update".to_string()));
        assert!(text.contains(&"▍ $ sudo apt install docker-ce".to_string()));
        assert!(text.iter().any(|l| l.starts_with("✔ Result: Docker runs.")));
    }

    #[test]
    fn test_empty_page_has_header_and_footer_only() {
        let page = pages::documentation(&[], &SocialSettings::default(), 2026);
        let layout = DocLayout::build(&page, 60);

        assert!(layout.anchor_rows.is_empty());
        assert_eq!(line_text(&layout.lines[0]), pages::DOCS_HEADER);
        let text: Vec<String> = layout.lines.iter().map(line_text).collect();
        assert!(text.iter().any(|l| l.contains("2026")));
    }

    #[test]
    fn test_lines_fit_width() {
        let sections = sample_sections();
        let page = pages::documentation(&sections, &SocialSettings::default(), 2026);
        let layout = DocLayout::build(&page, 24);
        for line in &layout.lines {
            assert!(line.width() <= 24, "{:?} is too wide", line_text(line));
        }
    }
}
