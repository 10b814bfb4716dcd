//! Dialog widget for confirmations, notices, and errors
//!
//! Provides a self-contained widget that implements the Widget trait.
//! Handles centering, background dimming, borders, and content rendering.

use crate::styles::theme;
use ratatui::layout::Spacing;
use ratatui::prelude::*;
use ratatui::symbols::merge::MergeStrategy;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap};

/// Dialog variant for different visual styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogVariant {
    #[default]
    Default,
    Warning,
    Error,
}

impl DialogVariant {
    /// Get the prefix text for the variant
    fn prefix(&self) -> &'static str {
        match self {
            DialogVariant::Default => "",
            DialogVariant::Warning => "Warning",
            DialogVariant::Error => "Error",
        }
    }
}

/// Dialog widget - a self-contained confirmation/notice/error dialog
pub struct Dialog<'a> {
    /// Title shown in the title block
    pub title: &'a str,
    /// Content text to display
    pub content: &'a str,
    /// Minimum width in columns
    pub min_width: u16,
    /// Maximum width in columns
    pub max_width: u16,
    /// Height percentage (0-100)
    pub height_percent: u16,
    /// Visual variant (affects colors and title prefix)
    pub variant: DialogVariant,
    /// Whether to dim the background behind the dialog
    pub dim_background: bool,
    /// Footer text to display below the dialog (optional)
    pub footer: Option<&'a str>,
}

impl<'a> Dialog<'a> {
    /// Create a new dialog with title and content
    ///
    /// Width is automatically calculated based on content length,
    /// clamped between 50-80 columns by default.
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            content,
            min_width: 50,
            max_width: 80,
            height_percent: 40,
            variant: DialogVariant::Default,
            dim_background: true,
            footer: None,
        }
    }

    /// Set minimum width in columns (default: 50)
    pub fn min_width(mut self, columns: u16) -> Self {
        self.min_width = columns;
        self
    }

    /// Set maximum width in columns (default: 80)
    pub fn max_width(mut self, columns: u16) -> Self {
        self.max_width = columns;
        self
    }

    /// Set the height percentage (0-100)
    pub fn height(mut self, percent: u16) -> Self {
        self.height_percent = percent;
        self
    }

    /// Set the visual variant (affects border color and title prefix)
    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set whether to dim the background behind the dialog
    pub fn dim_background(mut self, dim: bool) -> Self {
        self.dim_background = dim;
        self
    }

    /// Set footer text to display below the dialog
    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();

        // Build title with variant prefix first (needed for width calculation)
        let prefix = self.variant.prefix();
        let title_text = if prefix.is_empty() {
            self.title.to_string()
        } else {
            format!("{}: {}", prefix, self.title)
        };

        // Auto width: longest of title/footer plus breathing room,
        // clamped to min/max and the available area
        let title_len = title_text.len() as u16;
        let footer_len = self.footer.map(|f| f.len() as u16).unwrap_or(0);
        let suggested_width = title_len.max(footer_len) + 20;
        let modal_width = suggested_width.clamp(
            self.min_width,
            self.max_width.min(area.width.saturating_sub(4)),
        );

        let has_footer = self.footer.is_some();
        let title_height = 3u16; // 2 borders + 1 text
        let footer_height = 3u16;
        let min_content_height = 5u16;

        // Each collapsed border saves one line
        let min_total_height = if has_footer {
            title_height + min_content_height + footer_height - 2
        } else {
            title_height + min_content_height - 1
        };

        let modal_height = (area.height as f32 * (self.height_percent as f32 / 100.0)) as u16;
        let modal_height = modal_height
            .max(min_total_height)
            .min(area.height.saturating_sub(2));

        // Center the modal
        let popup_x = area.x + (area.width.saturating_sub(modal_width)) / 2;
        let popup_y = area.y + (area.height.saturating_sub(modal_height)) / 2;
        let popup_area = Rect::new(popup_x, popup_y, modal_width, modal_height);

        if self.dim_background {
            let dim = Block::default().style(t.dim_style());
            Widget::render(dim, area, buf);
        }

        // Always clear the dialog area for clean rendering
        Widget::render(Clear, popup_area, buf);

        let border_style = match self.variant {
            DialogVariant::Default => Style::default().fg(t.border_focused),
            DialogVariant::Warning => Style::default().fg(t.warning),
            DialogVariant::Error => Style::default().fg(t.error),
        };

        // Stacked blocks with collapsed borders: title, content, footer
        let constraints = if has_footer {
            vec![
                Constraint::Length(title_height),
                Constraint::Min(min_content_height),
                Constraint::Length(footer_height),
            ]
        } else {
            vec![
                Constraint::Length(title_height),
                Constraint::Min(min_content_height),
            ]
        };

        let layout = Layout::vertical(constraints)
            .spacing(Spacing::Overlap(1))
            .split(popup_area);

        let border_type = t.dialog_border_type;

        let title_block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .padding(Padding::horizontal(2))
            .merge_borders(MergeStrategy::Exact)
            .style(t.background_style());

        let title_inner = title_block.inner(layout[0]);
        Widget::render(title_block, layout[0], buf);

        let title_para = Paragraph::new(title_text)
            .alignment(Alignment::Center)
            .style(t.text_style().add_modifier(Modifier::BOLD));
        Widget::render(title_para, title_inner, buf);

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .padding(Padding::horizontal(2))
            .merge_borders(MergeStrategy::Exact)
            .style(t.background_style());

        let content_inner = content_block.inner(layout[1]);
        Widget::render(content_block, layout[1], buf);

        let content_para = Paragraph::new(self.content)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left)
            .style(t.text_style());
        Widget::render(content_para, content_inner, buf);

        if let Some(footer_text) = self.footer {
            let footer_block = Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style)
                .padding(Padding::horizontal(2))
                .merge_borders(MergeStrategy::Exact)
                .style(t.background_style());

            let footer_inner = footer_block.inner(layout[2]);
            Widget::render(footer_block, layout[2], buf);

            let footer_para = Paragraph::new(footer_text)
                .alignment(Alignment::Center)
                .style(t.muted_style());
            Widget::render(footer_para, footer_inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_defaults() {
        let dialog = Dialog::new("Title", "Content");
        assert_eq!(dialog.min_width, 50);
        assert_eq!(dialog.max_width, 80);
        assert_eq!(dialog.variant, DialogVariant::Default);
        assert!(dialog.dim_background);
        assert!(dialog.footer.is_none());
    }

    #[test]
    fn test_dialog_builder() {
        let dialog = Dialog::new("Delete listing", "Are you sure?")
            .variant(DialogVariant::Warning)
            .footer("Y: Delete | N: Keep")
            .min_width(40)
            .dim_background(false);
        assert_eq!(dialog.variant, DialogVariant::Warning);
        assert_eq!(dialog.footer, Some("Y: Delete | N: Keep"));
        assert_eq!(dialog.min_width, 40);
        assert!(!dialog.dim_background);
    }

    #[test]
    fn test_variant_prefixes() {
        assert_eq!(DialogVariant::Default.prefix(), "");
        assert_eq!(DialogVariant::Warning.prefix(), "Warning");
        assert_eq!(DialogVariant::Error.prefix(), "Error");
    }

    #[test]
    fn test_dialog_renders_into_buffer() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Dialog::new("Notice", "Listing created")
            .footer("Enter: Close")
            .render(area, &mut buf);
        let rendered = buf
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect::<String>();
        assert!(rendered.contains("Notice"));
    }
}
