use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use super::app::{Toast, ToastKind};
use super::theme::Theme;

/// Shared overlay shown while a tool "works"; one at a time, last call wins
pub struct LoadingOverlay<'a> {
    pub message: &'a str,
    pub theme: &'a Theme,
}

impl Widget for LoadingOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.message.len() as u16 + 8).min(area.width);
        let height = 5;

        let dialog_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        // Blank the area so the panels underneath don't bleed through
        for y in dialog_area.top()..dialog_area.bottom() {
            for x in dialog_area.left()..dialog_area.right() {
                buf[(x, y)].reset();
            }
        }

        let block = Block::default()
            .title(" Working ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(Color::Rgb(20, 20, 20)));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        buf.set_string(
            inner.x + (inner.width.saturating_sub(self.message.len() as u16)) / 2,
            inner.y + inner.height / 2,
            self.message,
            Style::default()
                .fg(self.theme.text_primary)
                .add_modifier(Modifier::BOLD),
        );
    }
}

/// Transient notifications stacked in the top-right corner
pub struct ToastStack<'a> {
    pub toasts: &'a [Toast],
    pub theme: &'a Theme,
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y + 1;

        for toast in self.toasts {
            let width = (toast.message.len() as u16 + 4).min(area.width.saturating_sub(2));
            if y + 3 > area.bottom() {
                break;
            }

            let toast_area = Rect {
                x: area.right().saturating_sub(width + 2),
                y,
                width,
                height: 3,
            };

            let color = match toast.kind {
                ToastKind::Success => self.theme.success,
                ToastKind::Error => self.theme.error,
            };

            for row in toast_area.top()..toast_area.bottom() {
                for col in toast_area.left()..toast_area.right() {
                    buf[(col, row)].reset();
                }
            }

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color));
            let inner = block.inner(toast_area);
            block.render(toast_area, buf);

            buf.set_string(
                inner.x + 1,
                inner.y,
                &toast.message,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            );

            y += 3;
        }
    }
}

/// Center a dialog of the given size within an area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
