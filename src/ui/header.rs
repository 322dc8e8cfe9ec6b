use crate::counter::CounterSnapshot;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OFF, STATUS_ON};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: screen title plus auto-increment status.
pub struct Header<'a> {
    title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn widget(&self, snapshot: &CounterSnapshot) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, dot_style) = if snapshot.auto_increment {
            ("●", Style::default().fg(STATUS_ON))
        } else {
            ("○", Style::default().fg(STATUS_OFF))
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.title.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(dot, dot_style),
            Span::styled(format!(" Auto {}", snapshot.auto_label()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("every {:.1}s", snapshot.interval_secs()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
