use crate::ui::app::{App, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, centered_rows, layout_regions};
use crate::ui::theme::{ACCENT, COUNT_TEXT, GLOBAL_BORDER, HEADER_TEXT, PENDING, STATUS_OFF, STATUS_ON};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};
use ratatui::Frame;

const SLIDER_WIDTH: u16 = 44;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.title()).widget(app.snapshot()), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Counter => draw_counter(frame, app, body),
        Screen::Settings => draw_settings(frame, app, body),
    }
    let footer_widget = Footer::new(app.screen());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn draw_counter(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let snapshot = app.snapshot();
    let text_style = Style::default().fg(HEADER_TEXT);
    let (switch, switch_style) = if snapshot.auto_increment {
        ("[■ ON ]", Style::default().fg(STATUS_ON))
    } else {
        ("[ OFF□]", Style::default().fg(STATUS_OFF))
    };

    let lines = vec![
        Line::from(Span::styled(
            "Counter",
            text_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            snapshot.count.to_string(),
            Style::default().fg(COUNT_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ -1 ]", Style::default().fg(ACCENT)),
            Span::raw("    "),
            Span::styled("[ +1 ]", Style::default().fg(ACCENT)),
        ]),
        Line::from(Span::styled("[ Reset ]", Style::default().fg(ACCENT))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Auto-Increment  ", text_style),
            Span::styled(switch, switch_style),
        ]),
        Line::from(Span::styled(
            format!("Auto mode: {}", snapshot.auto_label()),
            text_style,
        )),
    ];

    let height = lines.len() as u16;
    let rows = centered_rows(body, &[height]);
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, rows[0]);
}

fn draw_settings(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let settings = app.settings();
    let text_style = Style::default().fg(HEADER_TEXT);
    let rows = centered_rows(body, &[1, 1, 1, 3, 1, 1, 1]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Auto-Increment Interval",
            text_style.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        rows[0],
    );

    let label = settings.label().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, text_style))).alignment(Alignment::Center),
        rows[2],
    );

    let slider_area = centered_rect_by_size(rows[3], SLIDER_WIDTH, 3);
    let slider = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .gauge_style(Style::default().fg(ACCENT))
        .ratio(settings.ratio())
        .label("");
    frame.render_widget(slider, slider_area);

    if settings.is_dirty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Press Enter to apply",
                Style::default().fg(PENDING),
            )))
            .alignment(Alignment::Center),
            rows[4],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("[ Done ]", Style::default().fg(ACCENT))))
            .alignment(Alignment::Center),
        rows[6],
    );
}
