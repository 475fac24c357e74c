//! Title screen.

use crate::config::GameConfig;
use crate::ui::common::centered_box;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, config: &GameConfig) {
    frame.render_widget(Clear, area);

    let modal = centered_box(area, 48, 11);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let grace_seconds = config.invincibility_ticks / config.tick_rate;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "F L A P J A C K",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Thread the pipes, pocket the coins.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!(
                "{} lives, {}s of mercy after each crash.",
                config.starting_lives, grace_seconds
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Space]", Style::default().fg(Color::White)),
            Span::styled(" Start  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
