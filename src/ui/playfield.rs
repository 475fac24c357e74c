//! The in-round scene: pipes, coins, the bird, and the heads-up panel.

use crate::config::GameConfig;
use crate::game::round::Round;
use crate::ui::common::{create_scene_layout, render_info_panel_frame, render_status_bar};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Coin spin frames, indexed by rotation quadrant.
const COIN_FRAMES: [char; 4] = ['O', '(', '|', ')'];

/// Render the full playing scene.
pub fn render(frame: &mut Frame, area: Rect, round: &Round, config: &GameConfig, bird_art: &[String]) {
    let layout = create_scene_layout(frame, area, " Flapjack ", Color::Cyan, 24);

    render_play_area(frame, layout.playfield, round, config, bird_art);
    render_status_bar_content(frame, layout.status_bar, round, config);
    render_info_panel(frame, layout.info_panel, round, config);
}

/// Render the play area, mapping terminal cells into the logical play field.
fn render_play_area(
    frame: &mut Frame,
    area: Rect,
    round: &Round,
    config: &GameConfig,
    bird_art: &[String],
) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    // Display cells per logical pixel.
    let x_scale = width as f64 / config.screen_width;
    let y_scale = height as f64 / config.screen_height;

    let art: Vec<Vec<char>> = bird_art.iter().map(|row| row.chars().collect()).collect();
    let bird = &round.bird;
    let bird_row = (bird.y * y_scale).round() as isize;
    let bird_col = (bird.x * x_scale).round() as isize;

    // Blink through the grace period so the player can see it ticking.
    let bird_visible = !bird.invincible || (bird.invincible_ticks / 8) % 2 == 0;

    let mut lines = Vec::with_capacity(height);

    for display_row in 0..height {
        // Sample each cell at its center.
        let game_y = (display_row as f64 + 0.5) / y_scale;
        let mut spans = Vec::with_capacity(width);

        for display_col in 0..width {
            let game_x = (display_col as f64 + 0.5) / x_scale;

            // Bird art sits on top of everything else.
            if bird_visible {
                let art_row = display_row as isize - bird_row;
                let art_col = display_col as isize - bird_col;
                if art_row >= 0 && (art_row as usize) < art.len() {
                    let row = &art[art_row as usize];
                    if art_col >= 0 && (art_col as usize) < row.len() && row[art_col as usize] != ' '
                    {
                        spans.push(Span::styled(
                            row[art_col as usize].to_string(),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ));
                        continue;
                    }
                }
            }

            let in_pipe = round.pipes.iter().any(|pair| {
                pair.top.rect.contains(game_x, game_y) || pair.bottom.rect.contains(game_x, game_y)
            });
            if in_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
                continue;
            }

            let coin = round
                .coins
                .coins
                .iter()
                .find(|coin| coin.bounds(config).contains(game_x, game_y));
            if let Some(coin) = coin {
                let spin = ((coin.rotation / 90.0) as usize) % COIN_FRAMES.len();
                spans.push(Span::styled(
                    COIN_FRAMES[spin].to_string(),
                    Style::default().fg(Color::Yellow),
                ));
                continue;
            }

            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, round: &Round, config: &GameConfig) {
    let controls = [("[Space]", "Flap"), ("[Q]", "Quit")];

    if round.bird.invincible {
        let seconds = (round.bird.invincible_ticks + config.tick_rate - 1) / config.tick_rate;
        render_status_bar(
            frame,
            area,
            &format!("Ouch! Safe for {}s", seconds),
            Color::Yellow,
            &controls,
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", round.score),
            Color::Green,
            &controls,
        );
    }
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, round: &Round, config: &GameConfig) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut hearts = vec![Span::raw(" ")];
    for i in 0..config.starting_lives {
        if i < round.bird.lives {
            hearts.push(Span::styled("♥ ", Style::default().fg(Color::Red)));
        } else {
            hearts.push(Span::styled("♡ ", Style::default().fg(Color::DarkGray)));
        }
    }

    let mut lines = vec![
        Line::from(hearts),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", round.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Coins: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", round.coins.collected_count),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    if round.bird.invincible {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Invincible",
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
