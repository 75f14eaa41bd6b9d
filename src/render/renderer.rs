use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Direction, GameMode, Position, Snapshot};
use crate::input::KeyBindings;
use crate::metrics::SessionStats;

pub const WINDOW_TITLE: &str = "Snake Game V3.0";

/// Draws snapshots; never touches game state
pub struct Renderer {
    bindings: KeyBindings,
}

impl Renderer {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let game_area = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match snapshot.mode {
            GameMode::Intro => {
                frame.render_widget(self.render_intro(), game_area);
            }
            GameMode::Playing => {
                frame.render_widget(self.render_stats(snapshot, stats), chunks[0]);
                frame.render_widget(self.render_grid(snapshot), game_area);
            }
            GameMode::Paused => {
                frame.render_widget(self.render_stats(snapshot, stats), chunks[0]);
                frame.render_widget(self.render_grid(snapshot), game_area);

                let popup = centered_rect(40, 7, game_area);
                frame.render_widget(Clear, popup);
                frame.render_widget(self.render_paused(), popup);
            }
            GameMode::GameOver => {
                frame.render_widget(self.render_stats(snapshot, stats), chunks[0]);
                frame.render_widget(self.render_game_over(snapshot, stats), game_area);
            }
            GameMode::Quit => {}
        }

        frame.render_widget(self.render_controls(snapshot.mode), chunks[2]);
    }

    fn render_intro(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "The Snake Game",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Eat the apples"),
            Line::from("The more apples you eat, the longer you get"),
            Line::from("Do not touch the edges or yourself"),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to start",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {WINDOW_TITLE} ")),
        )
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let head = snapshot.head();
        let mut lines = Vec::with_capacity(snapshot.grid_height);

        for y in 0..snapshot.grid_height {
            let mut spans = Vec::with_capacity(snapshot.grid_width);

            for x in 0..snapshot.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == head {
                    Span::styled(
                        head_glyph(snapshot.direction),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snapshot.snake.contains(&pos) {
                    Span::styled("■ ", Style::default().fg(Color::Green))
                } else if pos == snapshot.food {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot, stats: &SessionStats) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![
            Line::from(vec![
                Span::styled("Score: ", label),
                Span::styled(
                    snapshot.score.to_string(),
                    value.add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Best: ", label),
                Span::styled(stats.best_score.to_string(), value),
                Span::raw("    "),
                Span::styled("Time: ", label),
                Span::styled(stats.format_time(), value),
            ]),
            Line::from(vec![
                Span::styled("Rounds: ", label),
                Span::styled(stats.rounds_played.to_string(), value),
                Span::raw("    "),
                Span::styled("Grid: ", label),
                Span::styled(
                    format!(
                        "{}x{} @ {}px",
                        snapshot.grid_width, snapshot.grid_height, snapshot.tile_size
                    ),
                    value,
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_paused(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(Span::styled(
                "Paused",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                key_span(self.bindings.resume, Color::Green),
                Span::raw(" to continue, "),
                key_span(self.bindings.quit, Color::Red),
                Span::raw(" to quit"),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_game_over(&self, snapshot: &Snapshot, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your score was: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Rounds played: {}", stats.rounds_played)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                key_span(self.bindings.restart, Color::Green),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                key_span(self.bindings.quit, Color::Red),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, mode: GameMode) -> Paragraph<'_> {
        let spans = match mode {
            GameMode::Playing => {
                let mut spans = vec![Span::styled("↑↓←→", Style::default().fg(Color::Cyan))];
                if self.bindings.wasd {
                    spans.push(Span::raw(" or "));
                    spans.push(Span::styled("WASD", Style::default().fg(Color::Cyan)));
                }
                spans.push(Span::raw(" to move | "));
                spans.push(key_span(self.bindings.pause, Color::Yellow));
                spans.push(Span::raw(" to pause"));
                spans
            }
            _ => vec![
                Span::styled("Esc", Style::default().fg(Color::Red)),
                Span::raw(" to close"),
            ],
        };

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "▲ ",
        Direction::Down => "▼ ",
        Direction::Left => "◀ ",
        Direction::Right => "▶ ",
    }
}

fn key_span(key: char, color: Color) -> Span<'static> {
    Span::styled(
        key.to_ascii_uppercase().to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// A rectangle `percent_x` wide and `height` rows tall in the middle of `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, GameConfig};
    use crate::input::{InputEvent, Key};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(game: &Game) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let renderer = Renderer::new(KeyBindings::default());
        let stats = SessionStats::new();
        terminal
            .draw(|frame| renderer.render(frame, &game.snapshot(), &stats))
            .unwrap();
        buffer_text(&terminal)
    }

    fn small_game() -> Game {
        Game::new(GameConfig {
            seed: Some(8),
            ..GameConfig::small()
        })
        .unwrap()
    }

    #[test]
    fn test_intro_screen() {
        let game = small_game();
        let text = draw(&game);
        assert!(text.contains("The Snake Game"));
        assert!(text.contains("Press any key to start"));
    }

    #[test]
    fn test_paused_overlay_keeps_board() {
        let mut game = small_game();
        game.run_frame([InputEvent::KeyPress(Key::Other)]);
        game.run_frame([InputEvent::KeyPress(Key::Char('p'))]);

        let text = draw(&game);
        assert!(text.contains("Paused"));
        assert!(text.contains("Score:"));
        assert!(text.contains(" Snake "));
    }

    #[test]
    fn test_header_reports_rounds_and_tiles() {
        let mut game = small_game();
        game.run_frame([InputEvent::KeyPress(Key::Other)]);

        let text = draw(&game);
        assert!(text.contains("Rounds: 0"));
        assert!(text.contains("Grid: 10x10 @ 16px"));
    }

    #[test]
    fn test_head_glyphs() {
        assert_eq!(head_glyph(Direction::Up), "▲ ");
        assert_eq!(head_glyph(Direction::Left), "◀ ");
    }
}
