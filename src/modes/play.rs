use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::VecDeque;
use std::io::{self, Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{FrameReport, Game, GameConfig, GameMode};
use crate::input::{InputEvent, InputHandler};
use crate::metrics::SessionStats;
use crate::render::{Renderer, WINDOW_TITLE};

/// Interactive play in the terminal: one input → tick → render pass per frame
pub struct PlayMode {
    game: Game,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    frame_interval: Duration,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let frame_interval = config.frame_interval();
        let renderer = Renderer::new(config.bindings.clone());

        Ok(Self {
            game: Game::new(config)?,
            stats: SessionStats::new(),
            renderer,
            input_handler: InputHandler::new(),
            frame_interval,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, SetTitle(WINDOW_TITLE))
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        info!(
            "session finished: {} rounds, best score {}",
            self.stats.rounds_played, self.stats.best_score
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_timer = interval(self.frame_interval);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Input collected between two frames, drained at the frame boundary
        let mut pending: VecDeque<InputEvent> = VecDeque::new();
        let mut should_quit = false;
        let mut stream_done = false;

        loop {
            tokio::select! {
                maybe_event = event_stream.next(), if !stream_done => {
                    self.on_stream_item(maybe_event, &mut pending, &mut stream_done)?;
                }

                _ = frame_timer.tick() => {
                    let report = self.step_frame(pending.drain(..));
                    if report.mode == GameMode::Quit {
                        should_quit = true;
                    } else {
                        let snapshot = self.game.snapshot();
                        terminal.draw(|frame| {
                            self.renderer.render(frame, &snapshot, &self.stats);
                        }).context("Failed to draw frame")?;
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    pending.push_back(InputEvent::Close);
                }
            }

            if should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Queue one item from the terminal event stream. The end of the stream
    /// counts as a single close request.
    fn on_stream_item(
        &self,
        item: Option<io::Result<Event>>,
        pending: &mut VecDeque<InputEvent>,
        stream_done: &mut bool,
    ) -> Result<()> {
        match item {
            Some(Ok(event)) => self.queue_event(&event, pending),
            Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
            None => {
                if !*stream_done {
                    *stream_done = true;
                    pending.push_back(InputEvent::Close);
                }
            }
        }
        Ok(())
    }

    fn queue_event(&self, event: &Event, pending: &mut VecDeque<InputEvent>) {
        if let Some(input) = self.input_handler.translate(event) {
            pending.push_back(input);
        }
    }

    /// Advance the game by one frame and keep the session stats in step
    fn step_frame<I>(&mut self, events: I) -> FrameReport
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let report = self.game.run_frame(events);

        if report.round_started {
            self.stats.on_round_start();
        }
        self.stats.update(report.mode);
        if report.tick.is_some_and(|tick| tick.is_terminal()) {
            self.stats.on_round_end(self.game.simulation().score());
        }

        report
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position};
    use crate::input::Key;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn play_mode() -> PlayMode {
        PlayMode::new(GameConfig {
            seed: Some(4),
            ..GameConfig::small()
        })
        .unwrap()
    }

    #[test]
    fn test_frame_interval_from_config() {
        let mode = play_mode();
        assert_eq!(mode.frame_interval, Duration::from_secs(1) / 15);
    }

    #[test]
    fn test_queue_event_keeps_order() {
        let mode = play_mode();
        let mut pending = VecDeque::new();

        for code in [KeyCode::Up, KeyCode::Char('p'), KeyCode::Esc] {
            let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
            mode.queue_event(&event, &mut pending);
        }
        mode.queue_event(&Event::FocusGained, &mut pending);

        assert_eq!(
            pending.into_iter().collect::<Vec<_>>(),
            vec![
                InputEvent::KeyPress(Key::Up),
                InputEvent::KeyPress(Key::Char('p')),
                InputEvent::Close,
            ]
        );
    }

    #[test]
    fn test_stream_end_closes_once() {
        let mode = play_mode();
        let mut pending = VecDeque::new();
        let mut stream_done = false;

        mode.on_stream_item(None, &mut pending, &mut stream_done).unwrap();
        mode.on_stream_item(None, &mut pending, &mut stream_done).unwrap();

        assert!(stream_done);
        assert_eq!(pending.into_iter().collect::<Vec<_>>(), vec![InputEvent::Close]);
    }

    #[test]
    fn test_stream_error_is_reported() {
        let mode = play_mode();
        let mut pending = VecDeque::new();
        let mut stream_done = false;
        let err = io::Error::other("tty gone");

        assert!(mode
            .on_stream_item(Some(Err(err)), &mut pending, &mut stream_done)
            .is_err());
        assert!(pending.is_empty());
        assert!(!stream_done);
    }

    #[test]
    fn test_round_end_updates_stats() {
        let mut mode = play_mode();
        mode.step_frame([InputEvent::KeyPress(Key::Other)]);
        assert_eq!(mode.stats.rounds_played, 0);

        mode.game
            .simulation_mut()
            .debug_set_snake([Position::new(0, 3)], Direction::Left);
        let report = mode.step_frame(std::iter::empty());

        assert_eq!(report.mode, GameMode::GameOver);
        assert_eq!(mode.stats.rounds_played, 1);
    }
}
