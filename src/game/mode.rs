use log::{debug, info};

use super::simulation::{SnakeSimulation, TickResult};
use crate::input::{Command, InputEvent, KeyBindings};

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Intro,
    Playing,
    Paused,
    GameOver,
    Quit,
}

/// A mode change caused by one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: GameMode,
    pub to: GameMode,
}

impl Transition {
    /// True when this transition began a fresh round
    pub fn starts_round(&self) -> bool {
        self.to == GameMode::Playing
            && matches!(self.from, GameMode::Intro | GameMode::GameOver)
    }
}

/// Mode state machine. Directional input is forwarded to the simulation
/// while playing; every other key is interpreted against the bindings of
/// the current mode and ignored if it has no meaning there.
pub struct GameState {
    mode: GameMode,
    bindings: KeyBindings,
}

impl GameState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            mode: GameMode::Intro,
            bindings,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Apply one input event. Returns the transition if the mode changed.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        simulation: &mut SnakeSimulation,
    ) -> Option<Transition> {
        let next = match (self.mode, event) {
            (GameMode::Quit, _) => GameMode::Quit,
            (_, InputEvent::Close) => GameMode::Quit,
            (GameMode::Intro, InputEvent::KeyPress(_)) => {
                simulation.restart();
                GameMode::Playing
            }
            (mode, InputEvent::KeyPress(key)) => {
                match (mode, self.bindings.command_for(key)) {
                    (GameMode::Playing, Some(Command::Pause)) => GameMode::Paused,
                    (GameMode::Playing, Some(Command::Move(direction))) => {
                        simulation.set_direction(direction);
                        GameMode::Playing
                    }
                    (GameMode::Paused, Some(Command::Continue)) => GameMode::Playing,
                    (GameMode::Paused | GameMode::GameOver, Some(Command::Quit)) => {
                        GameMode::Quit
                    }
                    (GameMode::GameOver, Some(Command::Restart)) => {
                        simulation.restart();
                        GameMode::Playing
                    }
                    (mode, _) => mode,
                }
            }
        };

        self.transition_to(next)
    }

    /// Feed back the outcome of a tick. A terminal tick ends the round.
    pub fn on_tick(&mut self, result: &TickResult, score: u32) -> Option<Transition> {
        match result.collision {
            Some(reason) if self.mode == GameMode::Playing => {
                info!("round over: {:?}, score {}", reason, score);
                self.transition_to(GameMode::GameOver)
            }
            _ => None,
        }
    }

    fn transition_to(&mut self, next: GameMode) -> Option<Transition> {
        if next == self.mode {
            return None;
        }

        let transition = Transition {
            from: self.mode,
            to: next,
        };
        debug!("mode {:?} -> {:?}", transition.from, transition.to);
        self.mode = next;
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, Direction, GameConfig, Position};
    use crate::input::Key;

    fn setup() -> (GameState, SnakeSimulation) {
        let config = GameConfig {
            seed: Some(3),
            ..GameConfig::small()
        };
        (
            GameState::new(config.bindings.clone()),
            SnakeSimulation::new(config),
        )
    }

    fn press(c: char) -> InputEvent {
        InputEvent::KeyPress(Key::Char(c))
    }

    fn terminal_tick() -> TickResult {
        TickResult {
            direction: Direction::Right,
            grew: false,
            collision: Some(CollisionType::Wall),
        }
    }

    #[test]
    fn test_intro_any_key_starts() {
        let (mut state, mut sim) = setup();
        assert_eq!(state.mode(), GameMode::Intro);

        let transition = state
            .handle_event(InputEvent::KeyPress(Key::Other), &mut sim)
            .unwrap();

        assert_eq!(state.mode(), GameMode::Playing);
        assert!(transition.starts_round());
    }

    #[test]
    fn test_intro_close_quits() {
        let (mut state, mut sim) = setup();
        state.handle_event(InputEvent::Close, &mut sim);
        assert_eq!(state.mode(), GameMode::Quit);
    }

    #[test]
    fn test_pause_and_continue() {
        let (mut state, mut sim) = setup();
        state.handle_event(press('x'), &mut sim);

        let paused = state.handle_event(press('p'), &mut sim).unwrap();
        assert_eq!(paused.to, GameMode::Paused);
        assert!(!paused.starts_round());

        // Restart and directions mean nothing while paused
        assert_eq!(state.handle_event(press('r'), &mut sim), None);
        let up = InputEvent::KeyPress(Key::Up);
        assert_eq!(state.handle_event(up, &mut sim), None);
        assert_eq!(sim.pending_direction(), None);

        state.handle_event(press('C'), &mut sim);
        assert_eq!(state.mode(), GameMode::Playing);
    }

    #[test]
    fn test_quit_key_only_in_paused_and_game_over() {
        let (mut state, mut sim) = setup();
        state.handle_event(press('x'), &mut sim);

        state.handle_event(press('q'), &mut sim);
        assert_eq!(state.mode(), GameMode::Playing);

        state.handle_event(press('p'), &mut sim);
        state.handle_event(press('q'), &mut sim);
        assert_eq!(state.mode(), GameMode::Quit);
    }

    #[test]
    fn test_direction_forwarded_while_playing() {
        let (mut state, mut sim) = setup();
        state.handle_event(press('x'), &mut sim);

        let transition = state.handle_event(InputEvent::KeyPress(Key::Down), &mut sim);

        assert_eq!(transition, None);
        assert_eq!(sim.pending_direction(), Some(Direction::Down));
    }

    #[test]
    fn test_terminal_tick_ends_round() {
        let (mut state, mut sim) = setup();
        state.handle_event(press('x'), &mut sim);

        state.on_tick(&terminal_tick(), 3);
        assert_eq!(state.mode(), GameMode::GameOver);

        // Pausing is not a game-over command
        state.handle_event(press('p'), &mut sim);
        assert_eq!(state.mode(), GameMode::GameOver);
    }

    #[test]
    fn test_restart_from_game_over() {
        let (mut state, mut sim) = setup();
        state.handle_event(press('x'), &mut sim);
        sim.debug_set_snake([Position::new(0, 0), Position::new(1, 0)], Direction::Left);
        state.on_tick(&terminal_tick(), 0);

        let transition = state.handle_event(press('r'), &mut sim).unwrap();

        assert!(transition.starts_round());
        assert_eq!(state.mode(), GameMode::Playing);
        assert_eq!(sim.snake().to_vec(), vec![Position::new(5, 5)]);
    }

    #[test]
    fn test_close_from_every_mode() {
        for keys in [vec![], vec!['x'], vec!['x', 'p']] {
            let (mut state, mut sim) = setup();
            for key in keys {
                state.handle_event(press(key), &mut sim);
            }
            state.handle_event(InputEvent::Close, &mut sim);
            assert_eq!(state.mode(), GameMode::Quit);
        }

        let (mut state, mut sim) = setup();
        state.handle_event(press('x'), &mut sim);
        state.on_tick(&terminal_tick(), 0);
        assert_eq!(state.mode(), GameMode::GameOver);

        let transition = state.handle_event(InputEvent::Close, &mut sim).unwrap();
        assert_eq!(transition.from, GameMode::GameOver);
        assert_eq!(state.mode(), GameMode::Quit);
    }

    #[test]
    fn test_quit_is_terminal() {
        let (mut state, mut sim) = setup();
        state.handle_event(InputEvent::Close, &mut sim);

        assert_eq!(state.handle_event(press('r'), &mut sim), None);
        assert_eq!(state.on_tick(&terminal_tick(), 0), None);
        assert_eq!(state.mode(), GameMode::Quit);
    }
}
