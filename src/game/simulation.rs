use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    board::{Position, Snake},
    config::GameConfig,
    direction::Direction,
    food::place_food,
};

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the grid
    Wall,
    /// Head ran into the body
    SelfCollision,
    /// The snake covers every cell, so no food can be placed
    BoardFilled,
}

/// Outcome of one simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Direction applied on this tick
    pub direction: Direction,
    /// Whether the snake ate food this tick
    pub grew: bool,
    /// Set when the tick ended the round
    pub collision: Option<CollisionType>,
}

impl TickResult {
    pub fn is_terminal(&self) -> bool {
        self.collision.is_some()
    }
}

/// Owns the board and advances it one tick at a time
pub struct SnakeSimulation {
    config: GameConfig,
    snake: Snake,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Position,
    score: u32,
    ticks: u64,
    rng: StdRng,
}

impl SnakeSimulation {
    /// Create a simulation with a freshly started board. `config` is expected
    /// to have passed [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let center = Self::center_of(&config);

        let mut simulation = Self {
            snake: Snake::new(center, Direction::Right, 1),
            direction: Direction::Right,
            pending_direction: None,
            food: center,
            score: 0,
            ticks: 0,
            rng,
            config,
        };
        simulation.restart();
        simulation
    }

    fn center_of(config: &GameConfig) -> Position {
        Position::new(
            (config.grid_width / 2) as i32,
            (config.grid_height / 2) as i32,
        )
    }

    /// Reset to a one-segment snake at the grid centre heading right, with a
    /// zero score and fresh food.
    pub fn restart(&mut self) {
        let center = Self::center_of(&self.config);

        self.snake = Snake::new(center, Direction::Right, 1);
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.score = 0;
        self.ticks = 0;
        self.food = match self.spawn_food() {
            Some(food) => food,
            None => {
                warn!(
                    "no free cell for food on a {}x{} grid",
                    self.config.grid_width, self.config.grid_height
                );
                center
            }
        };

        debug!("board reset, snake at {:?}, food at {:?}", center, self.food);
    }

    /// Record a directional intent for the next tick. Later calls before the
    /// tick replace earlier ones.
    pub fn set_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Advance the board by one tick
    pub fn tick(&mut self) -> TickResult {
        let requested = self.pending_direction.take().unwrap_or(self.direction);
        self.direction = self
            .config
            .reversal
            .resolve(self.direction, requested, self.snake.len());

        let new_head = self.snake.head().moved_in_direction(self.direction);
        self.snake.push_head(new_head);
        self.ticks += 1;

        let grew = new_head == self.food;
        let mut board_filled = false;

        if grew {
            self.score += 1;
            match self.spawn_food() {
                Some(food) => {
                    debug!("food eaten at {:?}, next at {:?}", new_head, food);
                    self.food = food;
                }
                None => board_filled = true,
            }
        } else {
            self.snake.pop_tail();
        }

        let collision = self
            .check_collision(new_head)
            .or(board_filled.then_some(CollisionType::BoardFilled));

        TickResult {
            direction: self.direction,
            grew,
            collision,
        }
    }

    /// Check the moved head against the walls and the rest of the body
    fn check_collision(&self, head: Position) -> Option<CollisionType> {
        if !head.is_within(self.config.grid_width, self.config.grid_height) {
            return Some(CollisionType::Wall);
        }

        if self.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn spawn_food(&mut self) -> Option<Position> {
        place_food(
            &self.snake.occupied(),
            self.config.grid_width,
            self.config.grid_height,
            &mut self.rng,
        )
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Direction applied on the most recent tick
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ticks since the last restart
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the snake, for setting up scenarios. An empty `segments`
    /// leaves the simulation untouched.
    #[doc(hidden)]
    pub fn debug_set_snake<I>(&mut self, segments: I, direction: Direction)
    where
        I: IntoIterator<Item = Position>,
    {
        let Some(snake) = Snake::from_segments(segments) else {
            warn!("ignoring empty snake");
            return;
        };
        self.snake = snake;
        self.direction = direction;
        self.pending_direction = None;
    }

    /// Move the food, for setting up scenarios
    #[doc(hidden)]
    pub fn debug_set_food(&mut self, food: Position) {
        self.food = food;
    }
}
