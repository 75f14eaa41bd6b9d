pub mod renderer;

pub use renderer::{Renderer, WINDOW_TITLE};
