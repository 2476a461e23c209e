//! Terminal front-end for English draughts.
//!
//! Two players share one console (hot-seat play). The board is drawn before
//! every prompt and coordinates are typed in algebraic form, e.g. `b3` for
//! column B, row 3. A jump chain is entered as several coordinates separated
//! by spaces.

pub mod config;
pub mod player;
pub mod render;

pub use config::{ConfigError, DraughtsConfig};
pub use player::{parse_sequence, Console, HumanPlayer};
pub use render::Renderer;
