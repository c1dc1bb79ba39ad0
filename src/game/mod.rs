//! Game controller: owns the state and applies moves.
//!
//! A presentation layer only talks to `GameController`:
//!
//! ```
//! use shiritori::dictionary::StaticSource;
//! use shiritori::game::GameController;
//! use shiritori::GameConfig;
//!
//! let source = StaticSource::new(["りんご", "ごりら", "らっぱ"]);
//! let mut game = GameController::new(source, GameConfig::new().with_seed(42));
//! game.start();
//!
//! assert!(game.is_ready());
//! assert_eq!(game.history().count(), 1);
//! ```

mod controller;
mod view;

pub use controller::GameController;
pub use view::GameView;
