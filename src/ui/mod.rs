//! Terminal presentation. Consumes read-only core state and tick events;
//! the core never imports anything from here.

pub mod effects;
pub mod game_scene;
pub mod title_scene;
