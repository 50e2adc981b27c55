//! Snake3d - the classic grid snake, structured for a 3D front end
//!
//! This library provides:
//! - Core game logic (game module): the fixed-tick state machine, the
//!   body trail, and the wall/food rules, free of any I/O
//! - The presentation boundary (game::scene): renderers only ever hold
//!   visual proxies the core asks them to create, move, or retire
//! - A terminal front end (render module) standing in for the 3D scene
//! - Keyboard input translation (input module)
//! - Session metrics for the HUD (metrics module)
//! - The interactive driver (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
