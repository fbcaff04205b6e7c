//! An infinitely looping, angled marquee for macroquad.
//!
//! Items scroll along a rotated rail, wrap around seamlessly, pause while one
//! of them is hovered and push their neighbours apart.
//!
//! ```no_run
//! use ply_marquee::prelude::*;
//!
//! #[macroquad::main("Ticker")]
//! async fn main() {
//!     let tiles: Vec<Tile> = (0..8).map(|i| Tile::new(SKYBLUE, format!("#{i}"))).collect();
//!     let mut marquee = Marquee::new(tiles, MarqueeConfig::new().angle(-8.0));
//!     loop {
//!         let now = get_time() * 1000.0;
//!         marquee.frame(now, get_frame_time() as f64 * 1000.0, true);
//!         let commands = marquee.render_commands();
//!         let container = BoundingBox::new(0.0, 0.0, screen_width(), screen_height());
//!         render(&commands, marquee.items(), container, draw_tile);
//!         next_frame().await;
//!     }
//! }
//! ```

pub mod config;
pub mod culling;
pub mod driver;
pub mod errors;
pub mod geometry;
pub mod id;
pub mod marquee;
pub mod math;
pub mod observer;
pub mod prelude;
pub mod render_commands;
pub mod renderer;
pub mod slots;
pub mod tween;

pub use config::MarqueeConfig;
pub use id::SlotId;
pub use marquee::Marquee;
