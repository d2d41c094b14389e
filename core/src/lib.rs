//! Procedural pinball core: table generation, obstacle behaviour and the
//! game session, independent of any engine.
//!
//! A host owns a [`physics::PhysicsWorld`] and a
//! [`presentation::PresentationSink`], builds a [`table::Table`], opens a
//! [`session::GameSession`] through [`session::SessionHost`], and then feeds
//! fixed ticks, frame ticks and physics events into the table.

pub mod config;
pub mod geometry;
pub mod handlers;
pub mod input;
pub mod launcher;
pub mod physics;
pub mod presentation;
pub mod session;
pub mod table;
pub mod timer;

pub use config::GameConfig;
pub use physics::{BodyId, PhysicsWorld};
pub use presentation::PresentationSink;
pub use session::{GameSession, SessionHost};
pub use table::Table;
