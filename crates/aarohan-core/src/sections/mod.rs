//! Per-section state. Each section owns its modal surfaces and nothing else.

pub mod competitions;
pub mod lineup;
pub mod navigation;
pub mod passes;

pub use competitions::Competitions;
pub use lineup::Lineup;
pub use navigation::Navigation;
pub use passes::Passes;
