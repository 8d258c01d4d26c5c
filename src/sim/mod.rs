pub mod populate;
pub mod simulation;

pub use populate::populate;
pub use simulation::Simulation;
