pub mod bodies;
pub mod scene;
pub mod simulation;
pub mod time;
