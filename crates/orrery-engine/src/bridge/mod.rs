pub mod protocol;
pub mod surface;
