pub mod common;
pub mod constant;
pub mod statistics;
pub mod system;
pub mod water_body;
