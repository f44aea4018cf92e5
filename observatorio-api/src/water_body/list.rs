use super::WaterBody;

pub const URL: &str = super::URL;

pub type Response = Vec<WaterBody>;
