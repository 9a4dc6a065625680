pub mod brightness;
pub mod flip;
