// Module exports for models

pub mod holiday;
pub mod settings;
pub mod timezone;
