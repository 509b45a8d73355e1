// Service module exports

pub mod clock;
pub mod epoch;
pub mod holiday;
pub mod notification;
pub mod scheduler;
pub mod settings;
pub mod stopwatch;
pub mod timer;
pub mod timezone;
