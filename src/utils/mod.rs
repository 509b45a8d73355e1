// Shared helpers for the time widgets

pub mod duration;
