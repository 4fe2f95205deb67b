pub mod clock;
pub mod config;
pub mod events;
pub mod gui;
pub mod sys;
