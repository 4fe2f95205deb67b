pub mod app;
pub mod debug;
pub mod dial;
pub mod theme;
pub mod window;
