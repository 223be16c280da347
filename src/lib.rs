pub mod audio;
pub mod auth;
pub mod cli;
pub mod core;
pub mod game;
pub mod states;
pub mod ui;
