pub mod config;
pub mod gui;
pub mod models;
pub mod services;
