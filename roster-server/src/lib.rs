pub mod api;
pub mod database;
pub mod settings;
pub mod state;
