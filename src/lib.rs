// Library surface for the binary and for headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod history;
pub mod logging;
pub mod music;
pub mod notify;
pub mod runtime;
pub mod scheduler;
pub mod settings;
pub mod terminal;
pub mod timer;
pub mod ui;
