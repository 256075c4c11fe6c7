//! Terminal front end: interactive shell, tables and setup.
pub mod setup;
pub mod shell;
pub mod ui;
