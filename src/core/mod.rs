pub mod admin;
pub mod aggregate;
pub mod backup;
pub mod config;
pub mod directory;
pub mod log;
pub mod logic;
pub mod palette;
pub mod view;
pub mod workload;
