pub mod build;
pub mod check;
pub mod config;
pub mod days;
pub mod hours;
pub mod init;
