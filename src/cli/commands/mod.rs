pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod goal;
pub mod init;
pub mod list;
pub mod log;
