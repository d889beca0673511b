mod config;
mod operations;
