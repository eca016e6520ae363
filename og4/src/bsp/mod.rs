mod board_helper;

pub mod board;
pub mod config;
