pub mod calculator;
pub mod config;
pub mod output;
pub mod parser;
pub mod report;
pub mod scale;
pub mod session;
pub mod shell;
