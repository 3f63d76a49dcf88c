pub mod checker;
pub mod config;
pub mod interpreter;
pub mod lexer;
pub mod report;
pub mod string;
pub mod token;
