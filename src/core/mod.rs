pub mod alphabet;
pub mod converter;
pub mod engine;
pub mod letters;
pub mod types;
