pub mod engine;
pub mod normalize;
pub mod parser;
pub mod scoring;
pub mod script;
pub mod snippet;
pub mod types;
