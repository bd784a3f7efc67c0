pub mod engine;
pub mod script;
pub mod weights;
