pub mod chain;
pub mod format;
pub mod renderer;
pub mod writer;
