mod assets;
mod builder;
mod document;
mod highlight;
mod manifest;
mod markdown;
mod structure;
mod template;

pub use builder::{BuildReport, Builder};
