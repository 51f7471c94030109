pub mod entities;
pub mod extractor;
pub mod image_tagger;
pub(crate) mod lenient;
pub mod ports;
pub mod prompts;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
