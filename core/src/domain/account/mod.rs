pub mod entities;
pub mod plans;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
