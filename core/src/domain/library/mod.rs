pub mod entities;
pub mod ports;
pub mod seed;
pub mod services;
pub mod value_objects;
