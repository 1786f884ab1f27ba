//! Domain layer: validated value objects and account entities

pub mod entities;
pub mod value_objects;
