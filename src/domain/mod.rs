pub mod entities;
pub mod errors;
pub mod notification;
pub mod repositories;
pub mod value_objects;
