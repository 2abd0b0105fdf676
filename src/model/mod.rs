pub mod dtos;
pub mod structs;

pub use dtos::{ApiErrorBody, NewCourse};
pub use structs::Course;
