//! Application services

mod student;

pub use student::StudentService;
