pub mod services;

pub use services::StudentService;
