pub mod qa_service;

pub use qa_service::VideoQaService;
