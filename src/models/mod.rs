pub mod result_model;
pub mod service_model;
