pub mod aggregate;
pub mod approval;
pub mod constants;
pub mod error;
pub mod format;
pub mod timeline;
