pub mod config;
pub mod envelope;
pub mod record;
pub mod request_token;
pub mod summary;
pub mod tabular;
