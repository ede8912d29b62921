pub mod dataset;
pub mod movie;
