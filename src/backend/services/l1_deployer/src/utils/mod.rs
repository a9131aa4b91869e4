pub mod errors;
pub mod ids;
