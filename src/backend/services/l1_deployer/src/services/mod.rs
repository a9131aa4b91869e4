pub mod deployment;
pub mod genesis;
pub mod validation;
