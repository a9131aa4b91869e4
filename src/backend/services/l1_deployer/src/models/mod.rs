pub mod catalog;
pub mod config;
pub mod deployment;
pub mod genesis;
