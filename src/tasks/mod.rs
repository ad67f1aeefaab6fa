pub mod error;
pub mod store;
pub mod task;
pub mod validator;

#[cfg(test)]
mod unit_tests;
