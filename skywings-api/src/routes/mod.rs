pub mod airlines;
pub mod auth;
pub mod customers;
pub mod database;
pub mod employees;
pub mod staff;
