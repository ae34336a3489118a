pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod registrar;
pub mod service;
