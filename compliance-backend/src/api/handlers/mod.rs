// src/api/handlers/mod.rs
pub mod requirement_handler;
