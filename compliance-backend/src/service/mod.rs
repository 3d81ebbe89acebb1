// src/service/mod.rs
pub mod requirement_service;
