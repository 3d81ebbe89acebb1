// src/repository/mod.rs
pub mod requirement_repository;
