// src/api/dto/mod.rs
pub mod requirement_dto;
