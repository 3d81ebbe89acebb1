// src/domain/mod.rs
pub mod regulation;
pub mod reminder_frequency;
pub mod requirement_model;
pub mod requirement_status;
