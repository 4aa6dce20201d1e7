// src/domain/episode/mod.rs
mod entity;

pub use entity::Episode;
