// src/util/mod.rs
//
// Recognizers and comparators shared by source implementations

pub mod episode_recognition;
pub mod image;
pub mod natural_order;

pub use episode_recognition::EpisodeRecognition;
pub use natural_order::compare_natural;
