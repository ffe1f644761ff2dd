//! Core domain models and species biology.

pub mod domain;
pub mod species;
