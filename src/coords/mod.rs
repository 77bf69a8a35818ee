// src/coords/mod.rs

pub(crate) mod face_ijk;
pub(crate) mod ijk;
