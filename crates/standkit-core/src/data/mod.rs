//! Built-in reference data: module catalog and certified materials.

pub mod materials;
pub mod modules;

pub use materials::{CertifiedMaterial, CertifiedMaterialLibrary};
pub use modules::ModuleLibrary;
