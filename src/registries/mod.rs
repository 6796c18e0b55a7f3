//! Registry implementations for fetching the latest published version

pub mod npm;

pub use npm::NpmRegistry;
