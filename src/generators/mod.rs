// src/generators/mod.rs

//! Dependency and toolchain file emission
//!
//! The generate phase writes everything Meson needs into the generators
//! directory: one pkg-config file per pinned dependency, and a native
//! file carrying the compiler binaries and built-in options.

pub mod pkgconfig;
pub mod toolchain;

pub use pkgconfig::write_pkg_config_files;
pub use toolchain::{write_native_file, NATIVE_FILE};
