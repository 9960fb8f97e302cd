//! # Qabot Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem helpers shared by the application. Callers import the
//! submodule directly, e.g. `crate::common::fs::io::write_string_atomically`.

/// Basic file I/O operations (`ensure_dir_exists`, `read_file_to_string`, `write_string_atomically`).
pub mod io;
