//! # buildfs
//!
//! The filesystem abstraction layer for a build toolchain: path utilities,
//! a backend-agnostic [`Filesystem`] contract, a host-backed
//! [`PhysicalFs`], an in-memory [`MemoryFs`] for tests, and search-path
//! [`FileFinder`] helpers.
//!
//! This crate exists so that every higher layer of a toolchain (project
//! parsing, asset compilation, archive writing) can depend on one
//! filesystem capability without knowing whether it is backed by the host
//! operating system or by a synthesized tree built for a test.
//!
//! ---
//!
//! ## Quick Start
//!
//! A typical usage pattern with any backend that implements `Filesystem`:
//!
//! ```rust
//! use buildfs::{Filesystem, MemoryFs};
//!
//! fn copy_config(fs: &dyn Filesystem) -> bool {
//!     fs.exists("/input.txt") && fs.copy_file("/input.txt", "/output.txt")
//! }
//!
//! let fs = MemoryFs::new();
//! fs.write("/input.txt", b"hello");
//! assert!(copy_config(&fs));
//! assert_eq!(fs.read("/output.txt"), Some(b"hello".to_vec()));
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Filesystem`] | The capability interface every backend implements |
//! | [`FileFinder`] | Search-path lookups, blanket-implemented over `Filesystem` |
//! | [`PhysicalFs`] | Host-backed implementation (Unix only) |
//! | [`MemoryFs`] | In-memory tree, for tests and synthesized inputs |
//! | [`FileType`] | File, Directory, or SymbolicLink |
//! | [`Entry`] | Construction-time tree shape for `MemoryFs` |
//! | [`path`] | Pure path-string utilities with no I/O |
//!
//! ---
//!
//! ## Error Handling
//!
//! Every `Filesystem` method returns a `bool` or `Option<T>` — never a
//! `Result`. This is a deliberate single-failure-bit contract: callers make
//! coarse decisions (try, else skip or abort), and a richer error taxonomy
//! would serialize poorly across backends as different as a host
//! filesystem and an in-memory tree. See [`Filesystem`]'s docs for detail.
//!
//! ---
//!
//! ## Thread Safety
//!
//! `Filesystem` requires `Send + Sync`. Methods take `&self` (not `&mut
//! self`), enabling safe concurrent access. Backends use interior
//! mutability internally (`RwLock` for `MemoryFs`; the host filesystem's
//! own synchronization for `PhysicalFs`).
//!
//! You can safely share a backend across threads using `Arc<dyn
//! Filesystem>`, though the contract makes no ordering promise beyond
//! program order within one thread — callers that need operations to
//! observe each other across threads must still serialize externally.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`FileType`] and [`Entry`]. |

mod backend;
mod error;
mod filesystem;
mod finder;
pub mod path;
mod types;

pub use backend::MemoryFs;
#[cfg(unix)]
pub use backend::PhysicalFs;
pub use filesystem::Filesystem;
pub use finder::FileFinder;
pub use types::{Entry, FileType};
