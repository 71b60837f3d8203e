//! # The filesystem contract
//!
//! [`Filesystem`] is the capability interface every consumer of this crate
//! depends on: existence/permission probes, byte-range file I/O,
//! symbolic-link read/write, directory create/enumerate/remove, and path
//! resolution. A small set of derived operations (`copy_file`,
//! `copy_symbolic_link`, `copy_directory`) are provided as default methods
//! composed from the primitives, so a backend only has to implement the
//! primitives to get a fully usable filesystem.
//!
//! Every operation folds failure to `bool` or `Option<T>` — there is no
//! `Result` anywhere on this trait. See the crate-level docs for the
//! rationale.

use crate::FileType;

/// The capability interface every filesystem backend implements.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods take `&self`, not
/// `&mut self`: backends manage their own interior mutability (`RwLock`,
/// `Mutex`, or the host filesystem's own synchronization) so that callers
/// can share one instance across threads via `Arc<dyn Filesystem>` without
/// a lock at the call site. The contract itself makes no thread-safety
/// promise beyond that — callers sharing one instance across threads must
/// still serialize operations that need to observe each other in order.
///
/// # Object Safety
///
/// This trait is object-safe and is commonly used as `dyn Filesystem`.
///
/// # Error Model
///
/// Every operation returns a binary success/failure indication (`bool`) or,
/// for operations that produce a value, `Option<T>` where `None` means
/// failure. No operation panics on ordinary failure conditions (missing
/// path, wrong type, permission denial) — those are folded into the return
/// value. This layer never logs, throws, or aborts; human-readable
/// diagnostics are the caller's responsibility.
pub trait Filesystem: Send + Sync {
    // ---- Probes -----------------------------------------------------

    /// `true` iff `path` exists, regardless of type.
    fn exists(&self, path: &str) -> bool;

    /// `true` iff `path` exists and is readable.
    fn is_readable(&self, path: &str) -> bool;

    /// `true` iff `path` exists and is writable.
    fn is_writable(&self, path: &str) -> bool;

    /// `true` iff `path` exists and is executable.
    fn is_executable(&self, path: &str) -> bool;

    /// `true` iff `path` exists and is a regular file.
    fn is_file(&self, path: &str) -> bool {
        self.file_type(path) == Some(FileType::File)
    }

    /// `true` iff `path` exists and is a symbolic link.
    ///
    /// This never follows the link — it describes `path` itself.
    fn is_symbolic_link(&self, path: &str) -> bool {
        self.file_type(path) == Some(FileType::SymbolicLink)
    }

    /// `true` iff `path` exists and is a directory.
    fn is_directory(&self, path: &str) -> bool {
        self.file_type(path) == Some(FileType::Directory)
    }

    /// The type of `path`, or `None` if it does not exist or is a host
    /// object type this contract does not recognize (device, socket,
    /// pipe).
    ///
    /// This never follows a symbolic link: querying the type of a link
    /// always yields `Some(FileType::SymbolicLink)`, never the target's
    /// type.
    fn file_type(&self, path: &str) -> Option<FileType>;

    // ---- File I/O -----------------------------------------------------

    /// Create an empty regular file at `path` if nothing exists there.
    ///
    /// Idempotent over an existing regular file (returns `true` without
    /// modifying its content). Fails if `path` exists as a non-file.
    fn create_file(&self, path: &str) -> bool;

    /// Read the full contents of the file at `path`.
    ///
    /// Equivalent to `read_range(path, 0, None)`.
    fn read(&self, path: &str) -> Option<Vec<u8>> {
        self.read_range(path, 0, None)
    }

    /// Read a byte window `[offset, offset + length)` from the file at
    /// `path`. `length = None` means "to the end of the file".
    ///
    /// Fails if `path` does not name a file, if `offset` exceeds the file's
    /// length, or if `offset + length` (when `length` is given) exceeds the
    /// file's length. The `offset + length` addition is checked: an
    /// overflowing sum fails rather than wrapping.
    fn read_range(&self, path: &str, offset: u64, length: Option<u64>) -> Option<Vec<u8>>;

    /// Replace the contents of the file at `path` with `contents`,
    /// creating the file if it does not exist.
    ///
    /// Fails if `path` exists as a non-file.
    fn write(&self, path: &str, contents: &[u8]) -> bool;

    /// Unlink the regular file at `path`.
    ///
    /// Fails if `path` does not exist or is not a regular file.
    fn remove_file(&self, path: &str) -> bool;

    // ---- Symbolic links -------------------------------------------------

    /// The stored target of the symbolic link at `path`, or `None` if
    /// `path` is not a symbolic link.
    fn read_symbolic_link(&self, path: &str) -> Option<String>;

    /// Create a symbolic link at `path` pointing at `target`.
    ///
    /// `target` is stored verbatim, with no validation that it resolves to
    /// anything. Fails if `path` already exists.
    fn write_symbolic_link(&self, path: &str, target: &str) -> bool;

    /// Unlink the symbolic link at `path`.
    ///
    /// Backends that support symbolic links treat a `path` that does not
    /// name a link (including one that does not exist) as success: the
    /// postcondition "`path` is not a link" already holds. Backends that do
    /// not support symbolic links at all (the in-memory backend) fail
    /// unconditionally.
    fn remove_symbolic_link(&self, path: &str) -> bool;

    // ---- Directories ----------------------------------------------------

    /// Create a directory at `path`.
    ///
    /// When `recursive` is `true`, any missing ancestor directories are
    /// created first, with the backend's default directory permissions.
    /// When `recursive` is `false`, only the leaf is created, and the
    /// immediate parent must already exist as a directory. Idempotent over
    /// an existing directory at `path`; fails if `path` exists as a
    /// non-directory.
    fn create_directory(&self, path: &str, recursive: bool) -> bool;

    /// Enumerate the contents of the directory at `path`, invoking `visit`
    /// once per descendant with a path relative to `path` (no leading
    /// `/`).
    ///
    /// When `recursive` is `false`, only immediate children are reported.
    /// When `recursive` is `true`, the traversal order is
    /// breadth-within-a-directory then depth: all immediate children of a
    /// directory are reported before any of its subdirectories are
    /// recursed into. `.` and `..` are never reported. Returns `false` if
    /// `path` does not name a directory.
    fn read_directory(&self, path: &str, recursive: bool, visit: &mut dyn FnMut(&str)) -> bool;

    /// Remove the directory at `path`.
    ///
    /// Without recursion, fails unless the directory is empty at the
    /// instant of removal. With recursion, removes every contained file,
    /// symbolic link, and directory (in unspecified order) and then
    /// removes `path` itself, adopting best-effort semantics: a failure
    /// partway through does not abort the removal of the remaining
    /// entries, and the overall result is `false` iff any step failed.
    fn remove_directory(&self, path: &str, recursive: bool) -> bool;

    // ---- Resolution -----------------------------------------------------

    /// Follow every symbolic link on `path` and return the resulting
    /// normalized absolute path, or an empty string on failure.
    ///
    /// This is the only operation on this trait that follows symbolic
    /// links.
    fn resolve_path(&self, path: &str) -> String;

    // ---- Copy (derived) -------------------------------------------------

    /// Copy the file at `source` to `destination`.
    ///
    /// The default implementation composes `read` and `write`. A backend
    /// may override this with a native bulk-copy facility that preserves
    /// metadata where the host supports it.
    fn copy_file(&self, source: &str, destination: &str) -> bool {
        match self.read(source) {
            Some(contents) => self.write(destination, &contents),
            None => false,
        }
    }

    /// Copy the symbolic link at `source` to `destination`, preserving its
    /// target verbatim.
    ///
    /// The default implementation composes `read_symbolic_link` and
    /// `write_symbolic_link`.
    fn copy_symbolic_link(&self, source: &str, destination: &str) -> bool {
        match self.read_symbolic_link(source) {
            Some(target) => self.write_symbolic_link(destination, &target),
            None => false,
        }
    }

    /// Recursively copy the directory at `source` to `destination`.
    ///
    /// The default implementation creates `destination`, walks `source`
    /// non-recursively, and copies each immediate child by its type
    /// (recursing into subdirectories), using `copy_file` and
    /// `copy_symbolic_link` for leaves. A backend may override this with a
    /// bulk operation.
    fn copy_directory(&self, source: &str, destination: &str) -> bool {
        if !self.create_directory(destination, true) {
            return false;
        }

        let mut names = Vec::new();
        if !self.read_directory(source, false, &mut |name| names.push(name.to_string())) {
            return false;
        }

        let mut ok = true;
        for name in names {
            let child_source = crate::path::join(source, &name);
            let child_destination = crate::path::join(destination, &name);
            let step_ok = match self.file_type(&child_source) {
                Some(FileType::Directory) => self.copy_directory(&child_source, &child_destination),
                Some(FileType::SymbolicLink) => {
                    self.copy_symbolic_link(&child_source, &child_destination)
                }
                Some(FileType::File) => self.copy_file(&child_source, &child_destination),
                None => false,
            };
            ok &= step_ok;
        }
        ok
    }
}
