//! # Physical backend
//!
//! [`PhysicalFs`] implements the filesystem contract against the host
//! operating system: `access(2)` for probes, `lstat`-equivalent metadata
//! for typing (never following the leaf), `std::fs` for I/O, `symlink`/
//! `readlink` for links, and directory primitives for the rest.
//!
//! Unix only: the POSIX primitives this backend relies on (`access`,
//! symbolic links as first-class entries) have no portable equivalent
//! elsewhere in this crate's scope.

use std::ffi::CString;
use std::io::{Read, Seek, SeekFrom};

use crate::{path, Filesystem};

fn posix_access(target: &str, mode: libc::c_int) -> bool {
    match CString::new(target) {
        Ok(cpath) => unsafe { libc::access(cpath.as_ptr(), mode) == 0 },
        Err(_) => false,
    }
}

fn to_path_string(p: &std::path::Path) -> String {
    p.to_string_lossy().into_owned()
}

/// Classify `error` for `tracing`, filling in the path the blanket
/// `From<io::Error>` conversion has no way to know.
fn classify(path: &str, error: std::io::Error) -> crate::error::BackendError {
    match crate::error::BackendError::from(error) {
        crate::error::BackendError::NotFound { .. } => crate::error::BackendError::NotFound {
            path: std::path::PathBuf::from(path),
        },
        crate::error::BackendError::Denied { .. } => crate::error::BackendError::Denied {
            path: std::path::PathBuf::from(path),
        },
        other => other,
    }
}

/// A filesystem backend bound to the host operating system.
///
/// Takes no configuration at construction — it binds to the host process's
/// own filesystem namespace and current working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhysicalFs;

impl PhysicalFs {
    /// Construct a backend bound to the host filesystem.
    pub fn new() -> Self {
        PhysicalFs
    }

    fn read_directory_inner(
        &self,
        dir: &str,
        prefix: &str,
        recursive: bool,
        visit: &mut dyn FnMut(&str),
    ) -> bool {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return false,
        };

        let mut names = Vec::new();
        let mut subdirs = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            let relative = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}/{name}")
            };
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            if is_dir {
                subdirs.push((to_path_string(&entry.path()), relative.clone()));
            }
            names.push(relative);
        }

        for name in &names {
            visit(name);
        }

        if recursive {
            for (child_dir, relative) in subdirs {
                self.read_directory_inner(&child_dir, &relative, recursive, visit);
            }
        }
        true
    }
}

impl Filesystem for PhysicalFs {
    fn exists(&self, target: &str) -> bool {
        posix_access(target, libc::F_OK)
    }

    fn is_readable(&self, target: &str) -> bool {
        posix_access(target, libc::R_OK)
    }

    fn is_writable(&self, target: &str) -> bool {
        posix_access(target, libc::W_OK)
    }

    fn is_executable(&self, target: &str) -> bool {
        posix_access(target, libc::X_OK)
    }

    fn file_type(&self, target: &str) -> Option<crate::FileType> {
        let metadata = std::fs::symlink_metadata(target).ok()?;
        let kind = metadata.file_type();
        if kind.is_symlink() {
            Some(crate::FileType::SymbolicLink)
        } else if kind.is_dir() {
            Some(crate::FileType::Directory)
        } else if kind.is_file() {
            Some(crate::FileType::File)
        } else {
            None
        }
    }

    fn create_file(&self, target: &str) -> bool {
        match std::fs::symlink_metadata(target) {
            Ok(metadata) => metadata.file_type().is_file(),
            Err(_) => std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(target)
                .is_ok(),
        }
    }

    fn read_range(&self, target: &str, offset: u64, length: Option<u64>) -> Option<Vec<u8>> {
        let mut file = std::fs::File::open(target).ok()?;
        let size = file.metadata().ok()?.len();
        if offset > size {
            return None;
        }
        let end = match length {
            Some(length) => offset.checked_add(length)?,
            None => size,
        };
        if end > size {
            return None;
        }
        file.seek(SeekFrom::Start(offset)).ok()?;
        let want = usize::try_from(end - offset).ok()?;
        let mut buf = vec![0u8; want];
        file.read_exact(&mut buf).ok()?;
        Some(buf)
    }

    fn write(&self, target: &str, contents: &[u8]) -> bool {
        if let Ok(metadata) = std::fs::symlink_metadata(target) {
            if !metadata.file_type().is_file() {
                return false;
            }
        }
        std::fs::write(target, contents).is_ok()
    }

    fn remove_file(&self, target: &str) -> bool {
        match std::fs::symlink_metadata(target) {
            Ok(metadata) if metadata.file_type().is_file() => std::fs::remove_file(target).is_ok(),
            _ => false,
        }
    }

    fn read_symbolic_link(&self, target: &str) -> Option<String> {
        let link = std::fs::read_link(target).ok()?;
        Some(to_path_string(&link))
    }

    fn write_symbolic_link(&self, path: &str, target: &str) -> bool {
        if std::fs::symlink_metadata(path).is_ok() {
            return false;
        }
        std::os::unix::fs::symlink(target, path).is_ok()
    }

    fn remove_symbolic_link(&self, target: &str) -> bool {
        // Ensures the postcondition "path is not a link" holds, silently
        // succeeding when it already does (including non-existence).
        match std::fs::symlink_metadata(target) {
            Ok(metadata) if metadata.file_type().is_symlink() => {
                std::fs::remove_file(target).is_ok()
            }
            _ => true,
        }
    }

    fn create_directory(&self, target: &str, recursive: bool) -> bool {
        if let Ok(metadata) = std::fs::symlink_metadata(target) {
            return metadata.file_type().is_dir();
        }

        if !recursive {
            let parent = path::directory_name(target);
            if !parent.is_empty() && !self.is_directory(parent) {
                return false;
            }
            return std::fs::create_dir(target).is_ok();
        }

        // Ascend lexically, pushing missing components onto a stack until
        // an existing directory is found, then create top-down. The
        // creation mode is the kernel's own default (0o777 masked by the
        // process umask automatically) rather than read-and-restore of
        // the umask by hand, which would be a racy process-global
        // mutation for no benefit.
        let mut missing = Vec::new();
        let mut current = target.to_string();
        loop {
            match std::fs::symlink_metadata(&current) {
                Ok(metadata) => {
                    if !metadata.file_type().is_dir() {
                        return false;
                    }
                    break;
                }
                Err(_) => {
                    missing.push(current.clone());
                    let parent = path::directory_name(&current);
                    if parent.is_empty() || parent == current {
                        break;
                    }
                    current = parent.to_string();
                }
            }
        }

        for component in missing.into_iter().rev() {
            if std::fs::create_dir(&component).is_err() && !self.is_directory(&component) {
                return false;
            }
        }
        true
    }

    fn read_directory(&self, target: &str, recursive: bool, visit: &mut dyn FnMut(&str)) -> bool {
        self.read_directory_inner(target, "", recursive, visit)
    }

    fn remove_directory(&self, target: &str, recursive: bool) -> bool {
        let metadata = match std::fs::symlink_metadata(target) {
            Ok(metadata) => metadata,
            Err(_) => return false,
        };
        if !metadata.file_type().is_dir() {
            return false;
        }
        if !recursive {
            return std::fs::remove_dir(target).is_ok();
        }

        let mut ok = true;
        match std::fs::read_dir(target) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let child = to_path_string(&entry.path());
                    let child_meta = match std::fs::symlink_metadata(&child) {
                        Ok(meta) => meta,
                        Err(error) => {
                            let reason = classify(&child, error);
                            tracing::debug!(path = %child, %reason, "failed to stat entry during recursive directory removal");
                            ok = false;
                            continue;
                        }
                    };
                    let step_result = if child_meta.file_type().is_dir() {
                        if self.remove_directory(&child, true) {
                            Ok(())
                        } else {
                            Err(std::io::Error::other("nested directory removal failed"))
                        }
                    } else {
                        std::fs::remove_file(&child)
                    };
                    if let Err(error) = step_result {
                        let reason = classify(&child, error);
                        tracing::debug!(path = %child, %reason, "failed to remove entry during recursive directory removal");
                        ok = false;
                    }
                }
            }
            Err(error) => {
                let reason = classify(target, error);
                tracing::debug!(path = %target, %reason, "failed to read directory during recursive removal");
                ok = false;
            }
        }

        if let Err(error) = std::fs::remove_dir(target) {
            let reason = classify(target, error);
            tracing::debug!(path = %target, %reason, "failed to remove directory after clearing its contents");
            ok = false;
        }
        ok
    }

    fn resolve_path(&self, target: &str) -> String {
        std::fs::canonicalize(target)
            .map(|p| to_path_string(&p))
            .unwrap_or_default()
    }

    fn copy_file(&self, source: &str, destination: &str) -> bool {
        if let Ok(metadata) = std::fs::symlink_metadata(destination) {
            if !metadata.file_type().is_file() {
                return false;
            }
        }
        // std::fs::copy uses copyfile(3) on Apple platforms and
        // copy_file_range/sendfile on Linux when available — the native
        // bulk-copy facility this backend prefers over read+write.
        std::fs::copy(source, destination).is_ok()
    }
}
