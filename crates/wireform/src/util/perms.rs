//! File permission inspection.
//!
//! Reads the Unix mode word of a path and splits it into
//! read/write/execute flags for the owning user, the group, and others.

use std::fs;
use std::io::ErrorKind;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::error::PermissionsError;

/// Read/write/execute flags for one permission class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

/// Permissions for the owning user, the group, and others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePermissions {
    pub user: Access,
    pub group: Access,
    pub others: Access,
}

/// Returns the permission flags for the file or directory at `path`.
///
/// A missing path fails with [`PermissionsError::NotFound`]; any other
/// metadata failure surfaces as [`PermissionsError::Inaccessible`].
pub fn check_permissions(path: impl AsRef<Path>) -> Result<FilePermissions, PermissionsError> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            PermissionsError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            PermissionsError::Inaccessible {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mode = metadata.permissions().mode();
    Ok(FilePermissions {
        user: Access {
            read: mode & 0o400 != 0,
            write: mode & 0o200 != 0,
            execute: mode & 0o100 != 0,
        },
        group: Access {
            read: mode & 0o040 != 0,
            write: mode & 0o020 != 0,
            execute: mode & 0o010 != 0,
        },
        others: Access {
            read: mode & 0o004 != 0,
            write: mode & 0o002 != 0,
            execute: mode & 0o001 != 0,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflects_chmod_bits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"x").unwrap();

        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
        let perms = check_permissions(&path).unwrap();

        assert_eq!(
            perms.user,
            Access {
                read: true,
                write: true,
                execute: false
            }
        );
        assert_eq!(
            perms.group,
            Access {
                read: true,
                write: false,
                execute: false
            }
        );
        assert_eq!(
            perms.others,
            Access {
                read: false,
                write: false,
                execute: false
            }
        );
    }

    #[test]
    fn test_executable_bits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.sh");
        fs::write(&path, b"#!/bin/sh\n").unwrap();

        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        let perms = check_permissions(&path).unwrap();

        assert!(perms.user.execute);
        assert!(perms.group.execute);
        assert!(perms.others.execute);
        assert!(!perms.group.write);
        assert!(!perms.others.write);
    }

    #[test]
    fn test_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist");

        let result = check_permissions(&path);
        assert!(matches!(result, Err(PermissionsError::NotFound { .. })));
    }

    #[test]
    fn test_directory_permissions() {
        let dir = tempfile::tempdir().unwrap();
        let perms = check_permissions(dir.path()).unwrap();
        assert!(perms.user.read);
        assert!(perms.user.execute);
    }
}
