//! Platform detection for the Football Manager graphics root.

use std::path::PathBuf;

use crate::linker::LinkError;

/// Graphics directory relative to the home directory on macOS.
pub const MAC_GRAPHICS_RELATIVE: &str =
    "Library/Application Support/Sports Interactive/Football Manager 26/graphics";

/// Return the graphics root for `os` (a `std::env::consts::OS` value).
///
/// Only macOS has a known location. Windows users are asked to link by hand
/// and everything else is refused outright.
pub fn resolve_target_root(os: &str) -> Result<PathBuf, LinkError> {
    match os {
        "macos" => {
            let home = dirs::home_dir().ok_or(LinkError::HomeDirUnavailable)?;
            Ok(home.join(MAC_GRAPHICS_RELATIVE))
        }
        "windows" => Err(LinkError::WindowsUnimplemented),
        other => Err(LinkError::UnsupportedPlatform(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macos_root_lives_under_the_home_directory() {
        let home = match dirs::home_dir() {
            Some(home) => home,
            None => return,
        };
        let root = resolve_target_root("macos").unwrap();
        assert!(root.starts_with(&home));
        assert!(root.ends_with("Football Manager 26/graphics"));
    }

    #[test]
    fn windows_is_refused_with_a_manual_linking_hint() {
        let err = resolve_target_root("windows").unwrap_err();
        assert!(matches!(err, LinkError::WindowsUnimplemented));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn anything_else_is_unsupported() {
        let err = resolve_target_root("linux").unwrap_err();
        assert!(matches!(err, LinkError::UnsupportedPlatform(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
