//! Path helpers shared by the appenders and the linker.

use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// `~user` forms and paths that are not valid UTF-8 pass through unchanged, as
/// does everything else when no home directory can be determined.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let raw = match path.to_str() {
        Some(raw) => raw,
        None => return path.to_path_buf(),
    };
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_bare_tilde_and_prefix() {
        let home = match dirs::home_dir() {
            Some(home) => home,
            None => return,
        };
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/outputs")), home.join("outputs"));
        assert_eq!(
            expand_tilde(Path::new("~/outputs/faces")),
            home.join("outputs/faces")
        );
    }

    #[test]
    fn leaves_absolute_paths_alone() {
        assert_eq!(
            expand_tilde(Path::new("/srv/outputs")),
            PathBuf::from("/srv/outputs")
        );
    }

    #[test]
    fn leaves_named_user_forms_alone() {
        assert_eq!(
            expand_tilde(Path::new("~someone/outputs")),
            PathBuf::from("~someone/outputs")
        );
    }

    #[test]
    fn leaves_interior_tilde_alone() {
        assert_eq!(
            expand_tilde(Path::new("/data/~/x")),
            PathBuf::from("/data/~/x")
        );
    }
}
