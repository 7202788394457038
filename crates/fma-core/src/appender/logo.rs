//! Logo appender node.

use serde::{Deserialize, Serialize};

use crate::appender::is_absent;
use crate::node::{AppendError, Invocation, NodeMeta, NODE_VERSION};
use crate::relocate::move_optional_asset;
use std::path::Path;

/// Inputs for the logo appender. At least one of the two logo paths must be
/// set; FM reads `<id>_logo` and `<id>_logo_small` independently.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoAppender {
    /// Absolute path to the standard-sized logo to move.
    pub normal_logo_path: Option<String>,
    /// Absolute path to the small-sized logo to move.
    pub small_logo_path: Option<String>,
    /// Football Manager unique identifier for the club.
    pub fm_id: String,
    /// Graphics folder that should receive the logos.
    pub fm_folder_path: String,
}

/// Details about the saved logos.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogoAppenderOutput {
    /// Absolute path to the relocated standard logo, when one was provided.
    pub saved_logo_path: Option<String>,
    /// Absolute path to the relocated small logo, when one was provided.
    pub saved_small_logo_path: Option<String>,
    /// Identifier used to name the logo files.
    pub football_manager_id: String,
    /// Destination directory used for the logo files.
    pub target_folder_path: String,
}

impl Invocation for LogoAppender {
    type Output = LogoAppenderOutput;

    const META: NodeMeta = NodeMeta {
        name: "fm_logo_appender",
        title: "FM Logo Appender",
        category: "utility",
        tags: &["fm", "utility", "files"],
        version: NODE_VERSION,
    };

    fn invoke(&self) -> Result<Self::Output, AppendError> {
        tracing::info!(
            normal_logo = ?self.normal_logo_path,
            small_logo = ?self.small_logo_path,
            fm_id = %self.fm_id,
            target = %self.fm_folder_path,
            "logo appender invoked"
        );

        if is_absent(&self.normal_logo_path) && is_absent(&self.small_logo_path) {
            return Err(AppendError::Validation(
                "Provide at least one logo image path to move (normal or small).",
            ));
        }

        let folder = Path::new(&self.fm_folder_path);
        let normal_destination = move_optional_asset(
            self.normal_logo_path.as_deref(),
            folder,
            &format!("{}_logo", self.fm_id),
        )?;
        let small_destination = move_optional_asset(
            self.small_logo_path.as_deref(),
            folder,
            &format!("{}_logo_small", self.fm_id),
        )?;

        if let Some(path) = &normal_destination {
            tracing::info!("Standard logo moved to {}", path.display());
        }
        if let Some(path) = &small_destination {
            tracing::info!("Small logo moved to {}", path.display());
        }

        Ok(LogoAppenderOutput {
            saved_logo_path: normal_destination.map(|p| p.display().to_string()),
            saved_small_logo_path: small_destination.map(|p| p.display().to_string()),
            football_manager_id: self.fm_id.clone(),
            target_folder_path: self.fm_folder_path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn moves_both_logos_under_their_suffixes() {
        let dir = tempdir().unwrap();
        let normal = dir.path().join("normal.png");
        let small = dir.path().join("small.png");
        fs::write(&normal, b"n").unwrap();
        fs::write(&small, b"s").unwrap();
        let logos = dir.path().join("logos");

        let node = LogoAppender {
            normal_logo_path: Some(normal.display().to_string()),
            small_logo_path: Some(small.display().to_string()),
            fm_id: "407".to_string(),
            fm_folder_path: logos.display().to_string(),
        };
        let output = node.invoke().unwrap();

        assert_eq!(
            output.saved_logo_path.as_deref(),
            Some(logos.join("407_logo.png").display().to_string().as_str())
        );
        assert_eq!(
            output.saved_small_logo_path.as_deref(),
            Some(
                logos
                    .join("407_logo_small.png")
                    .display()
                    .to_string()
                    .as_str()
            )
        );
        assert_eq!(output.football_manager_id, "407");
    }

    #[test]
    fn one_logo_is_enough() {
        let dir = tempdir().unwrap();
        let small = dir.path().join("small.png");
        fs::write(&small, b"s").unwrap();

        let node = LogoAppender {
            normal_logo_path: None,
            small_logo_path: Some(small.display().to_string()),
            fm_id: "407".to_string(),
            fm_folder_path: dir.path().display().to_string(),
        };
        let output = node.invoke().unwrap();

        assert!(output.saved_logo_path.is_none());
        assert!(output.saved_small_logo_path.is_some());
    }

    #[test]
    fn rejects_an_invocation_with_no_logo_at_all() {
        let node = LogoAppender {
            normal_logo_path: None,
            small_logo_path: Some(String::new()),
            fm_id: "407".to_string(),
            fm_folder_path: "/tmp/logos".to_string(),
        };
        let err = node.invoke().unwrap_err();
        assert!(matches!(err, AppendError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Provide at least one logo image path to move (normal or small)."
        );
    }

    #[test]
    fn optional_inputs_may_be_omitted_from_the_payload() {
        let node: LogoAppender = serde_json::from_str(
            r#"{"small_logo_path": "/tmp/s.png", "fm_id": "407", "fm_folder_path": "/tmp/logos"}"#,
        )
        .unwrap();
        assert!(node.normal_logo_path.is_none());
        assert_eq!(node.small_logo_path.as_deref(), Some("/tmp/s.png"));
    }

    #[test]
    fn absent_logo_serializes_as_null() {
        let output = LogoAppenderOutput {
            saved_logo_path: None,
            saved_small_logo_path: Some("/g/logos/407_logo_small.png".to_string()),
            football_manager_id: "407".to_string(),
            target_folder_path: "/g/logos".to_string(),
        };
        let wire = serde_json::to_value(&output).unwrap();
        assert!(wire["saved_logo_path"].is_null());
        assert_eq!(wire["football_manager_id"], "407");
    }
}
