//! Kit appender node.

use serde::{Deserialize, Serialize};

use crate::appender::is_absent;
use crate::node::{AppendError, Invocation, NodeMeta, NODE_VERSION};
use crate::relocate::move_optional_asset;
use std::path::Path;

/// Inputs for the kit appender. At least one of the three kit paths must be
/// set; FM reads `<id>_kit_home`, `<id>_kit_away` and `<id>_kit_third`
/// independently.
#[derive(Debug, Clone, Deserialize)]
pub struct KitAppender {
    /// Absolute path to the home kit image to move.
    pub home_kit_path: Option<String>,
    /// Absolute path to the away kit image to move.
    pub away_kit_path: Option<String>,
    /// Absolute path to the third kit image to move.
    pub third_kit_path: Option<String>,
    /// Football Manager unique identifier for the club.
    pub fm_id: String,
    /// Graphics folder that should receive the kits.
    pub fm_folder_path: String,
}

/// Details about the saved kit images.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KitAppenderOutput {
    /// Absolute path to the relocated home kit, when one was provided.
    pub saved_home_kit_path: Option<String>,
    /// Absolute path to the relocated away kit, when one was provided.
    pub saved_away_kit_path: Option<String>,
    /// Absolute path to the relocated third kit, when one was provided.
    pub saved_third_kit_path: Option<String>,
    /// Identifier used to name the kit files.
    pub football_manager_id: String,
    /// Destination directory used for the kit files.
    pub target_folder_path: String,
}

impl Invocation for KitAppender {
    type Output = KitAppenderOutput;

    const META: NodeMeta = NodeMeta {
        name: "fm_kit_appender",
        title: "FM Kit Appender",
        category: "utility",
        tags: &["fm", "utility", "files"],
        version: NODE_VERSION,
    };

    fn invoke(&self) -> Result<Self::Output, AppendError> {
        tracing::info!(
            home = ?self.home_kit_path,
            away = ?self.away_kit_path,
            third = ?self.third_kit_path,
            fm_id = %self.fm_id,
            target = %self.fm_folder_path,
            "kit appender invoked"
        );

        if is_absent(&self.home_kit_path)
            && is_absent(&self.away_kit_path)
            && is_absent(&self.third_kit_path)
        {
            return Err(AppendError::Validation(
                "Provide at least one kit image path to move.",
            ));
        }

        let folder = Path::new(&self.fm_folder_path);
        let home_destination = move_optional_asset(
            self.home_kit_path.as_deref(),
            folder,
            &format!("{}_kit_home", self.fm_id),
        )?;
        let away_destination = move_optional_asset(
            self.away_kit_path.as_deref(),
            folder,
            &format!("{}_kit_away", self.fm_id),
        )?;
        let third_destination = move_optional_asset(
            self.third_kit_path.as_deref(),
            folder,
            &format!("{}_kit_third", self.fm_id),
        )?;

        if let Some(path) = &home_destination {
            tracing::info!("Home kit moved to {}", path.display());
        }
        if let Some(path) = &away_destination {
            tracing::info!("Away kit moved to {}", path.display());
        }
        if let Some(path) = &third_destination {
            tracing::info!("Third kit moved to {}", path.display());
        }

        Ok(KitAppenderOutput {
            saved_home_kit_path: home_destination.map(|p| p.display().to_string()),
            saved_away_kit_path: away_destination.map(|p| p.display().to_string()),
            saved_third_kit_path: third_destination.map(|p| p.display().to_string()),
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
    fn moves_each_provided_kit_under_its_suffix() {
        let dir = tempdir().unwrap();
        let home = dir.path().join("home.jpg");
        let away = dir.path().join("away.jpg");
        fs::write(&home, b"h").unwrap();
        fs::write(&away, b"a").unwrap();
        let kits = dir.path().join("kits");

        let node = KitAppender {
            home_kit_path: Some(home.display().to_string()),
            away_kit_path: Some(away.display().to_string()),
            third_kit_path: None,
            fm_id: "407".to_string(),
            fm_folder_path: kits.display().to_string(),
        };
        let output = node.invoke().unwrap();

        assert_eq!(
            output.saved_home_kit_path.as_deref(),
            Some(kits.join("407_kit_home.jpg").display().to_string().as_str())
        );
        assert_eq!(
            output.saved_away_kit_path.as_deref(),
            Some(kits.join("407_kit_away.jpg").display().to_string().as_str())
        );
        assert!(output.saved_third_kit_path.is_none());
        assert_eq!(output.football_manager_id, "407");
        assert_eq!(output.target_folder_path, node.fm_folder_path);
    }

    #[test]
    fn rejects_an_invocation_with_no_kit_at_all() {
        let node = KitAppender {
            home_kit_path: None,
            away_kit_path: Some(String::new()),
            third_kit_path: None,
            fm_id: "407".to_string(),
            fm_folder_path: "/tmp/kits".to_string(),
        };
        let err = node.invoke().unwrap_err();
        assert!(matches!(err, AppendError::Validation(_)));
        assert_eq!(err.to_string(), "Provide at least one kit image path to move.");
    }

    #[test]
    fn a_failed_move_stops_the_invocation() {
        let dir = tempdir().unwrap();
        let away = dir.path().join("away.png");
        fs::write(&away, b"a").unwrap();

        let node = KitAppender {
            home_kit_path: Some(dir.path().join("absent.png").display().to_string()),
            away_kit_path: Some(away.display().to_string()),
            third_kit_path: None,
            fm_id: "407".to_string(),
            fm_folder_path: dir.path().join("kits").display().to_string(),
        };
        let err = node.invoke().unwrap_err();
        assert!(matches!(err, AppendError::Relocate(_)));
        assert!(away.exists(), "later kits are untouched after a failure");
    }

    #[test]
    fn optional_inputs_may_be_omitted_from_the_payload() {
        let node: KitAppender = serde_json::from_str(
            r#"{"home_kit_path": "/tmp/h.png", "fm_id": "407", "fm_folder_path": "/tmp/kits"}"#,
        )
        .unwrap();
        assert!(node.away_kit_path.is_none());
        assert!(node.third_kit_path.is_none());
    }
}
