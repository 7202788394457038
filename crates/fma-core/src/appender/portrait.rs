//! Portrait appender node.

use serde::{Deserialize, Serialize};

use crate::node::{AppendError, Invocation, NodeMeta, NODE_VERSION};
use crate::relocate::move_asset;
use std::path::Path;

/// Inputs for the portrait appender: one generated image, one person.
#[derive(Debug, Clone, Deserialize)]
pub struct PortraitAppender {
    /// Absolute path to the generated portrait image on disk.
    pub image_path: String,
    /// Football Manager unique identifier for the person.
    pub fm_id: String,
    /// Graphics folder that should receive the portrait.
    pub fm_folder_path: String,
}

/// Details about the saved portrait.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PortraitAppenderOutput {
    /// Absolute path to the relocated portrait image.
    pub saved_portrait_path: String,
    /// Identifier used for naming.
    pub fm_id: String,
    /// Destination directory used for the portrait.
    pub target_folder_path: String,
}

impl Invocation for PortraitAppender {
    type Output = PortraitAppenderOutput;

    const META: NodeMeta = NodeMeta {
        name: "fm_portrait_appender",
        title: "FM Portrait Appender",
        category: "utility",
        tags: &["fm", "utility", "files"],
        version: NODE_VERSION,
    };

    fn invoke(&self) -> Result<Self::Output, AppendError> {
        tracing::info!(
            image = %self.image_path,
            fm_id = %self.fm_id,
            target = %self.fm_folder_path,
            "portrait appender invoked"
        );

        let destination = move_asset(
            Path::new(&self.image_path),
            Path::new(&self.fm_folder_path),
            &self.fm_id,
        )?;

        tracing::info!("Portrait moved to {}", destination.display());

        Ok(PortraitAppenderOutput {
            saved_portrait_path: destination.display().to_string(),
            fm_id: self.fm_id.clone(),
            target_folder_path: self.fm_folder_path.clone(),
        })
    }
}
