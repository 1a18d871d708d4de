// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::composition::OverlayChoice;
use crate::error::Error;
use crate::media::BackgroundImage;
use crate::preview::Field;
use crate::ui::stage;
use std::path::PathBuf;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Upload button pressed.
    OpenFileDialog,
    /// Result from the open file dialog; `None` when cancelled.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    BackgroundDecoded {
        path: PathBuf,
        result: Result<BackgroundImage, Error>,
    },
    Stage(stage::Message),
    SelectOverlay(OverlayChoice),
    FieldChanged(Field, String),
    Download,
    /// Download task finished. `None` when the save dialog was cancelled,
    /// otherwise the written path or the write error.
    DownloadSaved(Option<Result<PathBuf, Error>>),
    Submit,
    SubmissionCompleted(Result<(), Error>),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image to load as the background on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CORNER_PREVIEW_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
