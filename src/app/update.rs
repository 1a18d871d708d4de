// SPDX-License-Identifier: MPL-2.0
//! Message handlers.
//!
//! Each handler folds its message into the preview state through the
//! reducer and returns any follow-up work as a [`Task`]. Failures are logged
//! and otherwise absorbed; the page never shows an error.

use super::Message;
use crate::composition::{export, Composite, OverlayChoice, OverlaySet};
use crate::config::{Config, STAGE_WIDTH};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::media::{self, IMAGE_EXTENSIONS};
use crate::preview::{self, Event, Field, PreviewState};
use crate::submission::{FormPayload, SubmissionClient};
use crate::ui::stage;
use iced::Task;
use std::path::{Path, PathBuf};

/// Mutable view of the application state handed to every handler.
pub struct UpdateContext<'a> {
    pub state: &'a mut PreviewState,
    pub config: &'a Config,
    pub i18n: &'a I18n,
    pub overlays: &'a OverlaySet,
    pub client: Option<&'a SubmissionClient>,
}

impl UpdateContext<'_> {
    fn apply(&mut self, event: Event) {
        let next = preview::reduce(self.state, event);
        *self.state = next;
    }

    /// Rasterizes and encodes the stage as it looks right now.
    fn render_composite(&self) -> Result<Composite> {
        Composite::encode(&self.state.scene(self.overlays).rasterize())
    }
}

pub fn handle_open_file_dialog(i18n: &I18n) -> Task<Message> {
    let filter_name = i18n.tr("dialog-image-filter");
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

pub fn handle_open_file_dialog_result(path: Option<PathBuf>) -> Task<Message> {
    match path {
        Some(path) => load_background(path),
        // User cancelled the dialog
        None => Task::none(),
    }
}

/// Decodes `path` off the update loop.
pub fn load_background(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let result = media::load_background(&path, STAGE_WIDTH);
            (path, result)
        },
        |(path, result)| Message::BackgroundDecoded { path, result },
    )
}

pub fn handle_background_decoded(
    ctx: &mut UpdateContext<'_>,
    path: &Path,
    result: Result<media::BackgroundImage>,
) -> Task<Message> {
    match result {
        Ok(background) => {
            tracing::info!(
                path = %path.display(),
                width = background.width(),
                height = background.height(),
                "background loaded"
            );
            ctx.apply(Event::BackgroundLoaded(background));
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "could not load background");
        }
    }
    Task::none()
}

pub fn handle_stage_message(ctx: &mut UpdateContext<'_>, message: stage::Message) -> Task<Message> {
    let event = match message {
        stage::Message::Pressed(point) => Event::PointerPressed(point),
        stage::Message::Moved(point) => Event::PointerMoved(point),
        stage::Message::Released => Event::PointerReleased,
        stage::Message::Left => Event::PointerLeft,
    };
    ctx.apply(event);
    Task::none()
}

pub fn handle_overlay_selected(ctx: &mut UpdateContext<'_>, choice: OverlayChoice) -> Task<Message> {
    tracing::debug!(?choice, "overlay selected");
    ctx.apply(Event::OverlaySelected(choice));
    Task::none()
}

pub fn handle_field_changed(
    ctx: &mut UpdateContext<'_>,
    field: Field,
    value: String,
) -> Task<Message> {
    ctx.apply(Event::FieldChanged(field, value));
    Task::none()
}

/// Renders the composite immediately, then asks where to save it. The file is
/// written inside the dialog task.
pub fn handle_download(ctx: &UpdateContext<'_>) -> Task<Message> {
    let composite = match ctx.render_composite() {
        Ok(composite) => composite,
        Err(err) => {
            tracing::warn!(%err, "could not encode preview for download");
            return Task::none();
        }
    };

    let dialog = rfd::AsyncFileDialog::new()
        .add_filter(ctx.i18n.tr("dialog-png-filter"), &["png"])
        .set_file_name(&ctx.config.export.file_name);

    Task::perform(
        async move {
            let path = dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf());
            save_to_chosen_path(path, &composite)
        },
        Message::DownloadSaved,
    )
}

/// Writes `composite` to the path picked in the save dialog, adding a `.png`
/// extension when none was typed. `None` means the dialog was cancelled.
pub fn save_to_chosen_path(
    path: Option<PathBuf>,
    composite: &Composite,
) -> Option<Result<PathBuf>> {
    let path = export::with_png_extension(path?);
    Some(composite.save(&path).map(|()| path))
}

pub fn handle_download_saved(result: Option<Result<PathBuf>>) -> Task<Message> {
    if let Some(Err(err)) = result {
        tracing::warn!(%err, "could not save preview");
    }
    Task::none()
}

/// Starts a submission unless one is already in flight.
pub fn handle_submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.state.can_submit() {
        tracing::debug!("submission already in flight");
        return Task::none();
    }
    ctx.apply(Event::SubmissionStarted);

    let composite = match ctx.render_composite() {
        Ok(composite) => composite,
        Err(err) => {
            tracing::warn!(%err, "could not encode preview for submission");
            ctx.apply(Event::SubmissionFinished { success: false });
            return Task::none();
        }
    };

    let Some(client) = ctx.client.cloned() else {
        tracing::warn!("no HTTP client available, submission dropped");
        ctx.apply(Event::SubmissionFinished { success: false });
        return Task::none();
    };

    let payload = FormPayload::new(&ctx.config.submission.reply_to, &ctx.state.form, &composite);
    Task::perform(
        async move { client.submit(&payload).await },
        Message::SubmissionCompleted,
    )
}

pub fn handle_submission_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<()>,
) -> Task<Message> {
    let success = match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%err, "submission failed");
            false
        }
    };
    ctx.apply(Event::SubmissionFinished { success });
    Task::none()
}
