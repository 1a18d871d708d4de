// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the current [`PreviewState`] snapshot and the rendered stage
//! bitmap. Messages are routed to handlers in `update`, which fold them into
//! the state through [`crate::preview::reduce`] and spawn any asynchronous
//! work (dialogs, decoding, the HTTP request) as tasks.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::composition::{OverlaySet, Scene};
use crate::config::{self, Config, STAGE_WIDTH};
use crate::i18n::fluent::I18n;
use crate::preview::PreviewState;
use crate::submission::SubmissionClient;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Resolved once at startup; `System` queries the desktop.
    theme: Theme,
    state: PreviewState,
    overlays: OverlaySet,
    /// Last rasterized stage, shown 1:1 in the preview.
    frame: image::Handle,
    stage_size: (u32, u32),
    /// `None` when the HTTP client could not be built; submissions then fail.
    client: Option<SubmissionClient>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_background", &self.state.background.is_some())
            .field("overlay", &self.state.overlay)
            .field("submission", &self.state.submission)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 880;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 960;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and overlays, and starts decoding the startup
    /// image if one was given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "using default configuration");
        }
        let i18n = I18n::new(flags.lang.clone(), &config);

        let overlays = OverlaySet::load(STAGE_WIDTH).unwrap_or_else(|err| {
            tracing::error!(%err, "bundled overlays failed to render");
            OverlaySet::blank(STAGE_WIDTH)
        });

        let client = match SubmissionClient::new(config.submission.endpoint.clone()) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(%err, "could not build HTTP client");
                None
            }
        };

        let app = Self::with_parts(i18n, config, overlays, client);

        tracing::info!(
            locale = %app.i18n.current_locale(),
            endpoint = %app.config.submission.endpoint,
            "preview ready"
        );

        let task = match flags.file_path {
            Some(path) => update::load_background(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn with_parts(
        i18n: I18n,
        config: Config,
        overlays: OverlaySet,
        client: Option<SubmissionClient>,
    ) -> Self {
        let state = PreviewState::default();
        let theme = config.general.theme_mode.theme();
        let mut app = Self {
            i18n,
            config,
            theme,
            state,
            overlays,
            frame: image::Handle::from_rgba(1, 1, vec![255; 4]),
            stage_size: (1, 1),
            client,
        };
        app.refresh_frame();
        app
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn scene(&self) -> Scene<'_> {
        self.state.scene(&self.overlays)
    }

    /// Re-renders the on-screen stage from the current state.
    fn refresh_frame(&mut self) {
        let bitmap = self.scene().rasterize();
        let (width, height) = bitmap.dimensions();
        self.stage_size = (width, height);
        self.frame = image::Handle::from_rgba(width, height, bitmap.into_raw());
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let before = self.state.clone();

        let mut ctx = update::UpdateContext {
            state: &mut self.state,
            config: &self.config,
            i18n: &self.i18n,
            overlays: &self.overlays,
            client: self.client.as_ref(),
        };

        let task = match message {
            Message::OpenFileDialog => update::handle_open_file_dialog(ctx.i18n),
            Message::OpenFileDialogResult(path) => update::handle_open_file_dialog_result(path),
            Message::FileDropped(path) => update::load_background(path),
            Message::BackgroundDecoded { path, result } => {
                update::handle_background_decoded(&mut ctx, &path, result)
            }
            Message::Stage(stage_message) => update::handle_stage_message(&mut ctx, stage_message),
            Message::SelectOverlay(choice) => update::handle_overlay_selected(&mut ctx, choice),
            Message::FieldChanged(field, value) => {
                update::handle_field_changed(&mut ctx, field, value)
            }
            Message::Download => update::handle_download(&ctx),
            Message::DownloadSaved(result) => update::handle_download_saved(result),
            Message::Submit => update::handle_submit(&mut ctx),
            Message::SubmissionCompleted(result) => {
                update::handle_submission_completed(&mut ctx, result)
            }
        };

        if !before.same_visual(&self.state) {
            self.refresh_frame();
        }

        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            state: &self.state,
            frame: &self.frame,
            stage_size: self.stage_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::OverlayChoice;
    use crate::config::OVERLAY_TOP;
    use crate::media::BackgroundImage;
    use crate::ui::stage;
    use image_rs::{Rgba, RgbaImage};

    fn app() -> App {
        App::with_parts(
            I18n::default(),
            Config::default(),
            OverlaySet::blank(STAGE_WIDTH),
            None,
        )
    }

    fn photo() -> BackgroundImage {
        BackgroundImage::from_rgba(
            RgbaImage::from_pixel(STAGE_WIDTH, 100, Rgba([10, 20, 30, 255])),
            STAGE_WIDTH,
        )
    }

    #[test]
    fn stage_size_follows_overlay() {
        let app = app();
        assert_eq!(
            app.stage_size,
            (STAGE_WIDTH, OVERLAY_TOP + STAGE_WIDTH * 3 / 4)
        );
    }

    #[test]
    fn decoded_background_is_applied_and_rendered() {
        let mut app = app();
        let before = app.frame.id();
        let _ = app.update(Message::BackgroundDecoded {
            path: PathBuf::from("photo.png"),
            result: Ok(photo()),
        });
        assert!(app.state.background.is_some());
        assert_ne!(app.frame.id(), before);
    }

    #[test]
    fn failed_decode_keeps_previous_background() {
        let mut app = app();
        let _ = app.update(Message::BackgroundDecoded {
            path: PathBuf::from("photo.png"),
            result: Ok(photo()),
        });
        let previous = app.state.background.clone().expect("photo loaded");
        let _ = app.update(Message::BackgroundDecoded {
            path: PathBuf::from("broken.png"),
            result: Err(crate::error::Error::Decode("bad".into())),
        });
        assert!(app
            .state
            .background
            .as_ref()
            .is_some_and(|background| background.ptr_eq(&previous)));
    }

    #[test]
    fn oversized_strip_keeps_previous_background() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let strip = dir.path().join("strip.png");
        RgbaImage::from_pixel(1, 20_000, Rgba([0, 0, 0, 255]))
            .save(&strip)
            .expect("failed to write strip");

        let mut app = app();
        let _ = app.update(Message::BackgroundDecoded {
            path: PathBuf::from("photo.png"),
            result: Ok(photo()),
        });
        let previous = app.state.background.clone().expect("photo loaded");
        let frame = app.frame.id();

        let result = crate::media::load_background(&strip, STAGE_WIDTH);
        assert!(result.is_err());
        let _ = app.update(Message::BackgroundDecoded {
            path: strip,
            result,
        });

        assert!(app
            .state
            .background
            .as_ref()
            .is_some_and(|background| background.ptr_eq(&previous)));
        assert_eq!(app.frame.id(), frame);
    }

    #[test]
    fn theme_follows_configured_mode() {
        let mut config = Config::default();
        config.general.theme_mode = crate::ui::theming::ThemeMode::Dark;
        let app = App::with_parts(I18n::default(), config, OverlaySet::blank(STAGE_WIDTH), None);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn stage_drag_moves_background() {
        let mut app = app();
        let _ = app.update(Message::BackgroundDecoded {
            path: PathBuf::from("photo.png"),
            result: Ok(photo()),
        });
        for message in [
            stage::Message::Pressed(iced::Point::new(10.0, 10.0)),
            stage::Message::Moved(iced::Point::new(40.0, 30.0)),
            stage::Message::Released,
        ] {
            let _ = app.update(Message::Stage(message));
        }
        assert_eq!(app.state.position, iced::Vector::new(30.0, 20.0));
    }

    #[test]
    fn pressing_without_movement_keeps_frame() {
        let mut app = app();
        let _ = app.update(Message::BackgroundDecoded {
            path: PathBuf::from("photo.png"),
            result: Ok(photo()),
        });
        let before = app.frame.id();
        let _ = app.update(Message::Stage(stage::Message::Pressed(iced::Point::new(
            5.0, 5.0,
        ))));
        assert_eq!(app.frame.id(), before);
    }

    #[test]
    fn overlay_selection_rerenders() {
        let mut app = App::with_parts(
            I18n::default(),
            Config::default(),
            OverlaySet::load(STAGE_WIDTH).expect("overlays should rasterize"),
            None,
        );
        let before = app.frame.id();
        let _ = app.update(Message::SelectOverlay(OverlayChoice::OpenCorner));
        assert_eq!(app.state.overlay, OverlayChoice::OpenCorner);
        assert_ne!(app.frame.id(), before);
    }

    #[test]
    fn submit_without_client_fails_quietly() {
        let mut app = app();
        let _ = app.update(Message::Submit);
        assert!(!app.state.success_message_visible());
        assert!(app.state.can_submit());
    }

    #[test]
    fn completed_submission_shows_success() {
        let mut app = app();
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::SubmissionCompleted(Ok(())));
        assert!(app.state.success_message_visible());
    }
}
