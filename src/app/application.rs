//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::gallery::Gallery;
use crate::config::GalleryConfig;
use crate::error::{Error, Result};

actions!(card_gallery, [Quit]);

/// Run the card gallery application
pub fn run_app(config: GalleryConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        if let Err(err) = open_gallery_window(&config, cx) {
            tracing::error!("{}", err);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

fn open_gallery_window(config: &GalleryConfig, cx: &mut App) -> Result<()> {
    let bounds = Bounds::centered(None, gpui::size(px(config.width), px(config.height)), cx);
    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from(config.title.clone())),
            ..Default::default()
        }),
        ..Default::default()
    };

    cx.open_window(window_options, |_window, cx| cx.new(|_| Gallery::new()))
        .map_err(|e| Error::Window {
            message: e.to_string(),
        })?;

    tracing::info!("Opened gallery window ({}x{})", config.width, config.height);
    Ok(())
}
