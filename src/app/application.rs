//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions, actions, px, size,
};
use gpui_component::{Root, Theme};
use rust_i18n::t;

use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::states::{AppSettings, GlobalStore};
use crate::views::CustomerListView;

actions!(customer_list, [Quit]);

/// Run the Customer List application
pub fn run_app() {
    let settings = AppSettings::load_or_default();

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            gpui_component::init(cx);

            if let Some(mode) = settings.theme() {
                Theme::change(mode, None, cx);
            }

            // Set up action handlers
            cx.bind_keys([KeyBinding::new("secondary-q", Quit, None)]);
            cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

            // Quit the app when all windows are closed (macOS behavior)
            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();

            let title = SharedString::from(t!("app.title", locale = settings.locale()).to_string());
            cx.set_global(GlobalStore::new(settings));

            // Create main window
            let bounds = Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            );
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
                titlebar: Some(TitlebarOptions {
                    title: Some(title),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let opened = cx.open_window(window_options, |window, cx| {
                let view = cx.new(|cx| CustomerListView::new(window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            });

            if let Err(e) = opened {
                tracing::error!(error = %e, "Failed to open main window");
                cx.quit();
                return;
            }

            cx.activate(true);
        });
}
