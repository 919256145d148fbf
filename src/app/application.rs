//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};
use tracing::{info, warn};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::character::Character;
use crate::domain::config::AppConfig;
use crate::services::ServiceHub;
use crate::state::session_state::SessionState;
use crate::utils::config_store;

actions!(mdt, [Quit]);

const CONFIG_FILE: &str = "config.toml";

/// Run the MDT application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let config: AppConfig = match config_store::load_config(CONFIG_FILE) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "failed to load config, using defaults");
                AppConfig::default()
            }
        };
        // Normalize the file on disk so new settings show up with defaults
        if let Err(e) = config_store::save_config(CONFIG_FILE, &config) {
            warn!(error = %e, "failed to write config");
        }
        info!(mock = config.bridge.mock, "starting mdt");

        let service_hub = ServiceHub::from_config(&config.bridge);
        cx.set_global(service_hub);

        let session = SessionState::new(Character::default(), config.permissions.clone());
        let entities = AppEntities::init(session, cx);
        cx.set_global(entities.clone());

        let bounds = Bounds::centered(None, gpui::size(px(1200.0), px(800.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("MDT")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        })
        .expect("Failed to open main window");

        cx.activate(true);
    });
}
