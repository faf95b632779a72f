mod app;
mod capture;
mod ocr;
mod overlay;
mod pipeline;
mod selection;
mod translate;
mod ui;

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use log::{info, warn};
use std::rc::Rc;

use crate::app::Settings;

const APP_ID: &str = "org.example.ScreenTranslator";

fn main() -> gtk::glib::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{:#}, using default settings", e);
            Settings::default()
        }
    };
    info!(
        "Translating {} -> {}",
        settings.source_language, settings.target_language
    );
    let settings = Rc::new(settings);

    let app = adw::Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| ui::build_ui(app, &settings));
    app.run()
}
