pub mod clipboard;
pub mod handlers;
pub mod header;
pub mod overlay_window;
pub mod result_view;
pub mod selection_surface;
pub mod shortcuts;
pub mod status;

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::Orientation;
use log::error;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::app::{AppState, Keymap, Settings};
use crate::pipeline::Pipeline;
use crate::selection::RegionSelector;

pub fn build_ui(app: &adw::Application, settings: &Rc<Settings>) {
    let state = Rc::new(RefCell::new(AppState::new(settings)));
    let keymap = Rc::new(Keymap::default());

    let header = header::create_header_bar(&state);
    let result = result_view::create_result_view();

    let content = gtk::Box::builder()
        .orientation(Orientation::Vertical)
        .build();
    content.append(&header.header_bar);
    content.append(&result.frame);
    content.append(&result.status_label);

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Screen Translator")
        .content(&content)
        .default_width(640)
        .default_height(420)
        .build();

    let surface = selection_surface::create_selection_surface(app, settings);
    let selector = Rc::new(RefCell::new(RegionSelector::new(surface.clone())));
    let overlay = overlay_window::create_overlay_controller(app, settings, &result);

    let pipeline = match Pipeline::from_settings(settings) {
        Ok(pipeline) => Some(Rc::new(pipeline)),
        Err(e) => {
            error!("Failed to set up the translator: {}", e);
            header.translate_btn.set_sensitive(false);
            None
        }
    };
    let startup_status = match &pipeline {
        Some(_) => status::ready(),
        None => status::startup_error("the translator could not be set up"),
    };

    let shell = handlers::Shell {
        state,
        selector,
        overlay,
        pipeline,
        keymap,
        settings: settings.clone(),
        window: window.clone(),
        result: result.clone(),
        busy: Rc::new(Cell::new(false)),
    };

    handlers::connect_all_handlers(&shell, &header, &surface);

    result.show(&startup_status);
    window.present();
}
