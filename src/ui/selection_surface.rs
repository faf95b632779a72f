use gtk4 as gtk;

use gtk::{gdk, DrawingArea};
use gtk4::prelude::*;
use log::{debug, warn};
use std::cell::Cell;
use std::rc::Rc;

use crate::app::Settings;
use crate::selection::{Point, Region, SelectionSurface};

/// Full-screen translucent window the user drags a region on
#[derive(Clone)]
pub struct GtkSelectionSurface {
    pub window: gtk::Window,
    pub drawing_area: DrawingArea,
    rect: Rc<Cell<Option<Region>>>,
    origin: Rc<Cell<Point>>,
}

pub fn create_selection_surface(
    app: &impl IsA<gtk::Application>,
    settings: &Settings,
) -> GtkSelectionSurface {
    let drawing_area = DrawingArea::builder().hexpand(true).vexpand(true).build();
    drawing_area.set_cursor_from_name(Some("crosshair"));

    let window = gtk::Window::builder()
        .application(app)
        .title("Select Region")
        .decorated(false)
        .child(&drawing_area)
        .build();
    window.set_opacity(settings.appearance.selection_opacity);

    let surface = GtkSelectionSurface {
        window,
        drawing_area,
        rect: Rc::new(Cell::new(None)),
        origin: Rc::new(Cell::new(Point::default())),
    };
    setup_draw_function(&surface);
    surface
}

fn setup_draw_function(surface: &GtkSelectionSurface) {
    surface.drawing_area.set_draw_func({
        let rect = surface.rect.clone();
        let origin = surface.origin.clone();
        move |_, cr, _width, _height| {
            draw_selection(cr, rect.get(), origin.get());
        }
    });
}

fn draw_selection(cr: &gtk::cairo::Context, rect: Option<Region>, origin: Point) {
    cr.set_source_rgb(0.0, 0.0, 1.0);
    cr.paint().expect("Invalid cairo surface state");

    if let Some(rect) = rect {
        let local = rect.offset(-origin.x, -origin.y);
        let rx = local.x1() as f64;
        let ry = local.y1() as f64;
        let rw = local.width() as f64;
        let rh = local.height() as f64;

        cr.set_source_rgba(1.0, 1.0, 1.0, 0.5);
        cr.rectangle(rx, ry, rw, rh);
        cr.fill().expect("Failed to fill selection");

        cr.set_source_rgb(1.0, 0.0, 0.0);
        cr.set_line_width(2.0);
        cr.rectangle(rx, ry, rw, rh);
        cr.stroke().expect("Failed to stroke selection border");
    }
}

impl GtkSelectionSurface {
    /// Convert drawing-area coordinates into screen coordinates
    pub fn to_screen(&self, x: f64, y: f64) -> Point {
        let origin = self.origin.get();
        Point::new(origin.x + x.round() as i32, origin.y + y.round() as i32)
    }

    fn target_monitor(&self) -> Option<gdk::Monitor> {
        let display = gdk::Display::default()?;
        display
            .monitors()
            .item(0)
            .and_then(|item| item.downcast::<gdk::Monitor>().ok())
    }
}

impl SelectionSurface for GtkSelectionSurface {
    fn show(&mut self) {
        match self.target_monitor() {
            Some(monitor) => {
                let geometry = monitor.geometry();
                self.origin.set(Point::new(geometry.x(), geometry.y()));
                debug!(
                    "Selection surface on monitor at ({}, {}) {}x{}",
                    geometry.x(),
                    geometry.y(),
                    geometry.width(),
                    geometry.height()
                );
                self.window.fullscreen_on_monitor(&monitor);
            }
            None => {
                warn!("No monitor found, falling back to plain fullscreen");
                self.origin.set(Point::default());
                self.window.fullscreen();
            }
        }
        self.window.present();
    }

    fn hide(&mut self) {
        self.window.set_visible(false);
    }

    fn draw_selection(&mut self, rect: Option<Region>) {
        self.rect.set(rect);
        self.drawing_area.queue_draw();
    }
}
