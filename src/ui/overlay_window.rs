use gtk4 as gtk;

use gtk::{gdk, glib, GestureClick};
use gtk4::prelude::*;
use log::debug;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::app::Settings;
use crate::overlay::{OverlayController, OverlaySurface};
use crate::ui::result_view::ResultView;
use crate::ui::status;

const OVERLAY_CSS: &str = "
window.translation-overlay {
    background-color: black;
}
window.translation-overlay label.overlay-text {
    color: white;
    font-size: 12pt;
}
window.translation-overlay button.overlay-close {
    background: #c01c28;
    color: white;
    font-weight: bold;
    min-width: 24px;
    min-height: 24px;
    padding: 0;
}
";

pub type SharedOverlay = Rc<RefCell<OverlayController<GtkOverlayWindow>>>;

/// Undecorated, translucent window showing the latest translation
pub struct GtkOverlayWindow {
    window: gtk::Window,
    label: gtk::Label,
}

impl GtkOverlayWindow {
    fn new(
        app: &gtk::Application,
        settings: &Settings,
        text: &str,
        on_closed: impl Fn() + 'static,
    ) -> Self {
        let label = gtk::Label::builder()
            .label(text)
            .wrap(true)
            .wrap_mode(gtk::pango::WrapMode::WordChar)
            .justify(gtk::Justification::Left)
            .halign(gtk::Align::Start)
            .valign(gtk::Align::Start)
            .xalign(0.0)
            .margin_top(10)
            .margin_bottom(10)
            .margin_start(10)
            .margin_end(10)
            .build();
        label.add_css_class("overlay-text");

        let close_btn = gtk::Button::builder()
            .label("×")
            .halign(gtk::Align::End)
            .valign(gtk::Align::Start)
            .tooltip_text("Close")
            .build();
        close_btn.add_css_class("overlay-close");

        let overlay = gtk::Overlay::builder().child(&label).build();
        overlay.add_overlay(&close_btn);

        let window = gtk::Window::builder()
            .application(app)
            .title("Translation")
            .decorated(false)
            .default_width(settings.appearance.overlay_width)
            .default_height(settings.appearance.overlay_height)
            .child(&overlay)
            .build();
        window.add_css_class("translation-overlay");
        window.set_opacity(settings.appearance.overlay_opacity);

        connect_move_gesture(&window, &overlay);

        close_btn.connect_clicked({
            let window = window.clone();
            move |_| window.close()
        });

        window.connect_close_request(move |_| {
            on_closed();
            glib::Propagation::Proceed
        });

        Self { window, label }
    }
}

impl OverlaySurface for GtkOverlayWindow {
    fn set_text(&mut self, text: &str) {
        self.label.set_text(text);
    }

    fn present(&mut self) {
        self.window.present();
    }

    fn close(&mut self) {
        self.window.destroy();
    }
}

/// Pressing anywhere outside the close button hands the move to the
/// compositor, which keeps the grabbed point under the cursor.
fn connect_move_gesture(window: &gtk::Window, target: &impl IsA<gtk::Widget>) {
    let press = GestureClick::new();
    press.set_button(gdk::BUTTON_PRIMARY);

    press.connect_pressed({
        let window = window.clone();
        move |gesture, _, x, y| {
            let Some(device) = gesture.current_event_device() else {
                return;
            };
            let Some(toplevel) = window
                .surface()
                .and_then(|surface| surface.dynamic_cast::<gdk::Toplevel>().ok())
            else {
                return;
            };

            debug!("Starting overlay move at ({}, {})", x, y);
            toplevel.begin_move(
                &device,
                gesture.current_button() as i32,
                x,
                y,
                gesture.current_event_time(),
            );
        }
    });

    target.add_controller(press);
}

fn install_css() {
    let Some(display) = gdk::Display::default() else {
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_string(OVERLAY_CSS);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

/// Build the overlay controller. Windows it creates report back when the
/// user or the window manager closes them.
pub fn create_overlay_controller(
    app: &impl IsA<gtk::Application>,
    settings: &Rc<Settings>,
    result_view: &ResultView,
) -> SharedOverlay {
    install_css();

    let app = app.clone().upcast::<gtk::Application>();
    let settings = settings.clone();
    let result_view = result_view.clone();

    Rc::new_cyclic(|controller: &Weak<RefCell<OverlayController<GtkOverlayWindow>>>| {
        let controller = controller.clone();
        RefCell::new(OverlayController::new(Box::new(move |text: &str| {
            let controller = controller.clone();
            let result_view = result_view.clone();
            GtkOverlayWindow::new(&app, &settings, text, move || {
                // Closing through the controller destroys the window without
                // a close request, so the borrow only fails on re-entry.
                if let Some(controller) = controller.upgrade() {
                    if let Ok(mut controller) = controller.try_borrow_mut() {
                        controller.forget();
                    }
                }
                result_view.show(&status::overlay_closed());
            })
        })))
    })
}
