use gtk::glib;
use gtk4 as gtk;
use libadwaita as adw;
use log::{debug, error, info, warn};

use gtk::{EventControllerKey, GestureDrag, PropagationPhase};
use gtk4::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::app::{Action, AppState, Keymap, Settings};
use crate::pipeline::{Pipeline, PipelineError};
use crate::selection::{RegionSelector, SelectionOutcome};
use crate::ui::clipboard::ClipboardManager;
use crate::ui::header::HeaderComponents;
use crate::ui::overlay_window::SharedOverlay;
use crate::ui::result_view::ResultView;
use crate::ui::selection_surface::GtkSelectionSurface;
use crate::ui::shortcuts::show_shortcuts_dialog;
use crate::ui::status;

pub type SharedSelector = Rc<RefCell<RegionSelector<GtkSelectionSurface>>>;

/// Everything the handlers act on
#[derive(Clone)]
pub struct Shell {
    pub state: Rc<RefCell<AppState>>,
    pub selector: SharedSelector,
    pub overlay: SharedOverlay,
    /// Missing when the translator could not be set up
    pub pipeline: Option<Rc<Pipeline>>,
    pub keymap: Rc<Keymap>,
    pub settings: Rc<Settings>,
    pub window: adw::ApplicationWindow,
    pub result: ResultView,
    /// Set while the pipeline runs
    pub busy: Rc<Cell<bool>>,
}

pub fn start_selection(shell: &Shell) {
    if shell.busy.get() {
        return;
    }
    shell.result.show(&status::selecting());
    shell.selector.borrow_mut().start();
}

pub fn finish_selection(shell: &Shell, outcome: SelectionOutcome) {
    if let SelectionOutcome::Finalized(region) = outcome {
        info!("Region selected: {}", region);
        shell.state.borrow_mut().set_region(region);
    }
    shell.result.show(&status::selection(&outcome));
}

pub fn cancel_selection(shell: &Shell) {
    if let Some(rect) = shell.selector.borrow().current_rect() {
        debug!("Discarding selection {}", rect);
    }
    let outcome = shell.selector.borrow_mut().cancel();
    if let Some(outcome) = outcome {
        finish_selection(shell, outcome);
    }
}

pub fn run_translation(shell: &Shell) {
    if shell.busy.get() {
        return;
    }
    if shell.selector.borrow().is_active() {
        debug!("Translate requested during selection");
        shell.result.show(&status::selection_in_progress());
        return;
    }
    let Some(pipeline) = shell.pipeline.clone() else {
        warn!("Translation is unavailable");
        return;
    };
    shell.busy.set(true);

    let hide_window = shell.settings.capture.hide_window && shell.state.borrow().has_region();

    shell.result.show(&status::translating());
    if hide_window {
        shell.window.set_visible(false);
    }

    // Let GTK repaint the status and unmap the window before blocking
    let context = glib::MainContext::default();
    while context.pending() {
        context.iteration(false);
    }
    if hide_window {
        std::thread::sleep(Duration::from_millis(shell.settings.capture.settle_delay_ms));
    }

    let outcome = pipeline.run(&mut shell.state.borrow_mut());

    if hide_window {
        shell.window.set_visible(true);
        shell.window.present();
    }

    match &outcome {
        Ok(result) => debug!("Translation: {:?}", result.translated_text),
        Err(e @ (PipelineError::NoRegion | PipelineError::NoTextFound)) => info!("{}", e),
        Err(e) => error!("Translation failed: {}", e),
    }

    shell.result.show(&status::translation(&outcome));
    shell.busy.set(false);
}

pub fn show_overlay(shell: &Shell) {
    let outcome = {
        let state = shell.state.borrow();
        shell.overlay.borrow_mut().show(state.last_result.as_ref())
    };
    if let Err(e) = &outcome {
        info!("Overlay not shown: {}", e);
    }
    shell.result.show(&status::overlay(&outcome));
}

pub fn close_overlay(shell: &Shell) {
    if !shell.overlay.borrow().is_open() {
        debug!("No overlay to close");
        return;
    }
    shell.overlay.borrow_mut().close();
    shell.result.show(&status::overlay_closed());
}

pub fn copy_translation(shell: &Shell) {
    let text = shell.state.borrow().translated_text().map(str::to_string);
    if let Some(text) = &text {
        ClipboardManager::from_widget(&shell.window).copy_text(text);
        info!("Translation copied to clipboard");
    }
    shell.result.show(&status::copied(text.is_some()));
}

/// Closing the main window tears down the overlay and the selection surface
pub fn quit(shell: &Shell) {
    shell.window.close();
}

pub fn dispatch(shell: &Shell, action: Action) {
    debug!("Dispatching {:?}", action);
    match action {
        Action::SelectRegion => start_selection(shell),
        Action::Translate => run_translation(shell),
        Action::ShowOverlay => show_overlay(shell),
        Action::CloseOverlay => close_overlay(shell),
        Action::CopyTranslation => copy_translation(shell),
        Action::Cancel => cancel_selection(shell),
        Action::Quit => quit(shell),
    }
}

pub fn connect_header_handlers(shell: &Shell, header: &HeaderComponents) {
    header.select_btn.connect_clicked({
        let shell = shell.clone();
        move |_| start_selection(&shell)
    });

    header.translate_btn.connect_clicked({
        let shell = shell.clone();
        move |_| run_translation(&shell)
    });

    header.overlay_btn.connect_clicked({
        let shell = shell.clone();
        move |_| show_overlay(&shell)
    });

    header.copy_btn.connect_clicked({
        let shell = shell.clone();
        move |_| copy_translation(&shell)
    });

    header.shortcuts_btn.connect_clicked({
        let shell = shell.clone();
        move |_| show_shortcuts_dialog(&shell.keymap, &shell.window)
    });
}

pub fn connect_selection_handlers(shell: &Shell, surface: &GtkSelectionSurface) {
    debug!("Connecting selection handlers");
    let drag = GestureDrag::new();

    drag.connect_drag_begin({
        let shell = shell.clone();
        let surface = surface.clone();
        move |_, x, y| {
            shell
                .selector
                .borrow_mut()
                .pointer_down(surface.to_screen(x, y));
        }
    });

    drag.connect_drag_update({
        let shell = shell.clone();
        let surface = surface.clone();
        move |gesture, offset_x, offset_y| {
            if !shell.selector.borrow().is_dragging() {
                return;
            }
            if let Some((start_x, start_y)) = gesture.start_point() {
                let point = surface.to_screen(start_x + offset_x, start_y + offset_y);
                shell.selector.borrow_mut().pointer_move(point);
            }
        }
    });

    drag.connect_drag_end({
        let shell = shell.clone();
        let surface = surface.clone();
        move |gesture, offset_x, offset_y| {
            if let Some((start_x, start_y)) = gesture.start_point() {
                let point = surface.to_screen(start_x + offset_x, start_y + offset_y);
                let outcome = shell.selector.borrow_mut().pointer_up(point);
                if let Some(outcome) = outcome {
                    finish_selection(&shell, outcome);
                }
            }
        }
    });

    surface.drawing_area.add_controller(drag);

    let keys = EventControllerKey::new();
    keys.connect_key_pressed({
        let shell = shell.clone();
        move |_, key, _, modifiers| {
            if shell.keymap.get_action(key, modifiers) == Some(Action::Cancel) {
                cancel_selection(&shell);
                return glib::Propagation::Stop;
            }
            glib::Propagation::Proceed
        }
    });
    surface.window.add_controller(keys);

    // Closing from the window manager cancels; the window is kept for reuse
    surface.window.connect_close_request({
        let shell = shell.clone();
        move |_| {
            cancel_selection(&shell);
            glib::Propagation::Stop
        }
    });
}

pub fn connect_window_handlers(shell: &Shell) {
    let keys = EventControllerKey::new();
    keys.set_propagation_phase(PropagationPhase::Capture);
    keys.connect_key_pressed({
        let shell = shell.clone();
        move |_, key, _, modifiers| match shell.keymap.get_action(key, modifiers) {
            Some(action) => {
                dispatch(&shell, action);
                glib::Propagation::Stop
            }
            None => glib::Propagation::Proceed,
        }
    });
    shell.window.add_controller(keys);

    // The overlay and the selection surface must not outlive the main window
    shell.window.connect_close_request({
        let shell = shell.clone();
        move |_| {
            shell.overlay.borrow_mut().close();
            shell.selector.borrow().surface().window.destroy();
            glib::Propagation::Proceed
        }
    });
}

pub fn connect_all_handlers(
    shell: &Shell,
    header: &HeaderComponents,
    surface: &GtkSelectionSurface,
) {
    debug!("Initializing UI handlers");
    connect_header_handlers(shell, header);
    connect_selection_handlers(shell, surface);
    connect_window_handlers(shell);
}
