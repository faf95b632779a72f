use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::Orientation;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{AppState, Language};

pub struct HeaderComponents {
    pub header_bar: adw::HeaderBar,
    pub select_btn: gtk::Button,
    pub translate_btn: gtk::Button,
    pub overlay_btn: gtk::Button,
    pub copy_btn: gtk::Button,
    pub shortcuts_btn: gtk::Button,
}

pub fn create_header_bar(state: &Rc<RefCell<AppState>>) -> HeaderComponents {
    let select_btn = gtk::Button::builder()
        .label("Select Region")
        .tooltip_text("Drag over the screen to pick the text to translate")
        .build();
    select_btn.add_css_class("suggested-action");

    let translate_btn = gtk::Button::builder()
        .label("Translate")
        .tooltip_text("Read and translate the selected region")
        .build();

    let action_box = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(6)
        .build();
    action_box.append(&select_btn);
    action_box.append(&translate_btn);

    let (source_lang, target_lang) = {
        let s = state.borrow();
        (s.source_language, s.target_language)
    };

    let ocr_codes: Vec<&str> = Language::ALL.iter().map(Language::ocr_code).collect();
    let translate_codes: Vec<&str> = Language::ALL
        .iter()
        .map(Language::translate_code)
        .collect();

    let source_label = gtk::Label::new(Some("Source:"));
    source_label.add_css_class("dim-label");
    let source_dropdown = gtk::DropDown::from_strings(&ocr_codes);
    source_dropdown.set_selected(source_lang.index() as u32);
    source_dropdown.set_tooltip_text(Some("Language of the text on screen"));

    let target_label = gtk::Label::new(Some("Target:"));
    target_label.add_css_class("dim-label");
    let target_dropdown = gtk::DropDown::from_strings(&translate_codes);
    target_dropdown.set_selected(target_lang.index() as u32);
    target_dropdown.set_tooltip_text(Some("Language to translate into"));

    connect_language_dropdowns(state, &source_dropdown, &target_dropdown);

    let title_box = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(6)
        .build();
    title_box.append(&source_label);
    title_box.append(&source_dropdown);
    title_box.append(&target_label);
    title_box.append(&target_dropdown);

    let overlay_btn = gtk::Button::builder()
        .icon_name("view-pin-symbolic")
        .tooltip_text("Show Overlay")
        .build();
    let copy_btn = gtk::Button::builder()
        .icon_name("edit-copy-symbolic")
        .tooltip_text("Copy Translation")
        .build();
    let shortcuts_btn = gtk::Button::builder()
        .icon_name("preferences-desktop-keyboard-shortcuts-symbolic")
        .tooltip_text("Keyboard Shortcuts")
        .build();

    let end_box = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(6)
        .build();
    end_box.append(&overlay_btn);
    end_box.append(&copy_btn);
    end_box.append(&shortcuts_btn);

    let header_bar = adw::HeaderBar::builder().title_widget(&title_box).build();
    header_bar.pack_start(&action_box);
    header_bar.pack_end(&end_box);

    HeaderComponents {
        header_bar,
        select_btn,
        translate_btn,
        overlay_btn,
        copy_btn,
        shortcuts_btn,
    }
}

fn connect_language_dropdowns(
    state: &Rc<RefCell<AppState>>,
    source_dropdown: &gtk::DropDown,
    target_dropdown: &gtk::DropDown,
) {
    source_dropdown.connect_selected_notify({
        let state = state.clone();
        move |dropdown| {
            if let Some(lang) = Language::from_index(dropdown.selected() as usize) {
                debug!("Source language set to {}", lang);
                state.borrow_mut().source_language = lang;
            }
        }
    });

    target_dropdown.connect_selected_notify({
        let state = state.clone();
        move |dropdown| {
            if let Some(lang) = Language::from_index(dropdown.selected() as usize) {
                debug!("Target language set to {}", lang);
                state.borrow_mut().target_language = lang;
            }
        }
    });
}
