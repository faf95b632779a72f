use adw::prelude::*;
use gtk4 as gtk;
use libadwaita as adw;

use crate::app::{Action, Keymap};

pub fn show_shortcuts_dialog(keymap: &Keymap, parent: &impl IsA<gtk::Window>) {
    let window = adw::PreferencesWindow::builder()
        .transient_for(parent)
        .modal(true)
        .title("Keyboard Shortcuts")
        .default_width(420)
        .default_height(480)
        .search_enabled(false)
        .build();

    let page = adw::PreferencesPage::new();
    window.add(&page);

    let group_translate = adw::PreferencesGroup::builder().title("Translate").build();
    for action in [Action::SelectRegion, Action::Translate, Action::Cancel] {
        add_action_row(keymap, &group_translate, action);
    }
    page.add(&group_translate);

    let group_result = adw::PreferencesGroup::builder().title("Result").build();
    for action in [
        Action::ShowOverlay,
        Action::CloseOverlay,
        Action::CopyTranslation,
    ] {
        add_action_row(keymap, &group_result, action);
    }
    page.add(&group_result);

    let group_general = adw::PreferencesGroup::builder().title("General").build();
    add_action_row(keymap, &group_general, Action::Quit);
    page.add(&group_general);

    window.present();
}

fn add_action_row(keymap: &Keymap, group: &adw::PreferencesGroup, action: Action) {
    let shortcut_label = keymap.get_shortcut_label(action);

    let row = adw::ActionRow::builder().title(action.label()).build();

    let accel = gtk::Label::builder()
        .label(&shortcut_label)
        .valign(gtk::Align::Center)
        .build();
    accel.add_css_class("dim-label");

    if shortcut_label.is_empty() {
        accel.set_label("Disabled");
    }

    row.add_suffix(&accel);
    group.add(&row);
}
