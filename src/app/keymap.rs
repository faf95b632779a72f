use gtk::gdk;
use gtk4 as gtk;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SelectRegion,
    Translate,
    ShowOverlay,
    CloseOverlay,
    CopyTranslation,
    Cancel,
    Quit,
}

impl Action {
    pub fn label(&self) -> &str {
        match self {
            Action::SelectRegion => "Select Region",
            Action::Translate => "Translate Region",
            Action::ShowOverlay => "Show Overlay",
            Action::CloseOverlay => "Close Overlay",
            Action::CopyTranslation => "Copy Translation",
            Action::Cancel => "Cancel Selection",
            Action::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: gdk::Key,
    pub modifiers: gdk::ModifierType,
}

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<Action, Shortcut>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |action, key, modifiers| {
            bindings.insert(action, Shortcut { key, modifiers });
        };

        bind(
            Action::SelectRegion,
            gdk::Key::r,
            gdk::ModifierType::CONTROL_MASK,
        );
        bind(
            Action::Translate,
            gdk::Key::t,
            gdk::ModifierType::CONTROL_MASK,
        );
        bind(
            Action::ShowOverlay,
            gdk::Key::o,
            gdk::ModifierType::CONTROL_MASK,
        );
        bind(
            Action::CloseOverlay,
            gdk::Key::w,
            gdk::ModifierType::CONTROL_MASK,
        );
        bind(
            Action::CopyTranslation,
            gdk::Key::C,
            gdk::ModifierType::CONTROL_MASK | gdk::ModifierType::SHIFT_MASK,
        );
        bind(Action::Cancel, gdk::Key::Escape, gdk::ModifierType::empty());
        bind(Action::Quit, gdk::Key::q, gdk::ModifierType::CONTROL_MASK);

        Self { bindings }
    }
}

impl Keymap {
    pub fn get_action(&self, key: gdk::Key, modifiers: gdk::ModifierType) -> Option<Action> {
        // Filter out irrelevant modifiers like NumLock/CapsLock/ScrollLock
        let mask = gdk::ModifierType::CONTROL_MASK
            | gdk::ModifierType::SHIFT_MASK
            | gdk::ModifierType::ALT_MASK
            | gdk::ModifierType::SUPER_MASK
            | gdk::ModifierType::META_MASK;

        let clean_mods = modifiers & mask;
        // Shift+c arrives as C on most layouts and as c on some
        let key = key.to_upper();

        self.bindings
            .iter()
            .find(|(_, shortcut)| shortcut.key.to_upper() == key && shortcut.modifiers == clean_mods)
            .map(|(action, _)| *action)
    }

    pub fn get_shortcut_label(&self, action: Action) -> String {
        if let Some(sc) = self.bindings.get(&action) {
            return gtk::accelerator_get_label(sc.key, sc.modifiers).to_string();
        }
        String::new()
    }
}
