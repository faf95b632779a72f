use gtk4 as gtk;

use gtk4::prelude::*;

use crate::ui::status::StatusView;

/// The result text area and the status bar
#[derive(Clone)]
pub struct ResultView {
    pub frame: gtk::Frame,
    pub text_view: gtk::TextView,
    pub status_label: gtk::Label,
}

pub fn create_result_view() -> ResultView {
    let text_view = gtk::TextView::builder()
        .editable(false)
        .cursor_visible(false)
        .wrap_mode(gtk::WrapMode::Word)
        .top_margin(6)
        .bottom_margin(6)
        .left_margin(6)
        .right_margin(6)
        .build();

    let scrolled = gtk::ScrolledWindow::builder()
        .child(&text_view)
        .hexpand(true)
        .vexpand(true)
        .build();

    let frame = gtk::Frame::builder()
        .label("Translation Result")
        .child(&scrolled)
        .margin_top(12)
        .margin_bottom(6)
        .margin_start(12)
        .margin_end(12)
        .build();

    let status_label = gtk::Label::builder()
        .halign(gtk::Align::Start)
        .ellipsize(gtk::pango::EllipsizeMode::End)
        .margin_start(12)
        .margin_end(12)
        .margin_bottom(6)
        .build();
    status_label.add_css_class("dim-label");

    ResultView {
        frame,
        text_view,
        status_label,
    }
}

impl ResultView {
    pub fn show(&self, view: &StatusView) {
        if let Some(body) = &view.body {
            self.text_view.buffer().set_text(body);
        }
        self.status_label.set_text(&view.status);
    }
}
