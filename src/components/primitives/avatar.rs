//! Avatar Component
//!
//! Circular avatar. Renders the image when the record carries one and
//! falls back to the initials disc when it does not.

use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, SharedUri, Styled, Window, div, img,
    prelude::*, px,
};

use crate::theme::colors::MdtColors;

/// A round avatar with an initials fallback
#[derive(IntoElement)]
pub struct Avatar {
    initials: SharedString,
    image: Option<SharedString>,
    size: f32,
}

impl Avatar {
    pub fn new(initials: impl Into<SharedString>) -> Self {
        Self {
            initials: initials.into(),
            image: None,
            size: 38.0,
        }
    }

    /// Image URI to show instead of the initials; `None` keeps the fallback
    pub fn image(mut self, uri: Option<impl Into<SharedString>>) -> Self {
        self.image = uri.map(Into::into);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let size = px(self.size);
        match self.image {
            Some(uri) => img(SharedUri::from(uri))
                .size(size)
                .rounded_full()
                .bg(MdtColors::surface())
                .into_any_element(),
            None => div()
                .size(size)
                .rounded_full()
                .bg(MdtColors::accent())
                .flex()
                .items_center()
                .justify_center()
                .text_color(MdtColors::text_primary())
                .text_size(px(self.size * 0.38))
                .font_weight(gpui::FontWeight::MEDIUM)
                .child(self.initials)
                .into_any_element(),
        }
    }
}
