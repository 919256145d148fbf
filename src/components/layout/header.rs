//! Application Header
//!
//! Top bar with the app title, the signed-in character badge and the
//! locale toggle.

use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::components::primitives::avatar::Avatar;
use crate::theme::colors::MdtColors;

type ToggleLocaleHandler = Box<dyn Fn(&mut App) + 'static>;

/// Top application bar
#[derive(IntoElement)]
pub struct Header {
    title: SharedString,
    character_name: SharedString,
    character_detail: SharedString,
    locale_label: SharedString,
    on_toggle_locale: Option<ToggleLocaleHandler>,
}

impl Header {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            character_name: SharedString::default(),
            character_detail: SharedString::default(),
            locale_label: SharedString::default(),
            on_toggle_locale: None,
        }
    }

    pub fn character(
        mut self,
        name: impl Into<SharedString>,
        detail: impl Into<SharedString>,
    ) -> Self {
        self.character_name = name.into();
        self.character_detail = detail.into();
        self
    }

    pub fn locale(
        mut self,
        label: impl Into<SharedString>,
        on_toggle: impl Fn(&mut App) + 'static,
    ) -> Self {
        self.locale_label = label.into();
        self.on_toggle_locale = Some(Box::new(on_toggle));
        self
    }
}

impl RenderOnce for Header {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .h(px(56.0))
            .px_6()
            .bg(MdtColors::surface())
            .border_b_1()
            .border_color(MdtColors::border())
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(28.0))
                            .rounded_md()
                            .bg(MdtColors::accent())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_size(px(13.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(MdtColors::text_primary())
                            .child("M"),
                    )
                    .child(
                        div()
                            .text_size(px(16.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(MdtColors::text_primary())
                            .child(self.title),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .when_some(self.on_toggle_locale, |el, handler| {
                        el.child(
                            div()
                                .id("locale-toggle")
                                .px_3()
                                .py_1()
                                .rounded_md()
                                .text_sm()
                                .text_color(MdtColors::text_secondary())
                                .cursor_pointer()
                                .hover(|s| s.bg(MdtColors::control_hover()))
                                .on_click(move |_event: &ClickEvent, _window, cx| handler(cx))
                                .child(self.locale_label),
                        )
                    })
                    .when(!self.character_name.is_empty(), |el| {
                        let initials: String = self
                            .character_name
                            .split_whitespace()
                            .take(2)
                            .filter_map(|word| word.chars().next())
                            .collect();
                        el.child(
                            div()
                                .flex()
                                .items_center()
                                .gap_2()
                                .child(Avatar::new(initials).size(30.0))
                                .child(
                                    div()
                                        .flex()
                                        .flex_col()
                                        .child(
                                            div()
                                                .text_sm()
                                                .text_color(MdtColors::text_primary())
                                                .child(self.character_name),
                                        )
                                        .child(
                                            div()
                                                .text_size(px(11.0))
                                                .text_color(MdtColors::text_muted())
                                                .child(self.character_detail),
                                        ),
                                ),
                        )
                    }),
            )
    }
}
