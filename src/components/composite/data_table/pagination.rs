//! Pagination Component
//!
//! Page navigation strip for the DataTable: item count on the left, previous
//! / numbered / next buttons on the right. The handler receives the 1-based
//! page that was clicked.

use std::rc::Rc;

use gpui::{
    App, Div, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Stateful,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::MdtColors;

type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App)>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    items_label: SharedString,
    on_page_change: Option<PageHandler>,
}

impl Pagination {
    pub fn new(current_page: usize, total_pages: usize, total_items: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            items_label: "items".into(),
            on_page_change: None,
        }
    }

    /// Set the items label
    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    fn page_button(
        &self,
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        target: Option<usize>,
        active: bool,
    ) -> Stateful<Div> {
        let enabled = target.is_some() && !active;
        let mut button = div()
            .id(id.into())
            .min_w(px(28.0))
            .px_2()
            .py_1()
            .rounded_sm()
            .text_sm()
            .flex()
            .items_center()
            .justify_center()
            .bg(if active {
                MdtColors::accent()
            } else {
                MdtColors::card_bg()
            })
            .text_color(if target.is_some() || active {
                MdtColors::text_primary()
            } else {
                MdtColors::text_disabled()
            })
            .child(label.into());

        if enabled {
            button = button
                .cursor_pointer()
                .hover(|s| s.bg(MdtColors::control_hover()));

            if let (Some(page), Some(handler)) = (target, self.on_page_change.clone()) {
                button = button.on_click(move |_event, window, cx| handler(page, window, cx));
            }
        }

        button
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let total = self.total_pages;
        let prev = (current > 1).then(|| current - 1);
        let next = (current < total).then(|| current + 1);

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .bg(MdtColors::surface())
            .border_t_1()
            .border_color(MdtColors::border())
            // Item count
            .child(
                div()
                    .text_sm()
                    .text_color(MdtColors::text_secondary())
                    .child(format!("{} {}", self.total_items, self.items_label)),
            )
            // Page navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(self.page_button("prev-page", "←", prev, false))
                    .children((1..=total).map(|page| {
                        self.page_button(
                            SharedString::from(format!("page-{page}")),
                            page.to_string(),
                            Some(page),
                            page == current,
                        )
                    }))
                    .child(self.page_button("next-page", "→", next, false)),
            )
    }
}
