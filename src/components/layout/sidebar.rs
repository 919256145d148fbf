//! Sidebar Navigation
//!
//! Vertical list of navigation entries. Items are plain data so the
//! sidebar does not know which pages exist.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, Div, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Stateful, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::MdtColors;

type SelectHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// One sidebar navigation entry
pub struct SidebarItem {
    id: SharedString,
    icon: SharedString,
    label: SharedString,
    active: bool,
    on_select: Option<SelectHandler>,
}

impl SidebarItem {
    pub fn new(
        id: impl Into<SharedString>,
        icon: impl Into<SharedString>,
        label: impl Into<SharedString>,
    ) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            label: label.into(),
            active: false,
            on_select: None,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn on_select(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

/// Left navigation rail
#[derive(IntoElement)]
pub struct Sidebar {
    items: Vec<SidebarItem>,
}

impl Sidebar {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn item(mut self, item: SidebarItem) -> Self {
        self.items.push(item);
        self
    }

    fn render_item(item: SidebarItem) -> Stateful<Div> {
        let (bg, text_color) = if item.active {
            (MdtColors::card_bg(), MdtColors::text_primary())
        } else {
            (gpui::rgba(0x00000000), MdtColors::text_secondary())
        };

        let mut element = div()
            .id(ElementId::Name(item.id))
            .px_3()
            .py_2()
            .rounded_md()
            .flex()
            .items_center()
            .gap_3()
            .bg(bg)
            .text_color(text_color)
            .text_sm()
            .child(div().text_size(px(15.0)).child(item.icon))
            .child(item.label);

        if !item.active {
            element = element
                .cursor_pointer()
                .hover(|s| s.bg(MdtColors::control_hover()));

            if let Some(handler) = item.on_select {
                element = element.on_click(move |_event: &ClickEvent, window, cx| {
                    handler(window, cx);
                });
            }
        }

        element
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Sidebar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w(px(200.0))
            .h_full()
            .bg(MdtColors::sidebar_bg())
            .border_r_1()
            .border_color(MdtColors::border())
            .flex()
            .flex_col()
            .gap_1()
            .p_3()
            .children(self.items.into_iter().map(Self::render_item))
    }
}
