//! Action Menu Component
//!
//! A "⋯" trigger button with a dropdown of actions. The dropdown is
//! positioned below the trigger, so the host container must be `relative()`.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, Div, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Stateful, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::MdtColors;

type SelectHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;
type ToggleHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// A single entry in an [`ActionMenu`]
pub struct MenuItem {
    id: SharedString,
    label: SharedString,
    danger: bool,
    disabled: bool,
    on_select: Option<SelectHandler>,
}

impl MenuItem {
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            danger: false,
            disabled: false,
            on_select: None,
        }
    }

    /// Render the label in the danger color
    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_select(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

/// Trigger button plus dropdown menu
#[derive(IntoElement)]
pub struct ActionMenu {
    id: ElementId,
    open: bool,
    disabled: bool,
    items: Vec<MenuItem>,
    on_toggle: Option<ToggleHandler>,
}

impl ActionMenu {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            open: false,
            disabled: false,
            items: Vec::new(),
            on_toggle: None,
        }
    }

    /// Whether the dropdown is currently showing
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Disables the trigger entirely (no dropdown, no hover)
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn on_toggle(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(handler));
        self
    }

    fn render_item(item: MenuItem, on_toggle: Option<ToggleHandler>) -> Stateful<Div> {
        let text_color = if item.disabled {
            MdtColors::text_disabled()
        } else if item.danger {
            MdtColors::danger()
        } else {
            MdtColors::text_primary()
        };

        let mut element = div()
            .id(ElementId::Name(item.id))
            .px_3()
            .py_2()
            .text_sm()
            .text_color(text_color)
            .child(item.label);

        if !item.disabled {
            element = element
                .cursor_pointer()
                .hover(|s| s.bg(MdtColors::control_hover()));

            if let Some(handler) = item.on_select {
                element = element.on_click(move |_event: &ClickEvent, window, cx| {
                    // Close the menu before running the action
                    if let Some(toggle) = &on_toggle {
                        toggle(window, cx);
                    }
                    handler(window, cx);
                });
            }
        }

        element
    }
}

impl RenderOnce for ActionMenu {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_toggle = self.on_toggle;

        let mut trigger = div()
            .id(self.id)
            .size(px(28.0))
            .rounded_md()
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(16.0))
            .text_color(if self.disabled {
                MdtColors::text_disabled()
            } else {
                MdtColors::text_secondary()
            })
            .child("⋯");

        if !self.disabled {
            trigger = trigger
                .cursor_pointer()
                .hover(|s| s.bg(MdtColors::control_hover()));

            if let Some(handler) = on_toggle.clone() {
                trigger = trigger.on_click(move |_event: &ClickEvent, window, cx| {
                    handler(window, cx);
                });
            }
        }

        div()
            .relative()
            .child(trigger)
            .when(self.open && !self.disabled, |el| {
                el.child(
                    div()
                        .absolute()
                        .top(px(32.0))
                        .right_0()
                        .min_w(px(140.0))
                        .bg(MdtColors::surface_raised())
                        .border_1()
                        .border_color(MdtColors::border())
                        .rounded_md()
                        .shadow_lg()
                        .flex()
                        .flex_col()
                        .py_1()
                        .children(
                            self.items
                                .into_iter()
                                .map(|item| Self::render_item(item, on_toggle.clone())),
                        ),
                )
            })
    }
}
