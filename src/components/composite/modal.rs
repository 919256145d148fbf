//! Modal Components
//!
//! A general modal dialog plus a confirmation variant for destructive
//! actions. Both render as a backdrop filling the nearest relative ancestor.

use gpui::{
    AnyElement, App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::components::primitives::button::Button;
use crate::theme::colors::MdtColors;

type CloseHandler = Box<dyn Fn(&mut App) + 'static>;

/// Modal dialog with a title bar and arbitrary content
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<AnyElement>,
    footer: Vec<AnyElement>,
    on_close: Option<CloseHandler>,
}

impl Modal {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            footer: Vec::new(),
            on_close: None,
        }
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Add a footer element (rendered right-aligned)
    pub fn footer(mut self, child: impl IntoElement) -> Self {
        self.footer.push(child.into_any_element());
        self
    }

    /// Set the close handler; also enables the title-bar close button
    pub fn on_close(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_close = self.on_close;

        // Backdrop
        div()
            .absolute()
            .inset_0()
            .bg(gpui::rgba(0x000000aa))
            .flex()
            .items_center()
            .justify_center()
            .child(
                // Modal container
                div()
                    .bg(MdtColors::surface_raised())
                    .border_1()
                    .border_color(MdtColors::border())
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(420.0))
                    .max_w(px(640.0))
                    .flex()
                    .flex_col()
                    // Header
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(MdtColors::border())
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(16.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(MdtColors::text_primary())
                                    .child(self.title),
                            )
                            .when_some(on_close, |el, handler| {
                                el.child(
                                    div()
                                        .id("modal-close")
                                        .size(px(24.0))
                                        .rounded_sm()
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .text_color(MdtColors::text_muted())
                                        .text_size(px(16.0))
                                        .cursor_pointer()
                                        .hover(|s| s.bg(MdtColors::control_hover()))
                                        .on_click(move |_event: &ClickEvent, _window, cx| {
                                            handler(cx);
                                        })
                                        .child("×"),
                                )
                            }),
                    )
                    // Content
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .children(self.children),
                    )
                    // Footer
                    .when(!self.footer.is_empty(), |el| {
                        el.child(
                            div()
                                .px_6()
                                .py_4()
                                .border_t_1()
                                .border_color(MdtColors::border())
                                .flex()
                                .justify_end()
                                .gap_2()
                                .children(self.footer),
                        )
                    }),
            )
    }
}

/// Confirmation dialog for destructive actions
#[derive(IntoElement)]
pub struct ConfirmModal {
    title: SharedString,
    message: SharedString,
    confirm_label: SharedString,
    cancel_label: SharedString,
    on_confirm: Option<CloseHandler>,
    on_cancel: Option<CloseHandler>,
}

impl ConfirmModal {
    pub fn new(title: impl Into<SharedString>, message: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Confirm".into(),
            cancel_label: "Cancel".into(),
            on_confirm: None,
            on_cancel: None,
        }
    }

    pub fn labels(
        mut self,
        confirm: impl Into<SharedString>,
        cancel: impl Into<SharedString>,
    ) -> Self {
        self.confirm_label = confirm.into();
        self.cancel_label = cancel.into();
        self
    }

    pub fn on_confirm(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_confirm = Some(Box::new(handler));
        self
    }

    pub fn on_cancel(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for ConfirmModal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_cancel = self.on_cancel.map(std::rc::Rc::new);
        let on_confirm = self.on_confirm;

        let mut modal = Modal::new(self.title).child(
            div()
                .text_sm()
                .text_color(MdtColors::text_secondary())
                .child(self.message),
        );

        if let Some(handler) = on_cancel {
            // The title-bar close button behaves like cancel
            let close = handler.clone();
            modal = modal.on_close(move |cx| close(cx)).footer(
                Button::secondary("confirm-modal-cancel", self.cancel_label)
                    .on_click(move |_event, _window, cx| handler(cx)),
            );
        }

        if let Some(handler) = on_confirm {
            modal = modal.footer(
                Button::danger("confirm-modal-confirm", self.confirm_label)
                    .on_click(move |_event, _window, cx| handler(cx)),
            );
        }

        modal
    }
}
