//! Dashboard Page
//!
//! Scrollable announcement feed with the delete confirmation and edit
//! modals layered over it. The feed loads through the query cache, so
//! returning to this page after an invalidation refetches.

use gpui::{
    ClickEvent, Context, Div, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*,
    px,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::{ConfirmModal, Modal};
use crate::components::primitives::button::Button;
use crate::domain::announcement::Announcement;
use crate::features::dashboard::card::AnnouncementCard;
use crate::features::dashboard::controller::DashboardController;
use crate::i18n::{Locale, t};
use crate::state::dashboard_state::DeleteFlow;
use crate::theme::colors::MdtColors;
use crate::utils::format::format_datetime;

/// Dashboard page component
pub struct DashboardPage {
    entities: AppEntities,
    controller: DashboardController,
}

impl DashboardPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = DashboardController::new(entities.clone());

        // Redraw when the feed or the locale changes
        cx.observe(&entities.dashboard, |_this, _state, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _state, cx| cx.notify())
            .detach();

        controller.load(cx);

        Self {
            entities,
            controller,
        }
    }

    fn render_error(&self, message: &str, locale: Locale, cx: &mut Context<Self>) -> Div {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .child(
                div()
                    .text_sm()
                    .text_color(MdtColors::danger())
                    .child(format!("{}: {}", t(locale, "error-fetch-failed"), message)),
            )
            .child(
                Button::secondary("dashboard-retry", t(locale, "action-retry")).on_click(
                    cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.controller.load(cx);
                    }),
                ),
            )
    }

    fn render_feed(&self, locale: Locale, cx: &mut Context<Self>) -> gpui::AnyElement {
        let state = self.entities.dashboard.read(cx);
        let session = self.entities.session.read(cx);

        if state.announcements.is_empty() && !state.loading {
            return div()
                .flex_1()
                .flex()
                .items_center()
                .justify_center()
                .text_color(MdtColors::text_muted())
                .child(t(locale, "dashboard-empty"))
                .into_any_element();
        }

        let cards: Vec<_> = state
            .announcements
            .iter()
            .map(|announcement| {
                AnnouncementCard::new(
                    announcement.clone(),
                    session
                        .permissions
                        .can_edit_announcement(&session.character, announcement),
                    session
                        .permissions
                        .can_delete_announcement(&session.character, announcement),
                    state.open_menu == Some(announcement.id),
                    locale,
                    self.controller.clone(),
                )
            })
            .collect();

        div()
            .id("announcement-feed")
            .flex_1()
            .min_h(px(0.0))
            .overflow_y_scroll()
            .flex()
            .flex_col()
            .gap_3()
            .children(cards)
            .into_any_element()
    }

    fn render_edit_modal(&self, editing: &Announcement, locale: Locale, cx: &mut Context<Self>) -> Modal {
        let announcement = editing.clone();
        let save = cx.listener(move |this: &mut Self, _event: &ClickEvent, _window, cx| {
            this.controller.save(announcement.clone(), cx);
        });
        let close = {
            let controller = self.controller.clone();
            move |cx: &mut gpui::App| controller.close_editor(cx)
        };

        Modal::new(t(locale, "modal-edit-title"))
            .on_close(close.clone())
            .child(
                div()
                    .text_size(px(11.0))
                    .text_color(MdtColors::text_muted())
                    .child(format!(
                        "{} · {}",
                        editing.author_line(),
                        format_datetime(&editing.created_at)
                    )),
            )
            .child(
                div()
                    .p_3()
                    .bg(MdtColors::surface())
                    .border_1()
                    .border_color(MdtColors::border())
                    .rounded_md()
                    .text_sm()
                    .text_color(MdtColors::text_secondary())
                    .child(editing.contents.plain_text()),
            )
            .footer(
                Button::secondary("edit-cancel", t(locale, "action-cancel"))
                    .on_click(move |_event, _window, cx| close(cx)),
            )
            .footer(Button::primary("edit-save", t(locale, "action-save")).on_click(save))
    }
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (error, loading, delete_flow, editing) = {
            let state = self.entities.dashboard.read(cx);
            (
                state.error.clone(),
                state.loading,
                state.delete_flow,
                state.editing.clone(),
            )
        };

        let mut page = div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            // Header
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(MdtColors::text_primary())
                            .child(t(locale, "dashboard-announcements")),
                    )
                    .child(
                        Button::ghost("dashboard-refresh", t(locale, "action-refresh")).on_click(
                            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.refresh(cx);
                            }),
                        ),
                    ),
            );

        page = match error {
            Some(message) => page.child(self.render_error(&message, locale, cx)),
            None => page.child(self.render_feed(locale, cx)),
        };

        if loading {
            page = page.child(
                div()
                    .absolute()
                    .inset_0()
                    .bg(gpui::rgba(0x1d1b26aa))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(MdtColors::text_secondary())
                    .child(t(locale, "table-loading")),
            );
        }

        // Delete confirmation overlay
        if matches!(delete_flow, DeleteFlow::ConfirmPending { .. }) {
            let cancel = {
                let controller = self.controller.clone();
                move |cx: &mut gpui::App| controller.cancel_delete(cx)
            };
            let confirm = {
                let controller = self.controller.clone();
                move |cx: &mut gpui::App| controller.confirm_delete(cx)
            };
            page = page.child(
                ConfirmModal::new(t(locale, "modal-delete-title"), t(locale, "modal-delete-body"))
                    .labels(t(locale, "action-confirm"), t(locale, "action-cancel"))
                    .on_cancel(cancel)
                    .on_confirm(confirm),
            );
        }

        // Edit overlay
        if let Some(editing) = editing {
            page = page.child(self.render_edit_modal(&editing, locale, cx));
        }

        page
    }
}
