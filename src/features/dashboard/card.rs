//! Announcement Card
//!
//! One feed entry: author header, rendered document contents and the actions
//! menu. The menu trigger stays disabled unless the signed-in character is
//! allowed at least one action on this announcement; a disabled control
//! never issues a remote call.

use gpui::{
    App, Div, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*, px,
};

use crate::components::composite::action_menu::{ActionMenu, MenuItem};
use crate::components::primitives::avatar::Avatar;
use crate::domain::announcement::Announcement;
use crate::domain::document::Block;
use crate::features::dashboard::controller::DashboardController;
use crate::i18n::{Locale, t};
use crate::theme::colors::MdtColors;
use crate::theme::typography::Typography;
use crate::utils::format::format_relative;

/// A single announcement in the feed
#[derive(IntoElement)]
pub struct AnnouncementCard {
    announcement: Announcement,
    can_edit: bool,
    can_delete: bool,
    menu_open: bool,
    locale: Locale,
    controller: DashboardController,
}

impl AnnouncementCard {
    pub fn new(
        announcement: Announcement,
        can_edit: bool,
        can_delete: bool,
        menu_open: bool,
        locale: Locale,
        controller: DashboardController,
    ) -> Self {
        Self {
            announcement,
            can_edit,
            can_delete,
            menu_open,
            locale,
            controller,
        }
    }

    fn render_block(block: &Block) -> Div {
        match block {
            Block::Heading { text, level } => {
                let size = match *level {
                    1 => Typography::TEXT_LG,
                    2 => Typography::TEXT_BASE,
                    _ => Typography::TEXT_SM,
                };
                div()
                    .text_size(px(size))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(MdtColors::text_primary())
                    .child(text.clone())
            }
            Block::Paragraph { text } => div()
                .text_sm()
                .text_color(MdtColors::text_secondary())
                .child(text.clone()),
        }
    }

    fn render_menu(&self) -> ActionMenu {
        let id = self.announcement.id;
        let locale = self.locale;

        let mut menu = ActionMenu::new(("announcement-menu", id as usize))
            .open(self.menu_open)
            .disabled(!self.can_edit && !self.can_delete)
            .on_toggle({
                let controller = self.controller.clone();
                move |_window, cx| controller.toggle_menu(id, cx)
            });

        if self.can_edit {
            let controller = self.controller.clone();
            let announcement = self.announcement.clone();
            menu = menu.item(
                MenuItem::new("menu-edit", t(locale, "action-edit")).on_select(move |_window, cx| {
                    controller.open_editor(announcement.clone(), cx);
                }),
            );
        }

        if self.can_delete {
            let controller = self.controller.clone();
            menu = menu.item(
                MenuItem::new("menu-delete", t(locale, "action-delete"))
                    .danger()
                    .on_select(move |_window, cx| {
                        controller.request_delete(id, cx);
                    }),
            );
        }

        menu
    }
}

impl RenderOnce for AnnouncementCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let menu = self.render_menu();

        div()
            .w_full()
            .bg(MdtColors::card_bg())
            .border_1()
            .border_color(MdtColors::border())
            .rounded_lg()
            .p_4()
            .flex()
            .flex_col()
            .gap_3()
            // Author header
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_3()
                            .child(Avatar::new(self.announcement.author_initials()).size(34.0))
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .child(
                                        div()
                                            .text_sm()
                                            .font_weight(gpui::FontWeight::MEDIUM)
                                            .text_color(MdtColors::text_primary())
                                            .child(self.announcement.author_line()),
                                    )
                                    .child(
                                        div()
                                            .text_size(px(11.0))
                                            .text_color(MdtColors::text_muted())
                                            .child(format_relative(&self.announcement.created_at)),
                                    ),
                            ),
                    )
                    .child(menu),
            )
            // Contents
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .children(self.announcement.contents.blocks.iter().map(Self::render_block)),
            )
    }
}
