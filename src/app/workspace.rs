//! Workspace - Main Shell
//!
//! The workspace holds the header, sidebar and the active page. Pages are
//! created lazily and cached so their state survives switching away.

use gpui::{
    AnyElement, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::*,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::header::Header;
use crate::components::layout::sidebar::{Sidebar, SidebarItem};
use crate::features::dashboard::page::DashboardPage;
use crate::features::roster::page::RosterPage;
use crate::i18n::t;
use crate::theme::colors::MdtColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    dashboard_page: Option<Entity<DashboardPage>>,
    roster_page: Option<Entity<RosterPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.nav, |_this, _nav, cx| cx.notify()).detach();
        cx.observe(&entities.i18n, |_this, _i18n, cx| cx.notify())
            .detach();
        cx.observe(&entities.session, |_this, _session, cx| cx.notify())
            .detach();

        Self {
            entities,
            dashboard_page: None,
            roster_page: None,
        }
    }

    /// Get or create the view for the active page
    fn get_or_create_page(&mut self, page: ActivePage, cx: &mut Context<Self>) -> AnyElement {
        match page {
            ActivePage::Dashboard => {
                let page = self.dashboard_page.get_or_insert_with(|| {
                    cx.new(|cx| DashboardPage::new(self.entities.clone(), cx))
                });
                page.clone().into_any_element()
            }
            ActivePage::Roster => {
                let page = self
                    .roster_page
                    .get_or_insert_with(|| cx.new(|cx| RosterPage::new(self.entities.clone(), cx)));
                page.clone().into_any_element()
            }
        }
    }

    fn render_sidebar(&self, active: ActivePage, cx: &mut Context<Self>) -> Sidebar {
        let locale = self.entities.i18n.read(cx).locale;
        let mut sidebar = Sidebar::new();

        for page in ActivePage::all() {
            let nav = self.entities.nav.clone();
            sidebar = sidebar.item(
                SidebarItem::new(page.id(), page.icon(), t(locale, page.title_key()))
                    .active(page == active)
                    .on_select(move |_window, cx| {
                        nav.update(cx, |state, cx| {
                            state.set_active_page(page);
                            cx.notify();
                        });
                    }),
            );
        }

        sidebar
    }

    fn render_header(&self, cx: &mut Context<Self>) -> Header {
        let locale = self.entities.i18n.read(cx).locale;
        let session = self.entities.session.read(cx);
        let i18n = self.entities.i18n.clone();

        Header::new(t(locale, "app-title"))
            .character(session.character.full_name(), session.character.state_id.clone())
            .locale(locale.display_name(), move |cx| {
                i18n.update(cx, |state, cx| {
                    state.toggle_locale();
                    cx.notify();
                });
            })
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active_page;
        let header = self.render_header(cx);
        let sidebar = self.render_sidebar(active_page, cx);
        let content = self.get_or_create_page(active_page, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(MdtColors::background())
            .text_color(MdtColors::text_primary())
            .child(header)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(sidebar)
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .child(content),
                    ),
            )
    }
}
