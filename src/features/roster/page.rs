//! Roster Page
//!
//! Paginated officer roster. The table keeps its rows visible during page
//! fetches, the pagination footer moves optimistically, and a failed fetch
//! swaps the table for an error banner with a retry button. Each row ends
//! in an actions menu that opens the officer's details overlay.

use gpui::{
    App, ClickEvent, Context, Div, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::components::composite::action_menu::{ActionMenu, MenuItem};
use crate::components::composite::data_table::column::Column;
use crate::components::composite::data_table::data_table::DataTable;
use crate::components::composite::data_table::pagination::Pagination;
use crate::components::composite::modal::Modal;
use crate::components::primitives::avatar::Avatar;
use crate::components::primitives::button::Button;
use crate::domain::officer::RosterOfficer;
use crate::features::roster::controller::RosterController;
use crate::i18n::{Locale, t};
use crate::theme::colors::MdtColors;

/// Roster page component
pub struct RosterPage {
    entities: AppEntities,
    controller: RosterController,
    table: Entity<DataTable<RosterOfficer>>,
}

impl RosterPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = RosterController::new(entities.clone());

        let locale = entities.i18n.read(cx).locale;
        let table = cx.new(|cx| {
            let mut table = DataTable::new(cx, |row: &RosterOfficer| row.state_id.clone().into());
            table.set_columns(Self::create_columns(locale, None, controller.clone()));
            table.set_empty_message(t(locale, "table-no-records"));
            table.set_loading_message(t(locale, "table-loading"));
            table
        });

        // Mirror roster state into the table. Columns are rebuilt too, the
        // actions column renders against the currently open menu.
        let table_clone = table.clone();
        let observed = entities.clone();
        let observed_controller = controller.clone();
        cx.observe(&entities.roster, move |_this, roster, cx| {
            let locale = observed.i18n.read(cx).locale;
            let (rows, loading, open_menu) = {
                let state = roster.read(cx);
                (state.officers.clone(), state.loading, state.open_menu.clone())
            };
            let columns = Self::create_columns(locale, open_menu, observed_controller.clone());
            table_clone.update(cx, |table, cx| {
                table.set_columns(columns);
                table.set_rows(rows);
                table.set_loading(loading);
                cx.notify();
            });
            // The pagination strip and error banner read this state too
            cx.notify();
        })
        .detach();

        // Re-label columns when the locale changes
        let table_clone = table.clone();
        let observed = entities.clone();
        let observed_controller = controller.clone();
        cx.observe(&entities.i18n, move |_this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            let open_menu = observed.roster.read(cx).open_menu.clone();
            table_clone.update(cx, |table, cx| {
                table.set_columns(Self::create_columns(
                    locale,
                    open_menu,
                    observed_controller.clone(),
                ));
                table.set_empty_message(t(locale, "table-no-records"));
                table.set_loading_message(t(locale, "table-loading"));
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        controller.load_initial(cx);

        Self {
            entities,
            controller,
            table,
        }
    }

    fn create_columns(
        locale: Locale,
        open_menu: Option<String>,
        controller: RosterController,
    ) -> Vec<Column<RosterOfficer>> {
        vec![
            Column::new("name", t(locale, "col-name"), |row: &RosterOfficer| {
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        Avatar::new(row.initials())
                            .image(row.image.clone())
                            .size(30.0),
                    )
                    .child(div().text_sm().child(row.full_name()))
                    .into_any_element()
            }),
            Column::new(
                "call-sign",
                t(locale, "col-call-sign"),
                |row: &RosterOfficer| {
                    div()
                        .text_sm()
                        .text_color(MdtColors::text_secondary())
                        .child(row.call_sign_label())
                        .into_any_element()
                },
            )
            .fixed_width(110.0),
            Column::new(
                "state-id",
                t(locale, "col-state-id"),
                |row: &RosterOfficer| {
                    div()
                        .text_sm()
                        .text_color(MdtColors::text_secondary())
                        .child(row.state_id.clone())
                        .into_any_element()
                },
            )
            .fixed_width(120.0),
            Column::new("rank", t(locale, "col-rank"), |row: &RosterOfficer| {
                div().text_sm().child(row.title.clone()).into_any_element()
            }),
            Column::new("actions", "", move |row: &RosterOfficer| {
                let open = open_menu.as_deref() == Some(row.state_id.as_str());
                let toggle = {
                    let controller = controller.clone();
                    let state_id = row.state_id.clone();
                    move |_window: &mut Window, cx: &mut App| {
                        controller.toggle_menu(state_id.clone(), cx);
                    }
                };
                let view_details = {
                    let controller = controller.clone();
                    let officer = row.clone();
                    move |_window: &mut Window, cx: &mut App| {
                        controller.open_details(officer.clone(), cx);
                    }
                };
                div()
                    .flex()
                    .justify_end()
                    .child(
                        ActionMenu::new(SharedString::from(format!(
                            "roster-menu-{}",
                            row.state_id
                        )))
                        .open(open)
                        .on_toggle(toggle)
                        .item(
                            MenuItem::new("view-details", t(locale, "roster-view-details"))
                                .on_select(view_details),
                        ),
                    )
                    .into_any_element()
            })
            .fixed_width(56.0),
        ]
    }

    fn render_error(&self, message: &str, locale: Locale, cx: &mut Context<Self>) -> Div {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .bg(MdtColors::surface())
            .border_1()
            .border_color(MdtColors::border())
            .rounded_md()
            .child(
                div()
                    .text_sm()
                    .text_color(MdtColors::danger())
                    .child(format!("{}: {}", t(locale, "error-fetch-failed"), message)),
            )
            .child(
                Button::secondary("roster-retry", t(locale, "action-retry")).on_click(cx.listener(
                    |this, _event: &ClickEvent, _window, cx| {
                        this.controller.retry(cx);
                    },
                )),
            )
    }

    fn detail_row(label: SharedString, value: String) -> Div {
        div()
            .flex()
            .justify_between()
            .text_sm()
            .child(div().text_color(MdtColors::text_muted()).child(label))
            .child(div().text_color(MdtColors::text_secondary()).child(value))
    }

    fn render_details_modal(&self, officer: &RosterOfficer, locale: Locale) -> Modal {
        let close = {
            let controller = self.controller.clone();
            move |cx: &mut App| controller.close_details(cx)
        };

        Modal::new(t(locale, "roster-details-title"))
            .on_close(close)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        Avatar::new(officer.initials())
                            .image(officer.image.clone())
                            .size(44.0),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .text_color(MdtColors::text_primary())
                                    .child(officer.full_name()),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(MdtColors::text_muted())
                                    .child(officer.title.clone()),
                            ),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(Self::detail_row(
                        t(locale, "col-call-sign"),
                        officer.call_sign_label(),
                    ))
                    .child(Self::detail_row(
                        t(locale, "col-state-id"),
                        officer.state_id.clone(),
                    ))
                    .child(Self::detail_row(
                        t(locale, "col-rank"),
                        officer.title.clone(),
                    ))
                    .child(Self::detail_row(
                        t(locale, "roster-unit"),
                        officer
                            .unit_id
                            .map_or_else(|| "-".to_string(), |u| u.to_string()),
                    )),
            )
    }
}

impl Render for RosterPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (current_page, page_count, total_records, error, details) = {
            let state = self.entities.roster.read(cx);
            (
                state.current_page,
                state.page_count(),
                state.total_records,
                state.error.clone(),
                state.details.clone(),
            )
        };

        let controller = self.controller.clone();

        div()
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
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(MdtColors::text_primary())
                            .child(t(locale, "nav-roster")),
                    ),
            )
            // Table or error banner
            .map(|el| match error {
                Some(message) => el.child(self.render_error(&message, locale, cx)),
                None => el
                    .child(
                        div()
                            .flex_1()
                            .min_h(px(0.0))
                            .overflow_hidden()
                            .child(self.table.clone()),
                    )
                    .child(
                        Pagination::new(current_page, page_count, total_records)
                            .items_label(t(locale, "roster-officers"))
                            .on_page_change(move |page, _window, cx| {
                                controller.change_page(page, cx);
                            }),
                    ),
            })
            // Details overlay
            .when_some(details, |el, officer| {
                el.child(self.render_details_modal(&officer, locale))
            })
    }
}
