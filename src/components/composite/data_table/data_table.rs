//! DataTable Component
//!
//! Renders keyed rows under a fixed header. While a fetch is in flight the
//! current rows stay visible under a translucent busy overlay; the busy flag
//! gates the overlay only, never interactivity.

use gpui::{
    Context, Div, IntoElement, ParentElement, Render, SharedString, Stateful, Styled, Window, div,
    prelude::*, px,
};

use super::column::{Column, ColumnWidth};
use crate::theme::colors::MdtColors;

/// DataTable component
pub struct DataTable<R: Clone + Send + Sync + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    /// Stable row key, used as the row's element id
    key: Box<dyn Fn(&R) -> SharedString + Send + Sync>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    empty_message: SharedString,
    loading_message: SharedString,
}

impl<R: Clone + Send + Sync + 'static> DataTable<R> {
    pub fn new(_cx: &mut Context<Self>, key: impl Fn(&R) -> SharedString + Send + Sync + 'static) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            key: Box::new(key),
            row_height: 48.0,
            header_height: 40.0,
            loading: false,
            empty_message: "No records".into(),
            loading_message: "Loading...".into(),
        }
    }

    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Replace the rows wholesale
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    pub fn set_loading_message(&mut self, message: impl Into<SharedString>) {
        self.loading_message = message.into();
    }

    fn sized_cell(&self, width: ColumnWidth) -> Div {
        let cell = div().px_3().overflow_hidden();
        match width {
            ColumnWidth::Fixed(w) => cell.w(px(w)),
            ColumnWidth::Flex => cell.flex_1(),
        }
    }

    fn render_header(&self) -> Div {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(MdtColors::table_header_bg())
            .border_b_1()
            .border_color(MdtColors::border())
            .children(self.columns.iter().map(|col| {
                self.sized_cell(col.width)
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(MdtColors::text_secondary())
                    .child(col.label.clone())
            }))
    }

    fn render_row(&self, row: &R) -> Stateful<Div> {
        div()
            .id((self.key)(row))
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(MdtColors::surface_raised())
            .hover(|s| s.bg(MdtColors::table_row_hover()))
            .border_b_1()
            .border_color(MdtColors::border())
            .children(self.columns.iter().map(|col| {
                self.sized_cell(col.width)
                    .flex()
                    .items_center()
                    .text_sm()
                    .text_color(MdtColors::text_primary())
                    .child(col.render_cell(row))
            }))
    }

    fn render_empty(&self) -> Div {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .py_8()
            .text_color(MdtColors::text_muted())
            .child(self.empty_message.clone())
    }
}

impl<R: Clone + Send + Sync + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(MdtColors::surface())
            .border_1()
            .border_color(MdtColors::border())
            .rounded_md()
            .overflow_hidden();

        table = table.child(self.render_header());

        if self.rows.is_empty() && !self.loading {
            table = table.child(self.render_empty());
        } else {
            table = table.child(
                div()
                    .id("data-table-rows")
                    .flex_1()
                    .overflow_y_scroll()
                    .children(self.rows.iter().map(|row| self.render_row(row))),
            );
        }

        // Rows stay visible behind the overlay during refetches
        if self.loading {
            table = table.child(
                div()
                    .absolute()
                    .inset_0()
                    .bg(gpui::rgba(0x1d1b26aa))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(MdtColors::text_secondary())
                    .child(self.loading_message.clone()),
            );
        }

        table
    }
}
