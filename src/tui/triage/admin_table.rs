//! Admin Dashboard: ticket counts and the open-ticket table

use iocraft::prelude::*;

use crate::triage::{AdminRows, AdminViewModel, TicketRow};
use crate::tui::theme::theme;

const ID_WIDTH: u32 = 8;
const CATEGORY_WIDTH: u32 = 16;
const PRIORITY_WIDTH: u32 = 10;

/// Props for the AdminDashboard component
#[derive(Default, Props)]
pub struct AdminDashboardProps {
    pub admin: Option<AdminViewModel>,
}

#[component]
pub fn AdminDashboard(props: &AdminDashboardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(admin) = props.admin.clone() else {
        return element! { View() };
    };

    let body: Vec<AnyElement<'static>> = match admin.rows {
        AdminRows::Placeholder(text) => vec![
            element! {
                View(width: 100pct, padding_left: 1, padding_top: 1) {
                    Text(content: text, color: theme.text_dimmed)
                }
            }
            .into_any(),
        ],
        AdminRows::Tickets(rows) => rows.into_iter().map(render_row).collect(),
    };

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            padding: 1,
            gap: 1,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                StatCard(
                    label: "Unresolved",
                    value: admin.stats.unresolved,
                    color: Some(theme.stat_unresolved),
                )
                StatCard(
                    label: "Resolved",
                    value: admin.stats.resolved,
                    color: Some(theme.stat_resolved),
                )
            }

            View(
                width: 100pct,
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                overflow: Overflow::Hidden,
            ) {
                View(
                    width: 100pct,
                    flex_direction: FlexDirection::Row,
                    padding_left: 1,
                    padding_right: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    View(width: ID_WIDTH) {
                        Text(content: "ID", color: theme.text, weight: Weight::Bold)
                    }
                    View(flex_grow: 1.0) {
                        Text(content: "Message", color: theme.text, weight: Weight::Bold)
                    }
                    View(width: CATEGORY_WIDTH) {
                        Text(content: "Category", color: theme.text, weight: Weight::Bold)
                    }
                    View(width: PRIORITY_WIDTH) {
                        Text(content: "Priority", color: theme.text, weight: Weight::Bold)
                    }
                }
                #(body)
            }
        }
    }
}

fn render_row(row: TicketRow) -> AnyElement<'static> {
    let theme = theme();
    let background = if row.is_selected {
        Some(theme.highlight)
    } else {
        None
    };
    let marker = if row.is_selected { ">" } else { " " };
    let message = row.message.lines().next().unwrap_or_default().to_string();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            padding_right: 1,
            background_color: background,
        ) {
            View(width: ID_WIDTH + 1) {
                Text(content: format!("{}{}", marker, row.id_label), color: theme.id_color)
            }
            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                Text(content: message, color: theme.text)
            }
            View(width: CATEGORY_WIDTH) {
                Text(content: row.category, color: theme.text_dimmed)
            }
            View(width: PRIORITY_WIDTH) {
                Text(
                    content: row.priority,
                    color: theme.priority_color(row.priority_color),
                    weight: Weight::Bold,
                )
            }
        }
    }
    .into_any()
}

/// Props for the StatCard component
#[derive(Default, Props)]
pub struct StatCardProps<'a> {
    pub label: &'a str,
    pub value: usize,
    pub color: Option<Color>,
}

/// One boxed count
#[component]
pub fn StatCard<'a>(props: &StatCardProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let color = props.color.unwrap_or(theme.text);

    element! {
        View(
            border_style: BorderStyle::Round,
            border_color: color,
            padding_left: 2,
            padding_right: 2,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
        ) {
            Text(content: props.value.to_string(), color: color, weight: Weight::Bold)
            Text(content: props.label, color: theme.text_dimmed)
        }
    }
}
