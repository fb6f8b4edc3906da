//! App header bar component
//!
//! Displays the active view's title and, on the dashboard, a refresh marker.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps<'a> {
    /// Title (defaults to "Ticket Triage")
    pub title: Option<&'a str>,

    /// Name of the view that is not shown, hinted next to the Tab key
    pub other_view: Option<&'a str>,

    /// Whether a ticket list request is outstanding
    pub refreshing: bool,
}

/// App header bar showing the view title
#[component]
pub fn Header<'a>(props: &HeaderProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let title = props.title.unwrap_or("Ticket Triage");

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(
                    content: title,
                    color: theme.text,
                    weight: Weight::Bold,
                )
                #(props.refreshing.then(|| element! {
                    Text(content: "(refreshing...)", color: theme.text_dimmed)
                }))
            }
            #(props.other_view.map(|other| element! {
                Text(
                    content: format!("Tab: {}", other),
                    color: theme.text_dimmed,
                )
            }))
        }
    }
}
