//! Modal container component
//!
//! Provides a standardized dialog box with a title, content area and footer hint.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Predefined modal border colors
#[derive(Clone, Copy, Default)]
pub enum ModalBorderColor {
    #[default]
    Focused, // theme.border_focused (blue)
    Warning, // Yellow
    Error,   // Red
}

impl ModalBorderColor {
    pub fn to_color(&self) -> Color {
        match self {
            Self::Focused => theme().border_focused,
            Self::Warning => Color::Yellow,
            Self::Error => theme().error,
        }
    }
}

/// Dialog width in columns when none is given
pub const DEFAULT_MODAL_WIDTH: u32 = 60;

/// Props for the ModalContainer component
#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    /// Width in columns
    pub width: Option<u32>,
    pub border_color: Option<ModalBorderColor>,
    pub title: Option<String>,
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let border_color = props.border_color.unwrap_or_default().to_color();
    let width = props.width.unwrap_or(DEFAULT_MODAL_WIDTH);
    let title = props.title.clone();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: Size::Length(width),
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: border_color,
            padding: 1,
            flex_direction: FlexDirection::Column,
        ) {
            #(title.map(|title| element! {
                View(
                    width: 100pct,
                    padding_bottom: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: title, color: border_color, weight: Weight::Bold)
                }
            }))

            View(
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(footer.map(|footer| element! {
                View(
                    width: 100pct,
                    padding_top: 1,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: footer, color: theme.text_dimmed)
                }
            }))
        }
    }
}
