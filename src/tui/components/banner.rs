//! Inline feedback banner
//!
//! A single-line bar for error and success messages. Unlike a toast it stays
//! until the state that produced it changes.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Severity of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerLevel {
    #[default]
    Error,
    Success,
}

impl BannerLevel {
    pub fn color(self) -> Color {
        match self {
            BannerLevel::Error => theme().error,
            BannerLevel::Success => theme().success,
        }
    }
}

/// Props for the Banner component
#[derive(Default, Props)]
pub struct BannerProps {
    pub message: Option<String>,
    pub level: BannerLevel,
}

#[component]
pub fn Banner(props: &BannerProps) -> impl Into<AnyElement<'static>> {
    element! {
        View() {
            #(props.message.as_ref().map(|message| {
                let color = props.level.color();
                element! {
                    View(
                        width: 100pct,
                        padding_left: 1,
                        padding_right: 1,
                        border_edges: Edges::Left,
                        border_style: BorderStyle::Bold,
                        border_color: color,
                    ) {
                        Text(content: message.clone(), color: color)
                    }
                }
            }))
        }
    }
}
