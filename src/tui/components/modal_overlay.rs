//! Dialog layer drawn on top of the active view

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    pub children: Vec<AnyElement<'a>>,
}

/// Covers the whole screen with the backdrop and centers a single dialog.
/// Keys never reach the view underneath while one is open; see the keymap.
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let backdrop = theme().backdrop;

    element! {
        View(
            position: Position::Absolute,
            top: 0,
            left: 0,
            width: 100pct,
            height: 100pct,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            background_color: backdrop,
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}
