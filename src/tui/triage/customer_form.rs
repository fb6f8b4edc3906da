//! Customer Portal: the ticket submission form

use iocraft::prelude::*;

use crate::triage::{CustomerViewModel, TriageAction, TriageState, apply_action};
use crate::tui::components::{Banner, BannerLevel};
use crate::tui::theme::theme;

/// Props for the CustomerForm component
#[derive(Default, Props)]
pub struct CustomerFormProps {
    pub form: Option<CustomerViewModel>,
    /// Shared state the draft input writes into
    pub state: Option<State<TriageState>>,
    pub has_focus: bool,
}

#[component]
pub fn CustomerForm(props: &CustomerFormProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (Some(form), Some(mut state)) = (props.form.clone(), props.state) else {
        return element! { View() };
    };

    let input_focused = props.has_focus && form.input_enabled;
    let button_color = if form.input_enabled {
        theme.highlight
    } else {
        theme.text_dimmed
    };

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            padding: 1,
            gap: 1,
        ) {
            Text(
                content: "Describe your issue and we'll route it to the right team.",
                color: theme.text_dimmed,
            )

            View(
                width: 100pct,
                flex_grow: 1.0,
                min_height: 5,
                border_style: BorderStyle::Round,
                border_color: if input_focused { theme.border_focused } else { theme.border },
                padding_left: 1,
                padding_right: 1,
                overflow: Overflow::Hidden,
            ) {
                TextInput(
                    has_focus: input_focused,
                    value: form.draft.clone(),
                    on_change: move |new_value: String| {
                        apply_action(&mut state.write(), TriageAction::UpdateDraft(new_value));
                    },
                    multiline: true,
                    cursor_color: Some(theme.highlight),
                    color: Some(theme.text),
                )
            }

            View(flex_direction: FlexDirection::Row) {
                View(
                    border_style: BorderStyle::Round,
                    border_color: button_color,
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    Text(content: form.submit_label, color: button_color, weight: Weight::Bold)
                }
            }

            Banner(message: form.success.clone(), level: BannerLevel::Success)
        }
    }
}
