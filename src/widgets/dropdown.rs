use iced::widget::{button, column, row, text, Column};
use iced::Length;

use crate::config;
use crate::edit::{Message, SelectionState};

/// A labeled toggle button showing the chosen value, with the option list
/// below it while open.
pub fn view<'a>(dropdown: &'a config::Dropdown, selection: &'a SelectionState) -> iced::Element<'a, Message> {
    let label = dropdown.label.as_str();
    let shown = selection
        .chosen(label)
        .filter(|chosen| !chosen.is_empty())
        .unwrap_or(label);

    let toggle = button(row![text(shown), text("▾")].spacing(8))
        .style(button::text)
        .on_press(Message::ToggleDropdown(label.to_owned()));

    let options = dropdown
        .options
        .as_ref()
        .filter(|_| selection.is_open(label))
        .map(|options| {
            Column::from_iter(options.iter().map(|option| {
                button(text(option))
                    .width(Length::Fill)
                    .style(button::secondary)
                    .on_press(Message::SelectOption(label.to_owned(), option.clone()))
                    .into()
            }))
            .width(176)
        });

    column![text(label).size(12), toggle]
        .push_maybe(options)
        .spacing(4)
        .into()
}
