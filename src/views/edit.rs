use std::sync::Arc;
use std::time::{Duration, Instant};

use iced::widget::{
    button, column, container, horizontal_rule, horizontal_space, row, text, text_editor, text_input, Row,
};
use iced::{Alignment, Length};

use crate::config;
use crate::edit::{self, Effect, EditState, Field, Level, SelectionState, Status, Target};
use crate::gateway::Gateway;
use crate::widgets::{dropdown, Toasts};

pub struct Edit {
    state: EditState,
    gateway: Arc<dyn Gateway>,
    dropdowns: Vec<config::Dropdown>,
    /// Multi-line editor mirroring `EditBuffer::description`.
    description: text_editor::Content,
    toasts: Toasts,
}

#[derive(Debug, Clone)]
pub enum Message {
    Form(edit::Message),
    DescriptionEdited(text_editor::Action),
    Tick(Instant),
}

impl Edit {
    pub fn new(
        gateway: Arc<dyn Gateway>,
        target: Target,
        selection: SelectionState,
        dropdowns: Vec<config::Dropdown>,
        notifications: &config::Notifications,
    ) -> (Self, iced::Task<Message>) {
        let (state, effects) = EditState::new(target, selection);

        let mut edit = Self {
            state,
            gateway,
            dropdowns,
            description: text_editor::Content::new(),
            toasts: Toasts::new(Duration::from_secs(notifications.timeout)),
        };

        let task = edit.apply(effects);
        edit.sync_description();

        (edit, task)
    }

    pub const fn target(&self) -> &Target {
        self.state.target()
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        self.toasts.subscription().map(Message::Tick)
    }

    pub fn update(&mut self, message: Message) -> iced::Task<Message> {
        match message {
            Message::Form(form_message) => {
                let effects = self.state.update(form_message);
                let task = self.apply(effects);
                self.sync_description();

                task
            }
            Message::DescriptionEdited(action) => {
                let is_edit = action.is_edit();
                self.description.perform(action);

                if !is_edit {
                    return iced::Task::none();
                }

                let value = editor_value(self.description.text());

                self.update(Message::Form(edit::Message::Input(Field::Description, value)))
            }
            Message::Tick(now) => {
                self.toasts.expire(now);

                iced::Task::none()
            }
        }
    }

    /// Reload the editor when the buffer changed underneath it, e.g. on load.
    fn sync_description(&mut self) {
        let description = &self.state.buffer().description;

        if editor_value(self.description.text()) != *description {
            self.description = text_editor::Content::with_text(description);
        }
    }

    /// Start the requested gateway calls and show the notices.
    fn apply(&mut self, effects: Vec<Effect>) -> iced::Task<Message> {
        let tasks: Vec<_> = effects
            .into_iter()
            .map(|effect| match effect {
                Effect::Request(request) => {
                    let gateway = Arc::clone(&self.gateway);

                    iced::Task::perform(
                        async move { request.run(gateway.as_ref()) },
                        Message::Form,
                    )
                }
                Effect::Notify(notice) => {
                    match notice.level {
                        Level::Success => log::info!("{}", notice.message),
                        Level::Failure => log::warn!("{}", notice.message),
                    }

                    self.toasts.push(notice);

                    iced::Task::none()
                }
            })
            .collect();

        iced::Task::batch(tasks)
    }

    pub fn view(&self) -> iced::Element<Message> {
        if self.state.status() == Status::Unresolvable {
            return container(text("User has no videos to edit").size(32))
                .center(Length::Fill)
                .into();
        }

        column![
            self.view_media(),
            self.view_header(),
            horizontal_rule(1),
            self.view_description(),
            horizontal_rule(1),
            self.view_dropdowns(),
            horizontal_rule(1),
            self.view_actions(),
            self.toasts.view(),
        ]
        .padding(16)
        .spacing(12)
        .into()
    }

    fn view_media(&self) -> iced::Element<Message> {
        let caption = match (self.state.status(), self.state.video()) {
            (_, Some(video)) => video.media_url.clone(),
            (Status::Loading, None) => "Loading…".to_owned(),
            _ => String::new(),
        };

        container(text(caption).size(14))
            .center_x(Length::Fill)
            .height(48)
            .into()
    }

    fn view_header(&self) -> iced::Element<Message> {
        let buffer = self.state.buffer();

        let title = text_input("Title", &buffer.title)
            .on_input(|value| Message::Form(edit::Message::Input(Field::Title, value)))
            .on_submit(Message::Form(edit::Message::Submit))
            .size(20)
            .width(Length::FillPortion(1));

        let meta = self.state.video().map_or_else(
            || row![],
            |video| {
                row![
                    text(video.display_date()).size(12),
                    text(video.display_duration()).size(12),
                    text(format!("{} Views", video.view_count)).size(12),
                ]
                .spacing(8)
            },
        );

        row![title, horizontal_space(), meta]
            .align_y(Alignment::Center)
            .into()
    }

    fn view_description(&self) -> iced::Element<Message> {
        let description = text_editor(&self.description)
            .placeholder("Description")
            .on_action(Message::DescriptionEdited)
            .height(96);

        column![text("Description"), description].spacing(4).into()
    }

    fn view_dropdowns(&self) -> iced::Element<Message> {
        let selection = self.state.selection();

        Row::from_iter(
            self.dropdowns
                .iter()
                .map(|entry| dropdown::view(entry, selection).map(Message::Form)),
        )
        .spacing(32)
        .into()
    }

    fn view_actions(&self) -> iced::Element<Message> {
        let can_modify = self.state.can_modify();

        let delete = button(text("Delete"))
            .style(button::danger)
            .padding([8, 48])
            .on_press_maybe(
                (can_modify && !self.state.is_deleting()).then_some(Message::Form(edit::Message::Delete)),
            );

        let save = button(text("Save"))
            .style(button::primary)
            .padding([8, 48])
            .on_press_maybe(
                (can_modify && !self.state.is_submitting()).then_some(Message::Form(edit::Message::Submit)),
            );

        row![delete, horizontal_space(), save].into()
    }
}

/// The editor reports its text with a trailing line break.
fn editor_value(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }

    text
}

#[cfg(test)]
mod tests {
    use super::editor_value;

    #[test]
    fn editor_value_keeps_inner_line_breaks() {
        assert_eq!(editor_value("first\nsecond\n".to_owned()), "first\nsecond");
        assert_eq!(editor_value("first\n\n".to_owned()), "first\n");
        assert_eq!(editor_value(String::new()), "");
    }
}
