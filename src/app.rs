use std::sync::Arc;

use iced::widget::{container, pane_grid};
use iced::Subscription;

use crate::config::{self, Config};
use crate::edit::{self, SelectionState, Target};
use crate::gateway;
use crate::views::{self, edit as edit_view, picker};

pub struct App {
    user: config::User,
    picker: views::Picker,
    edit: views::Edit,
    panes: pane_grid::State<PaneState>,
}

enum PaneState {
    Picker,
    Edit,
}

#[derive(Debug, Clone)]
pub enum Message {
    Picker(picker::Message),
    Edit(edit_view::Message),
    PaneResized(pane_grid::ResizeEvent),
}

impl App {
    pub fn new(config: Config, selection: SelectionState) -> (Self, iced::Task<Message>) {
        let (mut state, pane) = pane_grid::State::new(PaneState::Picker);

        let node = state.split(pane_grid::Axis::Vertical, pane, PaneState::Edit);

        if let Some((_, split)) = node {
            state.resize(split, 0.25);
        }

        let gateway: Arc<dyn gateway::Gateway> = Arc::new(gateway::Client::from_config(&config.api));
        let target = Target::new(config.user.target_video(), config.user.id.clone());

        let (edit, task) = views::Edit::new(
            gateway,
            target,
            selection,
            config.dropdowns,
            &config.notifications,
        );

        (
            Self {
                picker: views::Picker::new(config.user.videos.clone()),
                user: config.user,
                edit,
                panes: state,
            },
            task.map(Message::Edit),
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.edit.subscription().map(Message::Edit)
    }

    pub fn update(&mut self, message: Message) -> iced::Task<Message> {
        match message {
            Message::Picker(picker::Message::Select(video_id)) => {
                log::info!(video_id = video_id.as_str(); "Selected video");

                let target = Target::new(video_id, self.user.id.clone());

                self.edit
                    .update(edit_view::Message::Form(edit::Message::SetTarget(target)))
                    .map(Message::Edit)
            }
            Message::Edit(edit_message) => self.edit.update(edit_message).map(Message::Edit),
            Message::PaneResized(pane_grid::ResizeEvent { split, ratio }) => {
                self.panes.resize(split, ratio);

                iced::Task::none()
            }
        }
    }

    pub fn view(&self) -> iced::Element<Message> {
        pane_grid(&self.panes, |_, state, _| {
            pane_grid::Content::new(match state {
                PaneState::Picker => container(
                    self.picker
                        .view(&self.edit.target().video_id)
                        .map(Message::Picker),
                ),
                PaneState::Edit => container(self.edit.view().map(Message::Edit)),
            })
        })
        .spacing(12)
        .on_resize(12, Message::PaneResized)
        .into()
    }
}
