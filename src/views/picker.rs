use iced::widget::{button, scrollable, text, Column};
use iced::Length;

/// The user's videos as a list of buttons, pressing one edits that video.
pub struct Picker {
    videos: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(String),
}

impl Picker {
    pub const fn new(videos: Vec<String>) -> Self {
        Self { videos }
    }

    pub fn view(&self, selected: &str) -> iced::Element<Message> {
        let buttons = self.videos.iter().map(|video_id| {
            let style = if video_id == selected {
                button::primary
            } else {
                button::secondary
            };

            button(text(video_id))
                .width(Length::Fill)
                .style(style)
                .on_press(Message::Select(video_id.clone()))
                .into()
        });

        scrollable(Column::from_iter(buttons).spacing(8).padding(16)).into()
    }
}
