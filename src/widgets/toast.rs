use std::collections::VecDeque;
use std::time::{Duration, Instant};

use iced::widget::{container, text, Column};
use iced::{Color, Length};

use crate::edit::{Level, Notice};

/// Notifications shown under the form until they time out.
pub struct Toasts {
    items: VecDeque<(Instant, Notice)>,
    timeout: Duration,
}

impl Toasts {
    pub const fn new(timeout: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            timeout,
        }
    }

    pub fn push(&mut self, notice: Notice) {
        self.push_at(notice, Instant::now());
    }

    fn push_at(&mut self, notice: Notice, now: Instant) {
        self.items.push_back((now, notice));
    }

    /// Drop every toast older than the timeout.
    pub fn expire(&mut self, now: Instant) {
        while self
            .items
            .front()
            .is_some_and(|(created, _)| now.saturating_duration_since(*created) >= self.timeout)
        {
            self.items.pop_front();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter().map(|(_, notice)| notice)
    }

    /// Ticks only while there is something to expire.
    pub fn subscription(&self) -> iced::Subscription<Instant> {
        if self.is_empty() {
            iced::Subscription::none()
        } else {
            iced::time::every(Duration::from_secs(1))
        }
    }

    pub fn view<'a, Message: 'a>(&'a self) -> iced::Element<'a, Message> {
        Column::from_iter(self.notices().map(|notice| {
            container(text(&notice.message).color(Color::WHITE))
                .padding([8, 16])
                .width(Length::Fill)
                .style(move |_| style_container(notice.level))
                .into()
        }))
        .spacing(8)
        .into()
    }
}

fn style_container(level: Level) -> container::Style {
    let color = match level {
        Level::Success => Color::from_rgb8(34, 139, 84),
        Level::Failure => Color::from_rgb8(239, 68, 68),
    };

    container::Style {
        background: Some(iced::Background::Color(color)),
        border: iced::border::rounded(8),
        ..Default::default()
    }
}
