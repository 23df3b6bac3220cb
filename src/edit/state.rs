use crate::gateway::{Error, Gateway, VideoEntity};

use super::{EditBuffer, Field, SelectionState};

/// The video to edit and the user owning it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    pub video_id: String,
    pub user_id: String,
}

impl Target {
    pub fn new(video_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            user_id: user_id.into(),
        }
    }

    pub fn is_resolvable(&self) -> bool {
        !self.video_id.is_empty() && !self.user_id.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No video or no user, nothing can be done.
    Unresolvable,
    Loading,
    /// The fetch failed, the form is editable but empty and cannot be saved.
    Failed,
    Ready,
}

/// A gateway call the state machine wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Fetch {
        generation: u64,
        video_id: String,
    },
    Update {
        user_id: String,
        video_id: String,
        fields: EditBuffer,
    },
    Remove {
        user_id: String,
        video_id: String,
    },
}

impl Request {
    /// Perform the call and turn its outcome into the completion message.
    pub fn run(self, gateway: &dyn Gateway) -> Message {
        match self {
            Self::Fetch { generation, video_id } => Message::Loaded {
                generation,
                result: gateway.fetch_by_id(&video_id).map(Box::new),
            },
            Self::Update { user_id, video_id, fields } => {
                Message::Submitted(gateway.update(&user_id, &video_id, &fields))
            }
            Self::Remove { user_id, video_id } => {
                Message::Deleted(gateway.remove(&user_id, &video_id))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: Level::Failure,
            message: message.into(),
        }
    }

    fn from_result(result: Result<String, Error>) -> Self {
        result.map_or_else(|e| Self::failure(e.message), Self::success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Request(Request),
    Notify(Notice),
}

#[derive(Debug, Clone)]
pub enum Message {
    SetTarget(Target),
    Loaded {
        generation: u64,
        result: Result<Box<VideoEntity>, Error>,
    },
    Input(Field, String),
    ToggleDropdown(String),
    SelectOption(String, String),
    Submit,
    Submitted(Result<String, Error>),
    Delete,
    Deleted(Result<String, Error>),
}

#[derive(Debug, Clone, Copy, Default)]
struct Pending {
    update: bool,
    remove: bool,
}

/// Edit session for one video: the fetched entity, the draft buffer and the
/// dropdown selection, driven by [`Message`]s.
#[derive(Debug, Clone)]
pub struct EditState {
    target: Target,
    status: Status,
    /// Bumped on every retarget, fetch results of older generations are stale.
    generation: u64,
    video: Option<VideoEntity>,
    buffer: EditBuffer,
    selection: SelectionState,
    pending: Pending,
}

impl EditState {
    pub fn new(target: Target, selection: SelectionState) -> (Self, Vec<Effect>) {
        let mut state = Self {
            target: Target::default(),
            status: Status::Unresolvable,
            generation: 0,
            video: None,
            buffer: EditBuffer::default(),
            selection,
            pending: Pending::default(),
        };

        let effects = state.retarget(target);

        (state, effects)
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    pub const fn target(&self) -> &Target {
        &self.target
    }

    pub const fn video(&self) -> Option<&VideoEntity> {
        self.video.as_ref()
    }

    pub const fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Save and delete act on a loaded video only.
    pub fn can_modify(&self) -> bool {
        self.status == Status::Ready
    }

    pub const fn is_submitting(&self) -> bool {
        self.pending.update
    }

    pub const fn is_deleting(&self) -> bool {
        self.pending.remove
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::SetTarget(target) => {
                if target == self.target {
                    return Vec::new();
                }

                self.retarget(target)
            }
            Message::Loaded { generation, result } => {
                if generation != self.generation {
                    log::debug!(generation; "Discarding stale video fetch");
                    return Vec::new();
                }

                match result {
                    Ok(video) => {
                        log::info!("Loaded video {} ({})", video.id, video.title);
                        self.seed(*video);
                        Vec::new()
                    }
                    Err(e) => {
                        self.status = Status::Failed;
                        vec![Effect::Notify(Notice::failure(e.message))]
                    }
                }
            }
            Message::Input(field, value) => {
                if self.target.is_resolvable() {
                    self.buffer.set(field, value);
                }

                Vec::new()
            }
            Message::ToggleDropdown(label) => {
                self.selection.toggle(&label);
                Vec::new()
            }
            Message::SelectOption(label, value) => {
                if self.selection.select(&label, value, &mut self.buffer).is_none() {
                    log::warn!("Selected an option of unknown dropdown {label:?}");
                }

                Vec::new()
            }
            Message::Submit => {
                if !self.can_modify() {
                    log::debug!("No video loaded, ignoring submit");
                    return Vec::new();
                }

                if self.pending.update {
                    log::debug!("Update already in flight, ignoring submit");
                    return Vec::new();
                }

                self.pending.update = true;
                vec![Effect::Request(Request::Update {
                    user_id: self.target.user_id.clone(),
                    video_id: self.target.video_id.clone(),
                    fields: self.buffer.clone(),
                })]
            }
            Message::Submitted(result) => {
                self.pending.update = false;
                vec![Effect::Notify(Notice::from_result(result))]
            }
            Message::Delete => {
                if !self.can_modify() {
                    log::debug!("No video loaded, ignoring delete");
                    return Vec::new();
                }

                if self.pending.remove {
                    log::debug!("Delete already in flight, ignoring");
                    return Vec::new();
                }

                self.pending.remove = true;
                vec![Effect::Request(Request::Remove {
                    user_id: self.target.user_id.clone(),
                    video_id: self.target.video_id.clone(),
                })]
            }
            Message::Deleted(result) => {
                self.pending.remove = false;
                vec![Effect::Notify(Notice::from_result(result))]
            }
        }
    }

    fn retarget(&mut self, target: Target) -> Vec<Effect> {
        self.generation += 1;
        self.target = target;
        self.video = None;
        self.buffer = EditBuffer::default();
        self.selection.reseed(&self.buffer);

        if !self.target.is_resolvable() {
            log::info!("No video to edit");
            self.status = Status::Unresolvable;
            return Vec::new();
        }

        self.status = Status::Loading;
        vec![Effect::Request(Request::Fetch {
            generation: self.generation,
            video_id: self.target.video_id.clone(),
        })]
    }

    fn seed(&mut self, video: VideoEntity) {
        self.buffer = EditBuffer::from_video(&video);
        self.selection.reseed(&self.buffer);
        self.video = Some(video);
        self.status = Status::Ready;
    }
}
