use super::{message::Message, section_model::ListItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRoom {
    pub room_id: i64,
    pub name: String,
    /// Image references of the participants; the row shows the last one.
    pub images: Vec<String>,
    /// Oldest first.
    pub messages: Vec<Message>,
}

impl ChatRoom {
    pub fn new(room_id: i64, name: impl Into<String>) -> Self {
        Self {
            room_id,
            name: name.into(),
            images: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn avatar(&self) -> Option<&str> {
        self.images.last().map(String::as_str)
    }
}

impl ListItem for ChatRoom {
    type Id = i64;

    fn item_id(&self) -> i64 {
        self.room_id
    }
}
