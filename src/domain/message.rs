/// A single chat message as supplied by the data source. The timestamp stays
/// in its raw `yyyy-MM-dd HH:mm` form until a row is formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: String,
    pub date: String,
    pub text: String,
}

impl Message {
    pub fn new(sender: impl Into<String>, date: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            date: date.into(),
            text: text.into(),
        }
    }

    /// Message text with runs of whitespace collapsed, for single-line rows.
    pub fn preview(&self) -> String {
        self.text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
