#[cfg(test)]
#[path = "broadcast_test.rs"]
mod broadcast_test;

pub const TITLE_MAX: usize = 100;
pub const BODY_MAX: usize = 500;

/// Broadcast composer form. Transient — never persisted client-side.
///
/// Lengths are counted in characters, matching what the live counter shows
/// next to the inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BroadcastForm {
    pub title: String,
    pub body: String,
}

/// Client-side validation failures for the composer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BroadcastInvalid {
    EmptyTitle,
    EmptyBody,
}

impl BroadcastInvalid {
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyTitle => "Title is required",
            Self::EmptyBody => "Message body is required",
        }
    }
}

impl BroadcastForm {
    /// Input handlers clamp to the maximum length rather than erroring.
    pub fn set_title(&mut self, title: String) {
        self.title = clamp_chars(title, TITLE_MAX);
    }

    pub fn set_body(&mut self, body: String) {
        self.body = clamp_chars(body, BODY_MAX);
    }

    pub fn title_remaining(&self) -> usize {
        TITLE_MAX - self.title.chars().count()
    }

    pub fn body_remaining(&self) -> usize {
        BODY_MAX - self.body.chars().count()
    }

    /// Both fields must be non-empty after trimming. Invalid forms are
    /// rejected before any network call is made.
    pub fn validate(&self) -> Result<(), BroadcastInvalid> {
        if self.title.trim().is_empty() {
            return Err(BroadcastInvalid::EmptyTitle);
        }
        if self.body.trim().is_empty() {
            return Err(BroadcastInvalid::EmptyBody);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
    }
}

fn clamp_chars(value: String, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((idx, _)) => value[..idx].to_owned(),
        None => value,
    }
}
