//! State of the yes/no proposal page that hosts the reveal.
//!
//! Only the state and the notification payload live here; sending the payload is up to the host.

/// Form-relay endpoint the acceptance notification is posted to.
pub const NOTIFY_ENDPOINT: &str = "https://formsubmit.co/ajax/";

const NO_PHRASES: &[&str] = &[
    "No",
    "Are you sure?",
    "Really sure?",
    "Think again!",
    "Last chance!",
    "Really?",
    "Surely not?",
    "You might regret this!",
    "Give it another thought!",
    "Are you absolutely certain?",
    "This could be a mistake!",
    "Have a heart!",
    "Wow you pressed no so many times!",
    "Don't be so cold!",
    "Change of heart?",
    "Wouldn't you reconsider?",
    "Is that your final answer?",
    "You're breaking my heart ;(",
    "Pero like why not?",
    "Is that your final answer?",
    "You're breaking my heart ;(",
    "Plsss? :( You're breaking my heart",
];

/// Yes/no prompt state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ProposalPrompt {
    no_count: u32,
    yes_pressed: bool,
}

impl ProposalPrompt {
    /// Fresh prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a "no" press.
    pub fn press_no(&mut self) {
        self.no_count = self.no_count.saturating_add(1);
    }

    /// Register a "yes" press and build the notification to send.
    ///
    /// This is also the `play` trigger for the reveal.
    pub fn press_yes(&mut self, timestamp: &str) -> NotificationPayload {
        self.yes_pressed = true;
        NotificationPayload::accepted(self.no_count, timestamp)
    }

    /// Times "no" was pressed.
    pub fn no_count(&self) -> u32 {
        self.no_count
    }

    /// Whether "yes" was pressed; drives the reveal's `play` input.
    pub fn yes_pressed(&self) -> bool {
        self.yes_pressed
    }

    /// Label of the "no" button; escalates with every press and sticks at the last phrase.
    pub fn no_button_text(&self) -> &'static str {
        let i = (self.no_count as usize).min(NO_PHRASES.len() - 1);
        NO_PHRASES[i]
    }

    /// Font size of the "yes" button, which grows with every "no".
    pub fn yes_button_font_px(&self) -> u32 {
        self.no_count.saturating_mul(20).saturating_add(16)
    }
}

/// JSON body posted to the form relay.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NotificationPayload {
    /// Sender label.
    pub name: String,
    /// Message body.
    pub message: String,
    /// Mail subject.
    #[serde(rename = "_subject")]
    pub subject: String,
    /// Relay template name.
    #[serde(rename = "_template")]
    pub template: String,
}

impl NotificationPayload {
    /// Payload announcing acceptance after `no_count` rejections.
    pub fn accepted(no_count: u32, timestamp: &str) -> Self {
        Self {
            name: "Proposal Response".to_owned(),
            message: format!(
                "They said YES! 🎉\n\nBut they pressed NO {no_count} times first 😅\n\nTimestamp: {timestamp}"
            ),
            subject: "🎉 They Said YES!".to_owned(),
            template: "table".to_owned(),
        }
    }

    /// Serialize to the JSON body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "../tests/unit/prompt.rs"]
mod tests;
