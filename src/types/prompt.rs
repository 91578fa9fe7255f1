use crate::Error;

/// A user prompt that is not blank.
///
/// The original text is kept as typed; only the emptiness check trims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    /// Validate user input, rejecting empty and whitespace-only strings.
    pub fn parse(input: impl Into<String>) -> Result<Self, Error> {
        let text = input.into();
        if text.trim().is_empty() {
            return Err(Error::EmptyPrompt);
        }
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> String {
        self.text
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl TryFrom<&str> for Prompt {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Prompt::parse(s)
    }
}

impl TryFrom<String> for Prompt {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Prompt::parse(s)
    }
}
