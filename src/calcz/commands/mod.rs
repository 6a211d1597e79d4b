use crate::model::Calculation;

pub mod add;
pub mod helpers;
pub mod sub;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub calculations: Vec<Calculation>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_calculation(mut self, calculation: Calculation) -> Self {
        self.calculations.push(calculation);
        self
    }
}
