use std::collections::HashSet;

use super::filter::CategoryFilter;
use super::seed::SeedError;
use super::Message;

/// Read-only holder for the messages loaded at startup.
#[derive(Debug, Clone)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new(messages: Vec<Message>) -> Result<Self, SeedError> {
        let mut seen = HashSet::new();
        for message in &messages {
            if !seen.insert(message.id) {
                return Err(SeedError::DuplicateId(message.id));
            }
            if message.sender.trim().is_empty() {
                return Err(SeedError::EmptySender(message.id));
            }
        }

        Ok(Self { messages })
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn count_by_category(&self, filter: &CategoryFilter) -> usize {
        self.messages
            .iter()
            .filter(|m| filter.matches(&m.category))
            .count()
    }
}
