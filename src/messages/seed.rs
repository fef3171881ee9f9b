use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{Category, Message, Priority};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read messages from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid message file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate message id {0}")]
    DuplicateId(u32),

    #[error("message {0} has an empty sender")]
    EmptySender(u32),
}

/// Built-in messages shown when no message file is configured.
pub fn sample_messages() -> Vec<Message> {
    vec![
        Message {
            id: 1,
            sender: "John Recruiter".to_string(),
            content: "We have an exciting opportunity at our company. I've attached our job description and would love to discuss further.".to_string(),
            category: Category::Recruitment,
            priority: Priority::High,
            has_attachments: true,
            timestamp: "2024-03-15T10:30:00".to_string(),
        },
        Message {
            id: 2,
            sender: "Sales Representative".to_string(),
            content: "Would you be interested in our new SaaS platform that increases productivity by 300%?".to_string(),
            category: Category::Sales,
            priority: Priority::Low,
            has_attachments: false,
            timestamp: "2024-03-15T09:15:00".to_string(),
        },
        Message {
            id: 3,
            sender: "Tech Lead".to_string(),
            content: "Hi! I saw your work on GitHub. We're building something exciting and looking for someone with your expertise. I've attached our project details.".to_string(),
            category: Category::Recruitment,
            priority: Priority::High,
            has_attachments: true,
            timestamp: "2024-03-14T16:45:00".to_string(),
        },
    ]
}

/// Read a JSON array of messages. Validation happens in `MessageStore::new`.
pub fn load_messages(path: &Path) -> Result<Vec<Message>, SeedError> {
    let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| SeedError::Json {
        path: path.to_path_buf(),
        source,
    })
}
