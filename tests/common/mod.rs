#![allow(dead_code)]

use flameware::CommandActor;
use parking_lot::Mutex;
use uuid::Uuid;

/// Test double that records every rendered line it is sent.
pub struct RecordingActor {
    id: Uuid,
    name: String,
    console: bool,
    permissions: Vec<String>,
    replies: Mutex<Vec<String>>,
}

impl RecordingActor {
    pub fn player(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            console: false,
            permissions: Vec::new(),
            replies: Mutex::new(Vec::new()),
        }
    }

    pub fn console() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "CONSOLE".to_string(),
            console: true,
            permissions: Vec::new(),
            replies: Mutex::new(Vec::new()),
        }
    }

    pub fn with_permission(mut self, permission: &str) -> Self {
        self.permissions.push(permission.to_string());
        self
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().clone()
    }

    pub fn last_reply(&self) -> Option<String> {
        self.replies.lock().last().cloned()
    }
}

impl CommandActor for RecordingActor {
    fn send_raw(&self, message: &str) {
        self.replies.lock().push(message.to_string());
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.console || self.permissions.iter().any(|p| p == permission)
    }

    fn is_console(&self) -> bool {
        self.console
    }
}
