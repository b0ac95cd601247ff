use std::str::FromStr;

use crate::error::HelpdeskError;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    ProcessNext,
    Close,
    Undo,
    Dashboard,
    History,
    AssignAgent,
    QueueStatus,
    Exit,
}

impl MenuChoice {
    /// Display order; `Exit` is listed last but keyed `0`
    pub const ALL: [Self; 9] = [
        Self::Create,
        Self::ProcessNext,
        Self::Close,
        Self::Undo,
        Self::Dashboard,
        Self::History,
        Self::AssignAgent,
        Self::QueueStatus,
        Self::Exit,
    ];

    pub const fn key(self) -> u8 {
        match self {
            Self::Exit => 0,
            Self::Create => 1,
            Self::ProcessNext => 2,
            Self::Close => 3,
            Self::Undo => 4,
            Self::Dashboard => 5,
            Self::History => 6,
            Self::AssignAgent => 7,
            Self::QueueStatus => 8,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "📝 Create Ticket",
            Self::ProcessNext => "⚡ Process Next Ticket",
            Self::Close => "✅ Close Ticket",
            Self::Undo => "🔄 Undo Last Action",
            Self::Dashboard => "📊 Show Dashboard",
            Self::History => "📜 Show History (Linked List)",
            Self::AssignAgent => "👤 Assign Agent to Ticket",
            Self::QueueStatus => "📋 Show Queue Status",
            Self::Exit => "🚪 Exit",
        }
    }

    pub fn render_lines() -> Vec<String> {
        let rule = "=".repeat(50);
        let mut lines = vec![
            String::new(),
            rule.clone(),
            "🎫 HELP DESK TICKET SYSTEM".to_string(),
            rule.clone(),
        ];
        lines.extend(
            Self::ALL
                .iter()
                .map(|choice| format!("{}. {}", choice.key(), choice.label())),
        );
        lines.push(rule);
        lines
    }
}

impl FromStr for MenuChoice {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key().to_string() == key)
            .ok_or_else(|| HelpdeskError::InvalidInput(format!("'{key}' is not a menu option")))
    }
}
