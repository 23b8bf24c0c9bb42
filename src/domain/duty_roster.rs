use serde::{Deserialize, Serialize};

/// Night watch (sentry post)
pub const KEYWORD_WATCH: &str = "Σκοπιά";
/// Barracks room guard
pub const KEYWORD_ROOM_GUARD: &str = "Θαλαμοφύλακας";
/// Kitchen duty
pub const KEYWORD_KITCHEN: &str = "Κουζίνα";

/// Longest slot label, in characters. Labels are stored as `assignments.shift_type`.
pub const SLOT_LABEL_MAX: usize = 120;

/// The fixed daily duty layout: which slots must be filled, in which order,
/// and which role keywords gate them.
///
/// Slot order matters. Soldiers picked for an earlier slot are not
/// considered for later slots of the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyRoster {
    pub slots: Vec<String>,
    pub role_keywords: Vec<String>,
}

impl Default for DutyRoster {
    fn default() -> Self {
        Self {
            slots: vec![
                format!("{KEYWORD_WATCH} 00:00-02:00"),
                format!("{KEYWORD_WATCH} 02:00-04:00"),
                format!("{KEYWORD_WATCH} 04:00-06:00"),
                format!("{KEYWORD_ROOM_GUARD} Ημέρας"),
                format!("{KEYWORD_KITCHEN} Πρωί"),
            ],
            role_keywords: vec![
                KEYWORD_WATCH.to_string(),
                KEYWORD_ROOM_GUARD.to_string(),
                KEYWORD_KITCHEN.to_string(),
            ],
        }
    }
}

impl DutyRoster {
    pub fn new(slots: Vec<String>, role_keywords: Vec<String>) -> Self {
        Self { slots, role_keywords }
    }

    /// First keyword (in keyword order) contained in the slot label.
    /// `None` means the slot is open to any role.
    pub fn required_keyword(&self, slot: &str) -> Option<&str> {
        self.role_keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| slot.contains(keyword))
    }

    /// Case-sensitive substring match of the slot's keyword against the role.
    pub fn is_role_compatible(&self, slot: &str, role: &str) -> bool {
        match self.required_keyword(slot) {
            Some(keyword) => role.contains(keyword),
            None => true,
        }
    }

    /// Rejects blank or overlong labels and blank keywords. A blank keyword
    /// would be a substring of every label and every role.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(index) = self.slots.iter().position(|s| s.trim().is_empty()) {
            return Err(format!("slot #{index} has an empty label"));
        }
        if let Some(index) = self.slots.iter().position(|s| s.chars().count() > SLOT_LABEL_MAX) {
            return Err(format!("slot #{index} is longer than {SLOT_LABEL_MAX} characters"));
        }
        if let Some(index) = self.role_keywords.iter().position(|k| k.trim().is_empty()) {
            return Err(format!("role keyword #{index} is empty"));
        }
        Ok(())
    }
}
