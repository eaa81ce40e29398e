use serde::Serialize;

/// Number of minutes in a local calendar day; window minutes live in
/// `0..=1439` and windows never span midnight.
pub const MAX_MINUTE: u32 = 1439;

/// Weekday-mask bit for every weekday (bits 1=Sunday .. 7=Saturday set).
pub const ALL_DAYS_MASK: u8 = 0b1111_1110;

/// Recurring weekly eating-window rule.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub id: i64,
    pub name: String,         // ⇔ schedules.name
    pub start_minutes: u32,   // ⇔ schedules.start_minutes (0..=1439)
    pub end_minutes: u32,     // ⇔ schedules.end_minutes (0..=1439)
    pub weekday_mask: u8,     // ⇔ schedules.weekday_mask (bit N, 1=Sun..7=Sat)
    pub built_in: bool,       // ⇔ schedules.built_in (templates: copy, never edit)
}

impl Schedule {
    /// True if the given weekday (1=Sunday .. 7=Saturday) is an eating day
    /// by default for this schedule.
    pub fn is_active_on(&self, weekday: u32) -> bool {
        (1..=7).contains(&weekday) && self.weekday_mask & (1u8 << weekday) != 0
    }

    /// Copy a schedule into a new user-editable record.
    /// Built-in templates must never be mutated in place.
    pub fn duplicate_as(&self, name: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            start_minutes: self.start_minutes,
            end_minutes: self.end_minutes,
            weekday_mask: self.weekday_mask,
            built_in: false,
        }
    }
}

const DAY_NAMES: [(&str, u32); 7] = [
    ("sun", 1),
    ("mon", 2),
    ("tue", 3),
    ("wed", 4),
    ("thu", 5),
    ("fri", 6),
    ("sat", 7),
];

/// Parse a comma-separated weekday list ("mon,thu,sun") into a mask.
/// "all" and "daily" select every weekday.
pub fn parse_weekday_mask(s: &str) -> Option<u8> {
    let s = s.trim().to_lowercase();
    if s == "all" || s == "daily" {
        return Some(ALL_DAYS_MASK);
    }

    let mut mask: u8 = 0;
    for part in s.split(',') {
        let part = part.trim();
        let n = DAY_NAMES
            .iter()
            .find(|(name, _)| part.starts_with(name))
            .map(|(_, n)| *n)?;
        mask |= 1u8 << n;
    }

    if mask == 0 { None } else { Some(mask) }
}

/// Render a mask back to a readable day list ("mon,thu" or "daily").
pub fn describe_weekday_mask(mask: u8) -> String {
    if mask == ALL_DAYS_MASK {
        return "daily".to_string();
    }

    let mut out: Vec<&str> = Vec::new();
    for (name, n) in DAY_NAMES {
        if mask & (1u8 << n) != 0 {
            out.push(name);
        }
    }
    out.join(",")
}
