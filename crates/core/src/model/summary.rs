/// Fixed suggestions shown with every non-empty summary.
pub const BREAK_RECOMMENDATIONS: [&str; 2] = [
    "Take a 10-15 minute break after every 90 minutes of work.",
    "Use short pauses to stretch or be lazy between tasks!",
];

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Error => "error",
        }
    }
}

/// Motivational tier picked from the number of planned activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motivation {
    /// Nothing planned.
    Relax,
    /// 1 to 3 activities.
    GreatStart,
    /// 4 to 6 activities.
    ProductiveDay,
    /// More than 6 activities.
    PackedSchedule,
}

impl Motivation {
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => Motivation::Relax,
            1..=3 => Motivation::GreatStart,
            4..=6 => Motivation::ProductiveDay,
            _ => Motivation::PackedSchedule,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Motivation::Relax => {
                "No activities planned? Use this time to relax, reflect, or set some goals!"
            }
            Motivation::GreatStart => "You're off to a great start! Focus and finish strong!",
            Motivation::ProductiveDay => {
                "You've got a productive day ahead! Remember to take breaks!"
            }
            Motivation::PackedSchedule => {
                "You have a packed schedule! Stay organized and take care of yourself."
            }
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Motivation::Relax => Tone::Info,
            Motivation::GreatStart | Motivation::ProductiveDay => Tone::Success,
            Motivation::PackedSchedule => Tone::Warning,
        }
    }
}

/// Read-only summary of a day, derived only from how many activities exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    total: usize,
    motivation: Motivation,
}

impl DaySummary {
    #[must_use]
    pub fn for_count(total: usize) -> Self {
        Self {
            total,
            motivation: Motivation::for_count(total),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn motivation(&self) -> Motivation {
        self.motivation
    }

    /// Break suggestions to show under the summary; empty when nothing is planned.
    #[must_use]
    pub fn break_recommendations(&self) -> &'static [&'static str] {
        if self.total > 0 {
            &BREAK_RECOMMENDATIONS
        } else {
            &[]
        }
    }
}
