use chrono::Duration;
use serde::Serialize;

const POINTS_TABLE: [u32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

pub const FASTEST_LAP_BONUS: u32 = 1;

/// Championship points for a finishing position. Anything outside the top ten,
/// and unclassified drivers, score nothing.
pub fn points_for_position(position: Option<u32>) -> u32 {
    match position {
        Some(p @ 1..=10) => POINTS_TABLE[(p - 1) as usize],
        _ => 0,
    }
}

/// Points for a finisher including the fastest-lap bonus, which only counts
/// inside the top ten.
pub fn race_points(position: Option<u32>, has_fastest_lap: bool) -> u32 {
    let base = points_for_position(position);
    match position {
        Some(p) if has_fastest_lap && p <= 10 => base + FASTEST_LAP_BONUS,
        _ => base,
    }
}

/// The sessions of a race weekend, keyed the way Jolpica names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekendSlot {
    FirstPractice,
    SecondPractice,
    ThirdPractice,
    SprintQualifying,
    Sprint,
    Qualifying,
    Race,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionCategory {
    Practice,
    Qualifying,
    Race,
}

impl WeekendSlot {
    pub const ALL: [WeekendSlot; 7] = [
        WeekendSlot::FirstPractice,
        WeekendSlot::SecondPractice,
        WeekendSlot::ThirdPractice,
        WeekendSlot::SprintQualifying,
        WeekendSlot::Sprint,
        WeekendSlot::Qualifying,
        WeekendSlot::Race,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            WeekendSlot::FirstPractice => "Practice 1",
            WeekendSlot::SecondPractice => "Practice 2",
            WeekendSlot::ThirdPractice => "Practice 3",
            WeekendSlot::SprintQualifying => "Sprint Qualifying",
            WeekendSlot::Sprint => "Sprint",
            WeekendSlot::Qualifying => "Qualifying",
            WeekendSlot::Race => "Race",
        }
    }

    /// Expected length of the session, used to estimate its end time.
    pub fn duration(self) -> Duration {
        let minutes = match self {
            WeekendSlot::SprintQualifying => 45,
            WeekendSlot::Race => 120,
            _ => 60,
        };
        Duration::minutes(minutes)
    }

    pub fn category(self) -> SessionCategory {
        match self {
            WeekendSlot::FirstPractice
            | WeekendSlot::SecondPractice
            | WeekendSlot::ThirdPractice => SessionCategory::Practice,
            WeekendSlot::SprintQualifying | WeekendSlot::Qualifying => SessionCategory::Qualifying,
            WeekendSlot::Sprint | WeekendSlot::Race => SessionCategory::Race,
        }
    }
}

/// Maps an OpenF1 session name onto a weekend slot.
pub fn map_session_name(external: &str) -> Option<WeekendSlot> {
    match external {
        "Practice 1" => Some(WeekendSlot::FirstPractice),
        "Practice 2" => Some(WeekendSlot::SecondPractice),
        "Practice 3" => Some(WeekendSlot::ThirdPractice),
        "Sprint Qualifying" | "Sprint Shootout" => Some(WeekendSlot::SprintQualifying),
        "Sprint" => Some(WeekendSlot::Sprint),
        "Qualifying" => Some(WeekendSlot::Qualifying),
        "Race" => Some(WeekendSlot::Race),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_follow_the_top_ten_table() {
        let expected = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];
        for (i, points) in expected.iter().enumerate() {
            assert_eq!(points_for_position(Some(i as u32 + 1)), *points);
        }
        assert_eq!(points_for_position(Some(11)), 0);
        assert_eq!(points_for_position(Some(20)), 0);
        assert_eq!(points_for_position(Some(0)), 0);
        assert_eq!(points_for_position(None), 0);
    }

    #[test]
    fn fastest_lap_bonus_only_inside_top_ten() {
        assert_eq!(race_points(Some(2), true), 19);
        assert_eq!(race_points(Some(10), true), 2);
        assert_eq!(race_points(Some(11), true), 0);
        assert_eq!(race_points(None, true), 0);
        assert_eq!(race_points(Some(1), false), 25);
    }

    #[test]
    fn slot_durations() {
        assert_eq!(WeekendSlot::FirstPractice.duration(), Duration::minutes(60));
        assert_eq!(WeekendSlot::SprintQualifying.duration(), Duration::minutes(45));
        assert_eq!(WeekendSlot::Race.duration(), Duration::minutes(120));
    }

    #[test]
    fn sprint_counts_as_race_category() {
        assert_eq!(WeekendSlot::Sprint.category(), SessionCategory::Race);
        assert_eq!(WeekendSlot::SprintQualifying.category(), SessionCategory::Qualifying);
        assert_eq!(map_session_name("Sprint Shootout"), Some(WeekendSlot::SprintQualifying));
        assert_eq!(map_session_name("Day 1"), None);
    }
}
