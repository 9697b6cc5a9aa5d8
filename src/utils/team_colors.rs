// Jolpica carries no team colours, so standings and win tallies use this table.
// Order matters for the substring fallback.
const TEAM_COLORS: &[(&str, &str)] = &[
    ("Red Bull", "3671C6"),
    ("Mercedes", "27F4D2"),
    ("Ferrari", "E80020"),
    ("McLaren", "FF8000"),
    ("Aston Martin", "229971"),
    ("Alpine", "0093CC"),
    ("Williams", "64C4FF"),
    ("RB", "6692FF"),
    ("Kick Sauber", "52E252"),
    ("Haas", "B6BABD"),
    ("Haas F1 Team", "B6BABD"),
];

const UNKNOWN_TEAM_COLOR: &str = "000000";

/// Hex colour (no `#`) for a team name: exact match, then the first known name
/// contained in `team_name`, then black.
pub fn resolve_color(team_name: &str) -> String {
    TEAM_COLORS
        .iter()
        .find(|(name, _)| *name == team_name)
        .or_else(|| {
            TEAM_COLORS
                .iter()
                .find(|(name, _)| team_name.contains(name))
        })
        .map_or(UNKNOWN_TEAM_COLOR, |(_, color)| *color)
        .to_string()
}
