//! Static display metadata for the resolution modes.
//!
//! Pure data consumed by clients (challenge creation forms, summary panels).
//! The lookups are total over the closed enum; exhaustiveness is checked at
//! compile time by the `match`.

use crate::state::challenge::ResolutionMode;

pub struct ModeInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub difficulty: &'static str,
    pub win_chance: &'static str,
    pub prize_distribution: &'static str,
}

pub struct ModeTheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

pub const fn mode_info(mode: ResolutionMode) -> &'static ModeInfo {
    match mode {
        ResolutionMode::Exact => &ModeInfo {
            name: "Exact Match",
            icon: "🎯",
            description: "Only predictions that match the final result exactly win. \
                If nobody hits it, every stake is returned in full with no fee.",
            example: "Predict 2 goals; the match ends with exactly 2 goals.",
            difficulty: "Hard",
            win_chance: "Low",
            prize_distribution: "95% of the pool, split equally among exact matches",
        },
        ResolutionMode::Closest => &ModeInfo {
            name: "Closest Wins",
            icon: "📏",
            description: "The prediction nearest to the final result takes the pool. \
                Distance ties go to whoever submitted first.",
            example: "Result is 78 points; a prediction of 80 beats 75 and 85.",
            difficulty: "Medium",
            win_chance: "Medium",
            prize_distribution: "95% of the pool to the single closest prediction",
        },
        ResolutionMode::MultiWinner => &ModeInfo {
            name: "Multi-Winner",
            icon: "🏆",
            description: "Several ranked winners by closeness, paid on a descending \
                percentage curve. Winner count is fixed or a share of the field.",
            example: "Top 3 of 20 entrants split the pool 60/25/15.",
            difficulty: "Easy",
            win_chance: "High",
            prize_distribution: "Percentage curve over 95% of the pool (70/30, 60/25/15, ...)",
        },
    }
}

pub const fn mode_theme(mode: ResolutionMode) -> &'static ModeTheme {
    match mode {
        ResolutionMode::Exact => &ModeTheme {
            primary: "#ef4444",
            secondary: "#fef2f2",
            accent: "#b91c1c",
        },
        ResolutionMode::Closest => &ModeTheme {
            primary: "#3b82f6",
            secondary: "#eff6ff",
            accent: "#1d4ed8",
        },
        ResolutionMode::MultiWinner => &ModeTheme {
            primary: "#f59e0b",
            secondary: "#fffbeb",
            accent: "#b45309",
        },
    }
}
