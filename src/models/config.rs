//! Engine configuration: the point values and rating bounds that are a
//! configuration concern rather than a structural one.

/// Numeric knobs for the scoring engine. Injected at construction alongside
/// the event catalog; tests substitute their own values.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Rating assigned to a new player when none is supplied.
    pub default_rating: i32,
    pub rating_min: i32,
    pub rating_max: i32,
    /// Tournament points every participant starts a tournament with.
    pub starting_points: i32,
    /// Points credited to the winner of a match (loser gets none).
    pub win_points: i32,
    /// Points credited to both players of a drawn match.
    pub draw_points: i32,
    /// Rating bonus applied to the champion at finalization.
    pub champion_rating_bonus: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_rating: 1000,
            rating_min: 1,
            rating_max: 15000,
            starting_points: 70,
            win_points: 30,
            draw_points: 15,
            champion_rating_bonus: 50,
        }
    }
}
