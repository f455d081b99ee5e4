/// Points awarded to the winning team
pub const WIN_POINTS: u32 = 2;

/// Points awarded to the losing team
pub const LOSS_POINTS: u32 = 0;

/// Points awarded to each team after a tie
pub const TIE_POINTS: u32 = 1;

/// Points awarded to each team when a match is abandoned (rain, bad light)
pub const NO_RESULT_POINTS: u32 = 1;

/// Result label for a decided match
pub const RESULT_WIN: &str = "win";

/// Result label for a tied match
pub const RESULT_TIE: &str = "tie";

/// Result label for an abandoned match
pub const RESULT_NO_RESULT: &str = "no_result";
