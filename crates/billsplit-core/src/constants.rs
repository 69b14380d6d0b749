/// Allocation constants
pub mod allocation {
    /// Percentage the whole bill represents
    pub const FULL_SHARE: f64 = 100.0;

    /// Absolute tolerance when checking that custom percentages sum to
    /// [`FULL_SHARE`]; the bound itself is accepted
    pub const PERCENTAGE_TOLERANCE: f64 = 0.1;
}

/// Defaults applied to a fresh session
pub mod defaults {
    /// Service rating used while custom tip is disabled
    pub const TIP_PERCENT: f64 = 15.0;

    /// People count of a fresh session
    pub const NUMBER_OF_PEOPLE: u32 = 1;
}

/// Input limits
pub mod limits {
    /// Largest people count a split accepts; a roster never grows past it
    pub const MAX_PEOPLE: u32 = 1_000;
}
