//! Built-in calculators provided by the billsplit engine.

// Percentage calculators
pub mod percentage_add;

// Allocation calculators
pub mod even_share;
pub mod proportional_allocator;
