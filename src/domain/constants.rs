//! Physical and scheme-level constants.
//!
//! Conversion factors follow the scheme's notified methodology. Changing any
//! of them changes certificate counts, so they are constants rather than
//! configuration.

/// Tonnes of CO2 emitted per MMBTU of fuel burned (refinery fuel-mix average).
pub const CO2_TONNES_PER_MMBTU: f64 = 0.07;

/// MMBTU per tonne of oil equivalent, the unit certificates are issued in.
pub const MMBTU_PER_TOE: f64 = 41.868;

/// Rated capacity is quoted in million tonnes per annum.
pub const TONNES_PER_MMTPA: f64 = 1e6;

/// Market-level rupee values are reported in crore.
pub const INR_PER_CRORE: f64 = 1e7;

/// Capacity above which the large-facility model adjustment applies (strict).
pub const LARGE_FACILITY_MMTPA: f64 = 10.0;

/// Last enrollment cycle counted as early entry.
pub const EARLY_ENTRY_MAX_CYCLE: u32 = 2;
