//! Historical Dataset Layout
//!
//! Column indices of the balance table. Columns 4 to 6 hold quantities the
//! reduction does not use.

/// Angle of attack (degrees).
pub const ANGLE_COLUMN: usize = 0;

/// Fore load cell reading (V).
pub const FORE_COLUMN: usize = 1;

/// Drag load cell reading (V).
pub const DRAG_COLUMN: usize = 2;

/// Aft load cell reading (V).
pub const AFT_COLUMN: usize = 3;

/// Micromanometer dynamic pressure (Pa).
pub const DYNAMIC_PRESSURE_COLUMN: usize = 7;

/// Minimum number of columns a row must carry.
pub const MIN_COLUMNS: usize = DYNAMIC_PRESSURE_COLUMN + 1;

/// Row holding the wind-off tare reading.
pub const TARE_ROW: usize = 0;
