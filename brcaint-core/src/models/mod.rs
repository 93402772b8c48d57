pub mod table;

// re-export for cleaner imports
pub use self::table::{Cell, Table};
