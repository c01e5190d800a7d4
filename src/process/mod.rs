/*!
 * Process Module
 * Process records and the canonical process table
 */

pub mod record;
pub mod table;

pub use record::ProcessRecord;
pub use table::ProcessTable;
