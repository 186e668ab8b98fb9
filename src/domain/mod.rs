pub mod change_block;
pub mod hunk;
pub mod line_record;
