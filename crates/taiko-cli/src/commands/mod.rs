pub mod offset;
pub mod preview;
pub mod scan;
