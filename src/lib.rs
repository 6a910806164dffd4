pub mod acoustic;
pub mod measurement;
pub mod mls;
pub mod ui;
pub mod utils;
