mod fixtures;
mod logs;
mod temp;

pub use fixtures::*;
pub use logs::capture_logs;
pub use temp::TestContext;
