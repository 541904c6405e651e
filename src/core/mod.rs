pub mod greeting;
pub mod runner;
pub mod status;

pub use greeting::{bar, GREETING};
pub use runner::{emit, foo};
pub use status::{baz, SUCCESS_STATUS};
