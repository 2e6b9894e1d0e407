pub mod enums;
pub mod filters;
pub mod notification;
pub mod patient;
pub mod staff;
pub mod task;

pub use enums::*;
pub use filters::*;
pub use notification::*;
pub use patient::*;
pub use staff::*;
pub use task::*;
