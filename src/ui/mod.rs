mod compose;
mod help;
mod messages;
mod reader;
mod sidebar;

pub use compose::*;
pub use help::*;
pub use messages::*;
pub use reader::*;
pub use sidebar::*;
