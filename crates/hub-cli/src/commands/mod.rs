pub mod console;
pub mod session;
pub mod social;
pub mod spaces;
