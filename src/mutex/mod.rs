mod error;
mod mutex;

pub use error::LockingError;
pub use mutex::Mutex;
