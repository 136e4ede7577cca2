pub mod confetti;
pub mod constants;
pub mod error;
pub mod options;
pub mod palette;
pub mod shared_wheel_game;
pub mod storage;
pub mod validation;
pub mod view;
pub mod wheel_motion;

pub use error::{StorageError, WheelError};
pub use options::{OptionList, OptionStore};
pub use shared_wheel_game::{SpinOutcome, SpinState, WheelGame};
pub use storage::{KeyValueStore, MemoryStore};
