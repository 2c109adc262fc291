#![allow(dead_code)]

mod mock_contact_repository;
mod recording_observer;
mod shared_buffer;

pub use mock_contact_repository::MockContactRepository;
pub use recording_observer::{FailingObserver, RecordingObserver};
pub use shared_buffer::SharedBuffer;
