//! Publish/subscribe primitives.
//!
//! A subject owns an [`Observable`] and calls [`Observable::notify`] after
//! each state change. Observers are held as `Arc` handles and compared by
//! pointer identity, so attaching the same handle twice is a no-op while two
//! distinct observers with equal contents are both kept.

mod callback_observer;
mod observable;

pub use callback_observer::CallbackObserver;
pub use observable::Observable;

use crate::error::ObserverResult;

/// Receives change notifications from a subject of type `S`.
pub trait Observer<S: ?Sized>: Send + Sync {
    /// Called synchronously by the subject after its state changed.
    fn update(&self, subject: &S) -> ObserverResult;
}
