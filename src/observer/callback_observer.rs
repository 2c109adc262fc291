use super::Observer;
use crate::error::ObserverResult;

/// Observer backed by a closure.
///
/// ```
/// use std::sync::Arc;
/// use contact_book::error::ObserverResult;
/// use contact_book::observer::{CallbackObserver, Observable};
///
/// let observable: Observable<u32> = Observable::new();
/// observable.attach(Arc::new(CallbackObserver::new(|value: &u32| -> ObserverResult {
///     assert_eq!(*value, 7);
///     Ok(())
/// })));
/// observable.notify(&7).unwrap();
/// ```
pub struct CallbackObserver<F> {
    callback: F,
}

impl<F> CallbackObserver<F> {
    /// Wrap a closure as an observer.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<S, F> Observer<S> for CallbackObserver<F>
where
    S: ?Sized,
    F: Fn(&S) -> ObserverResult + Send + Sync,
{
    fn update(&self, subject: &S) -> ObserverResult {
        (self.callback)(subject)
    }
}

impl<F> std::fmt::Debug for CallbackObserver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackObserver").finish_non_exhaustive()
    }
}
