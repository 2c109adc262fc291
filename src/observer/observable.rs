use super::Observer;
use crate::error::NotifyError;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ordered set of observers for a subject of type `S`.
///
/// The list is guarded by a lock so a subject can be shared across threads.
/// `notify` works on a snapshot of the list, which lets an observer attach
/// or detach observers from inside its own `update`; such changes apply to
/// the next notification.
pub struct Observable<S: ?Sized> {
    observers: RwLock<Vec<Arc<dyn Observer<S>>>>,
}

impl<S: ?Sized> Observable<S> {
    /// Create an observable with no observers.
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Attach an observer unless this exact handle is already attached.
    ///
    /// Returns `true` when the observer was added.
    pub fn attach(&self, observer: Arc<dyn Observer<S>>) -> bool {
        let mut observers = self.write();
        if observers.iter().any(|o| same_observer(o, &observer)) {
            return false;
        }
        observers.push(observer);
        true
    }

    /// Detach an observer. Unknown observers are ignored.
    ///
    /// Returns `true` when the observer was attached.
    pub fn detach(&self, observer: &Arc<dyn Observer<S>>) -> bool {
        let mut observers = self.write();
        let before = observers.len();
        observers.retain(|o| !same_observer(o, observer));
        observers.len() != before
    }

    /// Call `update(subject)` on every attached observer in attachment order.
    ///
    /// All observers run even when some fail; failures are returned together.
    pub fn notify(&self, subject: &S) -> Result<(), NotifyError> {
        let snapshot: Vec<Arc<dyn Observer<S>>> = self.read().clone();
        let mut failures = Vec::new();

        for (position, observer) in snapshot.iter().enumerate() {
            if let Err(err) = observer.update(subject) {
                failures.push((position, err));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(NotifyError {
                attempted: snapshot.len(),
                failures,
            })
        }
    }

    /// Number of attached observers.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no observer is attached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned list is still a valid list.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<dyn Observer<S>>>> {
        self.observers.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Arc<dyn Observer<S>>>> {
        self.observers.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl<S: ?Sized> Default for Observable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> std::fmt::Debug for Observable<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("observers", &self.len())
            .finish()
    }
}

/// Compare data pointers only; vtable pointers for the same type may differ
/// between codegen units.
fn same_observer<S: ?Sized>(a: &Arc<dyn Observer<S>>, b: &Arc<dyn Observer<S>>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}
