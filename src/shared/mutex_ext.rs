//! Usage: Poison-tolerant locking for Tauri-managed state.

use std::sync::{Mutex, MutexGuard};

pub(crate) trait MutexExt<T> {
    /// Locks the mutex, recovering the guard if a previous holder panicked.
    fn lock_or_recover(&self) -> MutexGuard<'_, T>;
}

impl<T> MutexExt<T> for Mutex<T> {
    fn lock_or_recover(&self) -> MutexGuard<'_, T> {
        self.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn lock_or_recover_survives_poisoned_mutex() {
        let shared = Arc::new(Mutex::new(1));
        let poisoner = Arc::clone(&shared);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().expect("lock");
            panic!("poison");
        })
        .join();

        assert!(shared.lock().is_err());
        *shared.lock_or_recover() += 1;
        assert_eq!(*shared.lock_or_recover(), 2);
    }
}
