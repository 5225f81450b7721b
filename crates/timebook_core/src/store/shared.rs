//! Thread-shareable handle around a `TimeBook`.
//!
//! One readers-writer lock guards the whole triad, since a cascading delete
//! touches two stores in one step. Reads run concurrently; a write excludes
//! everything else.

use crate::store::timebook::TimeBook;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone, Default)]
pub struct SharedTimeBook {
    inner: Arc<RwLock<TimeBook>>,
}

impl SharedTimeBook {
    pub fn new(book: TimeBook) -> Self {
        Self {
            inner: Arc::new(RwLock::new(book)),
        }
    }

    /// Runs `f` under the shared read lock.
    pub fn read<R>(&self, f: impl FnOnce(&TimeBook) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    /// Runs `f` under the exclusive write lock.
    ///
    /// A panic inside an earlier writer poisons the lock; store mutations are
    /// all-or-nothing, so the book is still consistent and is recovered.
    pub fn write<R>(&self, f: impl FnOnce(&mut TimeBook) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}

#[cfg(test)]
mod tests {
    use super::SharedTimeBook;
    use crate::model::descriptor::PersonDescriptor;
    use std::thread;

    #[test]
    fn concurrent_writers_are_serialized() {
        let shared = SharedTimeBook::default();
        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for index in 0..25 {
                        let descriptor =
                            PersonDescriptor::new().with_name(format!("p{worker}-{index}"));
                        shared.write(|book| book.add_person(&descriptor).map(|p| p.id()))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let (count, watermark) = shared.read(|book| (book.persons().len(), book.persons().watermark()));
        assert_eq!(count, 100);
        assert_eq!(watermark, 100);
    }

    #[test]
    fn panicking_writer_does_not_lock_out_later_callers() {
        let shared = SharedTimeBook::default();
        shared
            .write(|book| book.add_person(&PersonDescriptor::new().with_name("Kept")).map(|p| p.id()))
            .unwrap();

        let poisoner = shared.clone();
        let outcome = thread::spawn(move || {
            poisoner.write(|_| panic!("writer failed mid-command"));
        })
        .join();
        assert!(outcome.is_err());
        assert!(shared.inner.is_poisoned());

        assert_eq!(shared.read(|book| book.persons().len()), 1);
        let added = shared
            .write(|book| book.add_person(&PersonDescriptor::new().with_name("After")).map(|p| p.id()))
            .unwrap();
        assert_eq!(added.value(), 1);
    }
}
