// Singleton: every caller shares one lazily created instance.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;

use crate::console::{say, Console};

#[derive(Debug)]
pub struct Counter {
    count: AtomicU32,
}

lazy_static! {
    static ref INSTANCE: Counter = Counter {
        count: AtomicU32::new(0),
    };
    static ref DEMO_LOCK: Mutex<()> = Mutex::new(());
}

impl Counter {
    pub fn instance() -> &'static Counter {
        &*INSTANCE
    }

    pub fn count(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }

    pub fn increase(&self) -> u32 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

// Serializes everything that reads or resets the shared count.
pub(crate) fn exclusive() -> MutexGuard<'static, ()> {
    DEMO_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn demo(out: &mut dyn Console) {
    let _guard = exclusive();
    Counter::instance().reset();

    let counter1 = Counter::instance();
    let counter2 = Counter::instance();

    counter1.increase();
    counter1.increase();
    counter2.increase();
    counter2.increase();

    say!(out, "same instance: {}", std::ptr::eq(counter1, counter2));
    say!(out, "count via counter1: {}", counter1.count());
    say!(out, "count via counter2: {}", counter2.count());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_same_instance() {
        assert!(std::ptr::eq(Counter::instance(), Counter::instance()));
    }

    #[test]
    fn test_increase_visible_everywhere() {
        let _guard = exclusive();
        let counter = Counter::instance();
        counter.reset();
        assert_eq!(counter.increase(), 1);
        assert_eq!(Counter::instance().count(), 1);
    }

    #[test]
    fn test_demo_is_repeatable() {
        for _ in 0..2 {
            let mut out = Transcript::new();
            demo(&mut out);
            assert_eq!(
                out.lines(),
                [
                    "same instance: true",
                    "count via counter1: 4",
                    "count via counter2: 4",
                ]
            );
        }
    }
}
