//! Isolation harness for tests touching the type-owned cup registry.
//!
//! Every test that constructs cups is declared through [`isolated_test!`](crate::isolated_test).
//! Before the body runs, the harness takes the suite-wide test lock and then clears the
//! registry. Tests never call the reset themselves.

use crate::core::cup::Cup;
use crate::core::registry::RegistryState;
use rstest::fixture;
use std::sync::{Arc, Mutex, MutexGuard, Once, PoisonError};
use tracing_subscriber::{EnvFilter, fmt};

static TRACING: Once = Once::new();

// Serialises tests over the process-wide registry.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Loads `.env` (if any) and installs a test subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = dotenvy::dotenv();
        let _ = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// View on the registry handed to isolated tests.
///
/// Holds the test lock until dropped, so no other isolated test touches the registry meanwhile.
#[derive(Debug)]
pub struct RegistryProbe {
    _lock: MutexGuard<'static, ()>,
}

impl RegistryProbe {
    pub fn len(&self) -> usize {
        Cup::registry_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn state(&self) -> RegistryState {
        Cup::registry_state()
    }

    pub fn instances(&self) -> Vec<Arc<Cup>> {
        Cup::instances()
    }

    /// Clears the registry again without giving up the lock.
    pub fn reset(&self) {
        Cup::clear_registry();
    }
}

/// Takes the test lock, then clears the registry unconditionally.
pub fn reset_registry() -> RegistryProbe {
    init_tracing();
    // A failing test poisons the lock; the registry is cleared below anyway.
    let lock = TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    Cup::clear_registry();
    RegistryProbe { _lock: lock }
}

#[fixture]
pub fn clean_registry() -> RegistryProbe {
    reset_registry()
}

/// Declares an rstest test whose body starts with an empty cup registry.
///
/// The first parameter binds the [`RegistryProbe`]. Bind it to a name (`_registry` is fine, `_`
/// is not) so the lock is held for the whole body. Further parameters are passed to rstest as
/// they are, so `#[case]` attributes keep working.
#[macro_export]
macro_rules! isolated_test {
    (
        $(#[$meta:meta])*
        fn $name:ident($registry:pat $(, $(#[$arg_meta:meta])* $arg:ident : $arg_ty:ty)* $(,)?)
        $body:block
    ) => {
        #[rstest::rstest]
        $(#[$meta])*
        fn $name($($(#[$arg_meta])* $arg: $arg_ty),*) {
            let $registry = $crate::test_support::isolation::reset_registry();
            $body
        }
    };
}

#[cfg(test)]
mod isolation_tests {
    use super::*;
    use crate::core::cup_size::CupSize;
    use crate::isolated_test;
    use rstest::rstest;

    #[rstest]
    fn it_should_hand_out_an_empty_registry_through_the_fixture(clean_registry: RegistryProbe) {
        assert!(clean_registry.is_empty());
        assert_eq!(clean_registry.state(), RegistryState::Empty);
    }

    isolated_test! {
        fn it_should_empty_a_registry_left_populated_by_earlier_work(registry) {
            let _leftover = Cup::builder().name("leftover").build();
            let _another = Cup::builder().size(CupSize::Medium).build();
            assert_eq!(registry.len(), 2);

            registry.reset();

            assert!(registry.is_empty());
            assert!(registry.instances().is_empty());
        }
    }

    isolated_test! {
        fn it_should_see_what_the_test_builds(registry) {
            let cup = Cup::builder().name("probe").build();

            assert_eq!(registry.len(), 1);
            assert_eq!(registry.state(), RegistryState::Populated(1));
            assert!(Arc::ptr_eq(&registry.instances()[0], &cup));
        }
    }

    isolated_test! {
        #[case(CupSize::Small)]
        #[case(CupSize::Large)]
        fn it_should_start_every_case_empty(registry, #[case] size: CupSize) {
            assert!(registry.is_empty());
            let _cup = Cup::builder().size(size).build();
            assert_eq!(registry.len(), 1);
        }
    }

    // Each of these leaves cups behind in the shared registry. Whichever runs later only starts
    // empty if the harness cleared what the earlier one left.
    isolated_test! {
        #[case(1)]
        #[case(2)]
        #[case(3)]
        fn it_should_not_see_cups_left_by_other_tests(registry, #[case] count: usize) {
            assert_eq!(registry.len(), 0);

            for _ in 0..count {
                Cup::builder().size(CupSize::Small).build();
            }

            assert_eq!(registry.len(), count);
        }
    }
}
