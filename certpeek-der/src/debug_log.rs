#[cfg(not(feature = "debug_log"))]
macro_rules! debug_log {
    () => {};
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug_log")]
#[macro_use]
pub(crate) mod internal {
    use std::cell::Cell;

    thread_local! {
        static DEPTH: Cell<u8> = const { Cell::new(0) };
    }

    /// Nests every trace emitted on this thread one level deeper until dropped
    pub(crate) struct Indenter;

    impl Indenter {
        pub(crate) fn indent() -> Indenter {
            DEPTH.with(|depth| depth.set(depth.get().saturating_add(1)));
            Self
        }
    }

    impl Drop for Indenter {
        fn drop(&mut self) {
            DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
        }
    }

    pub(crate) fn blanks() -> String {
        "| ".repeat(usize::from(DEPTH.with(Cell::get)))
    }

    macro_rules! debug_log {
        () => {
            log::trace!("|");
        };
        ($($arg:tt)*) => {
            log::trace!("{}{}", $crate::debug_log::internal::blanks(), format_args!($($arg)*));
            let _indenter = $crate::debug_log::internal::Indenter::indent();
        };
    }
}
