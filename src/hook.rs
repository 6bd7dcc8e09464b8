use std::collections::HashSet;
use std::time::Instant;

use crate::error::OverlayError;

/// Runs after the wrapped callable returns, with the call arguments, the
/// original result, and the elapsed milliseconds when timing was requested.
pub type AfterHook<A, R> = Box<dyn FnMut(&A, &R, Option<f64>)>;

/// An interception point around one of the host's frame-loop entry points.
///
/// The host swaps its own callable for `Hooked::call`: the original runs
/// exactly once per invocation, synchronously, with unmodified arguments,
/// and its return value is handed back unchanged. The original is retained
/// for the lifetime of the hook so it can be restored on uninstall.
pub struct Hooked<A, R> {
    target: String,
    method: String,
    original: Box<dyn FnMut(A) -> R>,
    after: AfterHook<A, R>,
    timed: bool,
}

impl<A: Clone, R> Hooked<A, R> {
    pub fn call(&mut self, args: A) -> R {
        let seen = args.clone();
        let started = self.timed.then(Instant::now);
        let result = (self.original)(args);
        let elapsed_ms = started.map(|t| t.elapsed().as_secs_f64() * 1000.0);
        (self.after)(&seen, &result, elapsed_ms);
        result
    }
}

impl<A, R> Hooked<A, R> {
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn method(&self) -> &str {
        &self.method
    }
}

/// Tracks which (target, method) pairs carry a hook, so a pair can be
/// wrapped at most once at a time.
#[derive(Default)]
pub struct HookManager {
    installed: HashSet<(String, String)>,
}

impl HookManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `original` with timing and the `after` callback. Fails if the
    /// (target, method) pair already carries a hook.
    pub fn install<A, R>(
        &mut self,
        target: &str,
        method: &str,
        original: Box<dyn FnMut(A) -> R>,
        after: AfterHook<A, R>,
        timed: bool,
    ) -> Result<Hooked<A, R>, OverlayError> {
        if !self.installed.insert((target.to_string(), method.to_string())) {
            return Err(OverlayError::HookInstalled {
                target: target.to_string(),
                method: method.to_string(),
            });
        }
        log::debug!("hook installed for {}::{}", target, method);
        Ok(Hooked {
            target: target.to_string(),
            method: method.to_string(),
            original,
            after,
            timed,
        })
    }

    /// Remove the registration and hand the retained original back to the
    /// caller, restoring the call site to its unwrapped behavior.
    pub fn uninstall<A, R>(&mut self, hooked: Hooked<A, R>) -> Box<dyn FnMut(A) -> R> {
        self.installed
            .remove(&(hooked.target.clone(), hooked.method.clone()));
        log::debug!("hook removed for {}::{}", hooked.target, hooked.method);
        hooked.original
    }

    pub fn is_installed(&self, target: &str, method: &str) -> bool {
        self.installed
            .contains(&(target.to_string(), method.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn original_runs_once_and_result_passes_through() {
        let calls = Rc::new(Cell::new(0u32));
        let counted = Rc::clone(&calls);
        let mut hooks = HookManager::new();
        let mut hooked = hooks
            .install(
                "game",
                "update",
                Box::new(move |(a, b): (i32, i32)| {
                    counted.set(counted.get() + 1);
                    a + b
                }),
                Box::new(|args, result, _| {
                    assert_eq!(*args, (3, 4));
                    assert_eq!(*result, 7);
                }),
                true,
            )
            .unwrap();

        assert_eq!(hooked.call((3, 4)), 7);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn timed_hook_reports_elapsed_untimed_does_not() {
        let mut hooks = HookManager::new();
        let mut timed = hooks
            .install(
                "game",
                "draw",
                Box::new(|()| ()),
                Box::new(|_, _, elapsed| assert!(elapsed.is_some_and(|ms| ms >= 0.0))),
                true,
            )
            .unwrap();
        timed.call(());

        let mut untimed = hooks
            .install(
                "video",
                "resize",
                Box::new(|_scale: (f32, f32)| ()),
                Box::new(|_, _, elapsed| assert!(elapsed.is_none())),
                false,
            )
            .unwrap();
        untimed.call((1.0, 2.0));
    }

    #[test]
    fn duplicate_install_is_rejected() {
        let mut hooks = HookManager::new();
        let first = hooks.install(
            "game",
            "update",
            Box::new(|dt: f32| dt),
            Box::new(|_, _, _| {}),
            true,
        );
        assert!(first.is_ok());
        let second = hooks.install(
            "game",
            "update",
            Box::new(|dt: f32| dt),
            Box::new(|_, _, _| {}),
            true,
        );
        assert!(matches!(
            second,
            Err(OverlayError::HookInstalled { .. })
        ));
    }

    #[test]
    fn uninstall_restores_the_original_and_frees_the_slot() {
        let mut hooks = HookManager::new();
        let hooked = hooks
            .install(
                "game",
                "update",
                Box::new(|dt: f32| dt * 2.0),
                Box::new(|_, _, _| {}),
                true,
            )
            .unwrap();
        assert!(hooks.is_installed("game", "update"));

        let mut original = hooks.uninstall(hooked);
        assert!(!hooks.is_installed("game", "update"));
        assert_eq!(original(21.0), 42.0);

        // the pair can be wrapped again afterwards
        assert!(hooks
            .install(
                "game",
                "update",
                original,
                Box::new(|_, _, _| {}),
                true,
            )
            .is_ok());
    }
}
