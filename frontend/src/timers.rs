use std::time::Duration;

use gloo_timers::callback::Interval;
use shared::scheduler::{Scheduler, TaskHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

fn millis(duration: Duration) -> i32 {
    duration.as_millis().min(i32::MAX as u128) as i32
}

/// Scheduler on the browser's own timers.
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = TaskHandle::new();
        let token = handle.token();
        let Some(window) = window() else {
            log::error!("No window; dropping a scheduled task");
            handle.cancel();
            return handle;
        };

        // Freed by wasm-bindgen after it runs, so nobody has to hold on to it
        let callback = Closure::once_into_js(move || {
            if !token.is_cancelled() {
                task();
            }
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            millis(delay),
        ) {
            Ok(id) => handle.set_on_cancel(move || {
                if let Some(window) = web_sys::window() {
                    window.clear_timeout_with_handle(id);
                }
            }),
            Err(e) => {
                web_sys::console::error_1(&e);
                handle.cancel();
            }
        }
        handle
    }

    fn schedule_repeating(&self, period: Duration, mut task: Box<dyn FnMut()>) -> TaskHandle {
        let handle = TaskHandle::new();
        let token = handle.token();
        let interval = Interval::new(period.as_millis().min(u32::MAX as u128) as u32, move || {
            if !token.is_cancelled() {
                task();
            }
        });

        // The interval is usually cancelled from inside its own callback.
        // Release it on the next turn instead of freeing a running closure.
        handle.set_on_cancel(move || spawn_local(async move { drop(interval) }));
        handle
    }
}
