// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use std::thread;
use std::time::{Duration, Instant};

/// Time given to a broadcast command to reach all workers
#[allow(dead_code)]
pub const SETTLE: Duration = Duration::from_millis(300);

/// Poll `condition` until it holds or the timeout expires
pub fn eventually(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(10));
    }
}
