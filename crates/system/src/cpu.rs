use sysinfo::System;

/// Number of physical cores, used as the default threshold line.
///
/// Falls back to the logical CPU count, then to `1`, so the caller always
/// gets a usable value.
pub fn core_count() -> usize {
    if let Some(n) = System::physical_core_count().filter(|&n| n > 0) {
        return n;
    }

    match std::thread::available_parallelism() {
        Ok(n) => {
            tracing::warn!("Physical core count unavailable; using {n} logical CPUs.");
            n.get()
        }
        Err(e) => {
            tracing::warn!("Cannot detect CPU count ({e}); assuming 1 core.");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_count_is_positive() {
        assert!(core_count() >= 1);
    }
}
