use crate::utils::error::{FlameError, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-actor, per-command cooldown bookkeeping. Entries store the instant
/// the cooldown ends; expired entries are pruned as they are touched.
#[derive(Default)]
pub struct CooldownMap {
    entries: Mutex<HashMap<(Uuid, String), Instant>>,
}

impl CooldownMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors with the remaining whole seconds (rounded up) when the
    /// actor's cooldown for this command is still running.
    pub fn check(&self, actor: Uuid, command: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        let key = (actor, command.to_string());
        match entries.get(&key) {
            Some(expiry) => {
                let now = Instant::now();
                if *expiry > now {
                    let remaining = *expiry - now;
                    Err(FlameError::CooldownActive {
                        remaining_secs: remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0),
                    })
                } else {
                    entries.remove(&key);
                    Ok(())
                }
            }
            None => Ok(()),
        }
    }

    pub fn arm(&self, actor: Uuid, command: &str, duration: Duration) {
        self.entries
            .lock()
            .insert((actor, command.to_string()), Instant::now() + duration);
    }

    pub fn clear(&self, actor: Uuid, command: &str) {
        self.entries.lock().remove(&(actor, command.to_string()));
    }

    pub fn clear_all(&self, actor: Uuid) {
        self.entries.lock().retain(|(id, _), _| *id != actor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_is_clear() {
        let map = CooldownMap::new();
        assert!(map.check(Uuid::new_v4(), "spawn").is_ok());
    }

    #[test]
    fn test_armed_blocks_and_reports_seconds() {
        let map = CooldownMap::new();
        let id = Uuid::new_v4();
        map.arm(id, "spawn", Duration::from_secs(10));
        match map.check(id, "spawn").unwrap_err() {
            FlameError::CooldownActive { remaining_secs } => {
                assert!(remaining_secs >= 9 && remaining_secs <= 10);
            }
            other => panic!("expected CooldownActive, got {:?}", other),
        }
        // a different command is unaffected
        assert!(map.check(id, "home").is_ok());
        // a different actor is unaffected
        assert!(map.check(Uuid::new_v4(), "spawn").is_ok());
    }

    #[test]
    fn test_expired_entry_is_pruned() {
        let map = CooldownMap::new();
        let id = Uuid::new_v4();
        map.arm(id, "spawn", Duration::from_nanos(1));
        std::thread::sleep(Duration::from_millis(5));
        assert!(map.check(id, "spawn").is_ok());
        assert!(map.check(id, "spawn").is_ok());
    }

    #[test]
    fn test_clear() {
        let map = CooldownMap::new();
        let id = Uuid::new_v4();
        map.arm(id, "spawn", Duration::from_secs(60));
        map.clear(id, "spawn");
        assert!(map.check(id, "spawn").is_ok());

        map.arm(id, "spawn", Duration::from_secs(60));
        map.arm(id, "home", Duration::from_secs(60));
        map.clear_all(id);
        assert!(map.check(id, "spawn").is_ok());
        assert!(map.check(id, "home").is_ok());
    }
}
