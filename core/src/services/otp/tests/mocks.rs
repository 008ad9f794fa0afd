//! Mock cache implementation for OTP service tests

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::services::otp::traits::OtpCacheTrait;

/// In-memory OTP cache honoring time-to-live on reads
#[derive(Default)]
pub struct MockOtpCache {
    entries: Arc<Mutex<HashMap<String, (String, DateTime<Utc>)>>>,
}

impl MockOtpCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force an entry's expiry into the past
    pub fn expire(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap();
        if let Some((_, expires_at)) = entries.get_mut(key) {
            *expires_at = Utc::now() - Duration::seconds(1);
        }
    }
}

#[async_trait]
impl OtpCacheTrait for MockOtpCache {
    async fn store_code(&self, key: &str, code: &str, ttl_seconds: u64) -> Result<(), String> {
        let expires_at = Utc::now() + Duration::seconds(ttl_seconds as i64);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (code.to_string(), expires_at));
        Ok(())
    }

    async fn get_code(&self, key: &str) -> Result<Option<String>, String> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).and_then(|(code, expires_at)| {
            if Utc::now() < *expires_at {
                Some(code.clone())
            } else {
                None
            }
        }))
    }

    async fn remove_code(&self, key: &str) -> Result<(), String> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
