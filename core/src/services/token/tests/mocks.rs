//! Mock blacklist implementation for token service tests

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::services::token::traits::BlacklistTrait;

/// In-memory blacklist; entries never expire within a test's lifetime
#[derive(Default)]
pub struct MockBlacklist {
    entries: Arc<Mutex<HashSet<String>>>,
}

impl MockBlacklist {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlacklistTrait for MockBlacklist {
    async fn insert(&self, token: &str, _ttl_seconds: u64) -> Result<(), String> {
        self.entries.lock().unwrap().insert(token.to_string());
        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, String> {
        Ok(self.entries.lock().unwrap().contains(token))
    }
}
