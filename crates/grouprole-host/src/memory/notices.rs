//! In-memory transient notice queue

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use grouprole_core::domain::Notice;
use grouprole_core::error::DomainError;
use grouprole_core::repositories::NoticeQueue;

pub struct InMemoryNoticeQueue {
    queued: Mutex<Vec<Notice>>,
}

impl InMemoryNoticeQueue {
    pub fn new() -> Self {
        Self {
            queued: Mutex::new(Vec::new()),
        }
    }

    /// Takes everything queued so far, the way the host drains messages on
    /// the next page render.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.queued.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Default for InMemoryNoticeQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoticeQueue for InMemoryNoticeQueue {
    async fn push(&self, notice: Notice) -> Result<(), DomainError> {
        self.queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_drain_empties_the_queue() {
        let queue = InMemoryNoticeQueue::new();
        queue.push(Notice::error("first")).await.unwrap();
        queue.push(Notice::error("second")).await.unwrap();

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert!(queue.drain().is_empty());
    }
}
