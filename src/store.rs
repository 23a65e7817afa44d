//! The portal's single source of truth for content.
//!
//! Every collection is an immutable snapshot. Readers clone the `Arc`;
//! writers compute the next full collection from the current one and swap it
//! in while holding the write lock, so a request never sees half an update.

use std::sync::{Arc, PoisonError, RwLock};

use crate::models::{DownloadItem, Notice, Service, Staff};

#[derive(Clone, Debug, Default)]
pub struct Collections {
    pub notices: Arc<Vec<Notice>>,
    pub services: Arc<Vec<Service>>,
    pub staff: Arc<Vec<Staff>>,
    pub downloads: Arc<Vec<DownloadItem>>,
}

impl Collections {
    pub fn new(
        notices: Vec<Notice>,
        services: Vec<Service>,
        staff: Vec<Staff>,
        downloads: Vec<DownloadItem>,
    ) -> Self {
        Self {
            notices: Arc::new(notices),
            services: Arc::new(services),
            staff: Arc::new(staff),
            downloads: Arc::new(downloads),
        }
    }
}

#[derive(Debug, Default)]
pub struct ContentStore {
    inner: RwLock<Collections>,
}

impl ContentStore {
    pub fn new(collections: Collections) -> Self {
        Self {
            inner: RwLock::new(collections),
        }
    }

    pub fn snapshot(&self) -> Collections {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn notices(&self) -> Arc<Vec<Notice>> {
        self.snapshot().notices
    }

    pub fn services(&self) -> Arc<Vec<Service>> {
        self.snapshot().services
    }

    pub fn staff(&self) -> Arc<Vec<Staff>> {
        self.snapshot().staff
    }

    pub fn downloads(&self) -> Arc<Vec<DownloadItem>> {
        self.snapshot().downloads
    }

    pub fn update_notices<E>(
        &self,
        next: impl FnOnce(&[Notice]) -> Result<Vec<Notice>, E>,
    ) -> Result<(), E> {
        self.update(|collections| &mut collections.notices, next)
    }

    pub fn update_services<E>(
        &self,
        next: impl FnOnce(&[Service]) -> Result<Vec<Service>, E>,
    ) -> Result<(), E> {
        self.update(|collections| &mut collections.services, next)
    }

    pub fn update_staff<E>(
        &self,
        next: impl FnOnce(&[Staff]) -> Result<Vec<Staff>, E>,
    ) -> Result<(), E> {
        self.update(|collections| &mut collections.staff, next)
    }

    pub fn update_downloads<E>(
        &self,
        next: impl FnOnce(&[DownloadItem]) -> Result<Vec<DownloadItem>, E>,
    ) -> Result<(), E> {
        self.update(|collections| &mut collections.downloads, next)
    }

    fn update<T, E>(
        &self,
        select: impl FnOnce(&mut Collections) -> &mut Arc<Vec<T>>,
        next: impl FnOnce(&[T]) -> Result<Vec<T>, E>,
    ) -> Result<(), E> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let slot = select(&mut *guard);
        let replacement = next(slot.as_slice())?;
        *slot = Arc::new(replacement);
        Ok(())
    }
}
