use std::cell::RefCell;
use std::collections::VecDeque;

use super::ImageSource;
use crate::errors::BrowseError;

/// Bounded FIFO cache of image bytes keyed by URL. A capacity of zero
/// passes every request straight through. Failures are never cached.
pub struct CachedImageSource<S> {
    inner: S,
    capacity: usize,
    entries: RefCell<VecDeque<(String, Vec<u8>)>>,
}

impl<S: ImageSource> CachedImageSource<S> {
    pub fn new(inner: S, capacity: usize) -> Self {
        CachedImageSource {
            inner,
            capacity,
            entries: RefCell::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<S: ImageSource> ImageSource for CachedImageSource<S> {
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, BrowseError> {
        if self.capacity == 0 {
            return self.inner.fetch_image(url);
        }
        if let Some((_, bytes)) = self.entries.borrow().iter().find(|(u, _)| u == url) {
            tracing::debug!(url, "image cache hit");
            return Ok(bytes.clone());
        }
        let bytes = self.inner.fetch_image(url)?;
        let mut entries = self.entries.borrow_mut();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back((url.to_string(), bytes.clone()));
        Ok(bytes)
    }
}
