use crate::{
    backend::Backend,
    error::{OrgaError, Result},
};
use std::{
    fmt,
    sync::{Arc, Weak},
};

/// Non-owning handle from an entity back to the backend that produced it.
///
/// The handle never keeps the backend alive. Navigation through a handle
/// whose backend has been dropped, or through an empty handle, yields
/// [`OrgaError::DetachedEntity`].
#[derive(Clone, Default)]
pub struct BackendRef(Option<Weak<dyn Backend>>);

impl BackendRef {
    pub fn new(backend: Weak<dyn Backend>) -> Self {
        Self(Some(backend))
    }

    pub fn from_arc<B: Backend + 'static>(backend: &Arc<B>) -> Self {
        let weak: Weak<B> = Arc::downgrade(backend);
        Self(Some(weak))
    }

    /// Returns true when the handle points at a backend that is still alive
    pub fn is_attached(&self) -> bool {
        self.0
            .as_ref()
            .map(|weak| weak.strong_count() > 0)
            .unwrap_or(false)
    }

    /// Upgrades the handle, naming `entity` in the error when it cannot be
    pub(crate) fn get(&self, entity: &'static str) -> Result<Arc<dyn Backend>> {
        self.0
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(OrgaError::DetachedEntity(entity))
    }
}

impl fmt::Debug for BackendRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_attached() {
            write!(f, "BackendRef(attached)")
        } else {
            write!(f, "BackendRef(detached)")
        }
    }
}
