//=========================================================================
// User Data
//=========================================================================
//
// Opaque caller payload threaded from a load/unload request through the
// loader and back out on the matching notification.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::fmt;
use std::sync::Arc;

//=== UserData ============================================================

/// Shared, type-erased value attached to a scene request.
///
/// Cloning is cheap (reference counted). The engine never inspects the
/// payload; callers recover it with [`UserData::downcast_ref`].
#[derive(Clone)]
pub struct UserData(Arc<dyn Any + Send + Sync>);

impl UserData {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns the payload if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns true if both values share the same allocation.
    pub fn ptr_eq(&self, other: &UserData) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserData(..)")
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
