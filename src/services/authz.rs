/// Ownership check shared by the profile and post aggregate managers.
use uuid::Uuid;

use crate::error::{AppError, Result};

pub fn is_owner(principal: Uuid, owner: Uuid) -> bool {
    principal == owner
}

/// Errors with an authorization failure unless `principal` owns the resource.
pub fn ensure_owner(principal: Uuid, owner: Uuid) -> Result<()> {
    if is_owner(principal, owner) {
        Ok(())
    } else {
        Err(AppError::Authorization(
            "principal does not own this resource".to_string(),
        ))
    }
}
