use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("password verification failed: {0}")]
    Verify(String),
    #[error("hashing task failed: {0}")]
    TaskJoin(String),
}

/// Bcrypt wrapper with a configurable cost factor.
///
/// Hashing runs on the blocking pool so a registration does not stall the
/// actor runtime for the duration of a bcrypt round.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: String) -> Result<String, PasswordError> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| PasswordError::TaskJoin(e.to_string()))?
            .map_err(|e| PasswordError::Hash(e.to_string()))
    }

    pub async fn verify(&self, password: String, hash: String) -> Result<bool, PasswordError> {
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| PasswordError::TaskJoin(e.to_string()))?
            .map_err(|e| PasswordError::Verify(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_and_verify_roundtrip() {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash("hunter2".to_string()).await.unwrap();
        assert!(hasher.verify("hunter2".to_string(), hash.clone()).await.unwrap());
        assert!(!hasher.verify("hunter3".to_string(), hash).await.unwrap());
    }
}
