//! RngSeed — доменный seed для пакетной симуляции.
//!
//! Позволяет:
//!   - хранить мастер-seed (u64 или [u8;32])
//!   - детерминированно выводить seed для каждой сессии:
//!         session_seed = H(domain || master || session_index)
//!   - создавать DeterministicRng из seed
//!
//! Так у каждой сессии свой независимый поток, а вся симуляция
//! воспроизводится по одному мастер-seed.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (удобно для CLI и тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed для сессии с номером `session_index`.
    pub fn derive(&self, session_index: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"KENO_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(session_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_bytes(self.bytes)
    }
}
