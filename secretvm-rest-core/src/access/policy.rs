use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Number of mask bits the endpoint table consumes.
pub const POLICY_BITS: usize = 9;

/// Fixed endpoint table: request path → mask bit index.
///
/// A raw endpoint and its rendered `.html` variant share one bit, so a single
/// mask character opens or closes both.
pub const ENDPOINT_BITS: &[(&str, usize)] = &[
    ("/status", 0),
    ("/cpu", 1),
    ("/cpu.html", 1),
    ("/gpu", 2),
    ("/gpu.html", 2),
    ("/self", 3),
    ("/self.html", 3),
    ("/logs", 4),
    ("/logs.html", 4),
    ("/services", 5),
    ("/docker-compose", 6),
    ("/docker-compose.html", 6),
    ("/resources", 7),
    ("/resources.html", 7),
    ("/vm_updates", 8),
    ("/vm_updates.html", 8),
];

pub fn bit_for(path: &str) -> Option<usize> {
    ENDPOINT_BITS
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, bit)| *bit)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("endpoint mask has {len} characters, at least {required} are required")]
    TooShort { len: usize, required: usize },

    #[error("endpoint mask character {position} is '{found}', expected '0' or '1'")]
    InvalidChar { position: usize, found: char },
}

/// Typed endpoint policy: `true` means the endpoint is public even in
/// private mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EndpointPolicy {
    open: BTreeMap<&'static str, bool>,
}

impl EndpointPolicy {
    /// Build from a mask string where character `i` governs bit `i`.
    ///
    /// Characters past the table are ignored.
    pub fn from_mask(mask: &str) -> Result<Self, MaskError> {
        let bits: Vec<char> = mask.trim().chars().collect();

        if bits.len() < POLICY_BITS {
            return Err(MaskError::TooShort {
                len: bits.len(),
                required: POLICY_BITS,
            });
        }

        let mut flags = [false; POLICY_BITS];
        for (position, found) in bits.iter().copied().enumerate() {
            let open = match found {
                '1' => true,
                '0' => false,
                _ => return Err(MaskError::InvalidChar { position, found }),
            };
            if position < POLICY_BITS {
                flags[position] = open;
            }
        }

        if bits.len() > POLICY_BITS {
            tracing::warn!(
                len = bits.len(),
                used = POLICY_BITS,
                "endpoint mask longer than endpoint table; extra bits ignored"
            );
        }

        Ok(Self::from_flags(flags))
    }

    pub fn all_open() -> Self {
        Self::from_flags([true; POLICY_BITS])
    }

    pub fn all_closed() -> Self {
        Self::from_flags([false; POLICY_BITS])
    }

    fn from_flags(flags: [bool; POLICY_BITS]) -> Self {
        let open = ENDPOINT_BITS
            .iter()
            .map(|(path, bit)| (*path, flags[*bit]))
            .collect();
        Self { open }
    }

    /// `None` when the path has no registered policy.
    pub fn is_open(&self, path: &str) -> Option<bool> {
        self.open.get(path).copied()
    }

    /// Render back to mask form, one character per bit.
    pub fn to_mask(&self) -> String {
        (0..POLICY_BITS)
            .map(|bit| {
                let open = ENDPOINT_BITS
                    .iter()
                    .find(|(_, b)| *b == bit)
                    .and_then(|(path, _)| self.open.get(path))
                    .copied()
                    .unwrap_or(false);
                if open { '1' } else { '0' }
            })
            .collect()
    }
}
