use api::{PrfStream, Result as CoreResult};
use common::security::{EphemeralSecret, SecretBuffer};
use params::pqc::bike::{BIKE_MAX_PRF_INVOCATIONS, BIKE_SEED_BYTES};
use params::utils::symmetric::{CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, PRF_DOMAIN_NONCE};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{to_core_result, validate, Error, Result};
use crate::stream::ChaCha20;

/// ChaCha20-based PRF state
///
/// All fields are erased on drop and by [`PrfStream::cleanup`]. An erased
/// state refuses to produce output.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChaChaPrf {
    cipher: ChaCha20,
    buffer: [u8; CHACHA20_BLOCK_SIZE],
    /// Next unread byte of `buffer`; equal to the block size when empty
    position: usize,
    /// Blocks produced under the current key
    invocations: u64,
    max_invocations: u64,
    rekeys: u32,
    ready: bool,
}

impl ChaChaPrf {
    /// Key a fresh PRF with `seed`
    ///
    /// `max_invocations` is the number of 64-byte blocks drawn under one key
    /// before rekeying and must lie in `1..=2^32 - 1`.
    pub fn init(max_invocations: u64, seed: &SecretBuffer<BIKE_SEED_BYTES>) -> Result<Self> {
        validate::parameter(
            max_invocations != 0,
            "max_invocations",
            "must be at least one block",
        )?;
        validate::parameter(
            max_invocations <= BIKE_MAX_PRF_INVOCATIONS,
            "max_invocations",
            "exceeds the 32-bit block counter",
        )?;

        Ok(Self {
            cipher: ChaCha20::new(seed, &PRF_DOMAIN_NONCE),
            buffer: [0u8; CHACHA20_BLOCK_SIZE],
            position: CHACHA20_BLOCK_SIZE,
            invocations: 0,
            max_invocations,
            rekeys: 0,
            ready: true,
        })
    }

    /// Blocks produced under the current key
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    /// Number of times the key has been replaced
    pub fn rekeys(&self) -> u32 {
        self.rekeys
    }

    /// Whether the state still holds key material
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Fill `out` with the next bytes of the stream
    pub fn fill(&mut self, out: &mut [u8]) -> Result<()> {
        if !self.ready {
            return Err(Error::Processing {
                operation: "prf",
                details: "state has been erased",
            });
        }

        let mut written = 0;
        while written < out.len() {
            if self.position == CHACHA20_BLOCK_SIZE {
                self.refill()?;
            }
            let take = (CHACHA20_BLOCK_SIZE - self.position).min(out.len() - written);
            out[written..written + take]
                .copy_from_slice(&self.buffer[self.position..self.position + take]);
            self.position += take;
            written += take;
        }
        Ok(())
    }

    fn refill(&mut self) -> Result<()> {
        if self.invocations == self.max_invocations {
            self.rekey()?;
        }
        self.cipher.next_block(&mut self.buffer);
        self.invocations += 1;
        self.position = 0;
        Ok(())
    }

    // The block used for the new key is never handed out.
    fn rekey(&mut self) -> Result<()> {
        self.rekeys = self.rekeys.checked_add(1).ok_or(Error::Processing {
            operation: "prf",
            details: "rekey limit reached",
        })?;

        let mut fresh = EphemeralSecret::new([0u8; CHACHA20_BLOCK_SIZE]);
        self.cipher.next_block(&mut fresh);

        let mut key = SecretBuffer::<CHACHA20_KEY_SIZE>::zeroed();
        key.as_mut_slice().copy_from_slice(&fresh[..CHACHA20_KEY_SIZE]);

        self.cipher = ChaCha20::new(&key, &PRF_DOMAIN_NONCE);
        self.invocations = 0;

        debug!(rekeys = self.rekeys, "prf rekeyed");
        Ok(())
    }
}

impl PrfStream for ChaChaPrf {
    fn draw(&mut self, out: &mut [u8]) -> CoreResult<()> {
        to_core_result(self.fill(out), "prf")
    }
}

impl core::fmt::Debug for ChaChaPrf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChaChaPrf")
            .field("invocations", &self.invocations)
            .field("max_invocations", &self.max_invocations)
            .field("rekeys", &self.rekeys)
            .field("ready", &self.ready)
            .finish_non_exhaustive()
    }
}
