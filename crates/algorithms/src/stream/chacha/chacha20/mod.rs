//! ChaCha20 keystream generator
//!
//! This module implements the ChaCha20 block function as defined in RFC 8439
//! and exposes it as a block-at-a-time keystream.

use byteorder::{ByteOrder, LittleEndian};
use common::security::{EphemeralSecret, SecretBuffer};
use zeroize::{Zeroize, ZeroizeOnDrop};

use params::utils::symmetric::{CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};

/// ChaCha20 keystream generator
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    /// Constants, key and nonce words (word 12 holds the initial counter)
    state: [u32; 16],
    /// Counter of the next block to generate
    counter: u32,
}

impl ChaCha20 {
    /// Creates a new ChaCha20 instance starting at block 0
    pub fn new(
        key: &SecretBuffer<CHACHA20_KEY_SIZE>,
        nonce: &[u8; CHACHA20_NONCE_SIZE],
    ) -> Self {
        Self::with_counter(key, nonce, 0)
    }

    /// Creates a new ChaCha20 instance whose first block uses `counter`
    pub fn with_counter(
        key: &SecretBuffer<CHACHA20_KEY_SIZE>,
        nonce: &[u8; CHACHA20_NONCE_SIZE],
        counter: u32,
    ) -> Self {
        let mut state = [0u32; 16];

        // "expand 32-byte k" in little-endian
        state[0] = 0x61707865;
        state[1] = 0x3320646e;
        state[2] = 0x79622d32;
        state[3] = 0x6b206574;

        let key_bytes = key.as_ref();
        for i in 0..8 {
            state[4 + i] = LittleEndian::read_u32(&key_bytes[i * 4..]);
        }

        state[12] = counter;

        state[13] = LittleEndian::read_u32(&nonce[0..4]);
        state[14] = LittleEndian::read_u32(&nonce[4..8]);
        state[15] = LittleEndian::read_u32(&nonce[8..12]);

        Self { state, counter }
    }

    /// Counter of the next block [`next_block`](Self::next_block) will produce
    pub fn counter(&self) -> u32 {
        self.counter
    }

    #[inline]
    fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(16);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(12);

        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(8);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(7);
    }

    /// Write the keystream block for the current counter and advance it
    ///
    /// The counter wraps after `2^32 - 1`; callers bound the number of blocks
    /// drawn under one key so the wrap is never observed.
    pub fn next_block(&mut self, out: &mut [u8; CHACHA20_BLOCK_SIZE]) {
        let mut input = EphemeralSecret::new(self.state);
        input[12] = self.counter;

        let mut working = EphemeralSecret::new(*input);

        // 20 rounds: 10 column rounds interleaved with 10 diagonal rounds
        for _ in 0..10 {
            Self::quarter_round(&mut working, 0, 4, 8, 12);
            Self::quarter_round(&mut working, 1, 5, 9, 13);
            Self::quarter_round(&mut working, 2, 6, 10, 14);
            Self::quarter_round(&mut working, 3, 7, 11, 15);

            Self::quarter_round(&mut working, 0, 5, 10, 15);
            Self::quarter_round(&mut working, 1, 6, 11, 12);
            Self::quarter_round(&mut working, 2, 7, 8, 13);
            Self::quarter_round(&mut working, 3, 4, 9, 14);
        }

        for i in 0..16 {
            LittleEndian::write_u32(&mut out[i * 4..], working[i].wrapping_add(input[i]));
        }

        self.counter = self.counter.wrapping_add(1);
    }

    /// Fill `output` with consecutive keystream bytes
    ///
    /// Always starts on a block boundary; the unused tail of the final block
    /// is discarded.
    pub fn keystream(&mut self, output: &mut [u8]) {
        let mut block = EphemeralSecret::new([0u8; CHACHA20_BLOCK_SIZE]);
        for chunk in output.chunks_mut(CHACHA20_BLOCK_SIZE) {
            self.next_block(&mut block);
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }
}
