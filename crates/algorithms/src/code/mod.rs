//! Primitives over GF(2) vectors used by code-based schemes

pub mod bitvec;

pub use bitvec::{
    clear_padding, ct_flip_low_bit, get_bit, hamming_weight, is_padding_clear, mask_last_byte,
    secure_set_bits,
};
