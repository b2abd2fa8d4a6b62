// Inversion of the MT19937 output tempering.
//
// Tempering is four steps, each of the form
//
//                  y = x ^ ((x >> k) & mask)   or   y = x ^ ((x << k) & mask)
//
// and each step is a bijection on u32, so we undo them one at a time in
// reverse order.
use crate::mt19937::{B, C, D, L, S, T, U};

/// Recover the raw state word that `temper` turned into `output`.
pub fn untemper(output: u32) -> u32 {
    // y ^= y >> L: the top L bits pass through unchanged and L >= 16, so
    // they are all we need to recover the remaining bits.
    let mut v = output ^ (output >> L);
    // y ^= (y << T) & C: the low T bits pass through unchanged. T < 16, so
    // bits 30 and 31 would be fed by bits 15 and 16 after they were already
    // mixed, but C is zero at 15 and 16 and one pass is enough.
    v ^= (v << T) & C;
    v = undo_left_shift_xor(v, S, B);
    undo_right_shift_xor(v, U, D)
}

// Here we're reversing the operation:
//     x = y ^ ((y << shift) & mask)
// Bitwise, with index 0 the least significant bit:
//     x[i] = y[i] ^ (y[i - shift] & mask[i])
// For i < shift, y[i] = x[i]. Each following block of `shift` bits only
// depends on the block below it, so we rebuild y one block at a time from
// the bottom, feeding what we have so far back through the shift.
fn undo_left_shift_xor(x: u32, shift: u32, mask: u32) -> u32 {
    let block = (1u32 << shift) - 1;
    let mut y = 0u32;
    for offset in (0..u32::BITS).step_by(shift as usize) {
        y |= (x ^ ((y << shift) & mask)) & (block << offset);
    }
    y
}

// The mirror image of the above for:
//     x = y ^ ((y >> shift) & mask)
// The top `shift` bits of x are the top bits of y, and we work downwards.
// The top block is clipped to the word, so it may be narrower than `shift`.
fn undo_right_shift_xor(x: u32, shift: u32, mask: u32) -> u32 {
    let block = (1u32 << shift) - 1;
    let mut y = 0u32;
    for offset in (0..u32::BITS).step_by(shift as usize).rev() {
        y |= (x ^ ((y >> shift) & mask)) & (block << offset);
    }
    y
}
