// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC GlobalId generation
//!
//! IFC compresses a 128-bit UUID into 22 characters over a 64-symbol
//! alphabet. A fresh v4 UUID backs every generated id, so ids are unique
//! within a model and across export passes.

use uuid::Uuid;

/// The IFC base-64 alphabet. Note the last two symbols differ from RFC 4648.
const ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_$";

/// Generates a fresh 22-character IFC GlobalId.
pub fn new_global_id() -> String {
    encode(u128::from_be_bytes(*Uuid::new_v4().as_bytes()))
}

/// Encodes 128 bits as 22 symbols, most significant first. The leading
/// symbol only carries the top 2 bits.
fn encode(mut value: u128) -> String {
    let mut buffer = [0u8; 22];
    for slot in buffer.iter_mut().rev() {
        *slot = ALPHABET[(value & 0x3F) as usize];
        value >>= 6;
    }
    buffer.iter().map(|&b| b as char).collect()
}
