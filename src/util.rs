// hash function

const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the raw bytes of `key`, with the sign bit cleared.
pub fn ihash(key: &str) -> u32 {
    let mut h = FNV32_OFFSET_BASIS;
    for b in key.as_bytes() {
        h ^= *b as u32;
        h = h.wrapping_mul(FNV32_PRIME);
    }
    h & 0x7fff_ffff
}
