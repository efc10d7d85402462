/// Seed built from two 32-bit draws of JavaScript's `Math.random`.
pub(crate) fn js_random_seed() -> u64 {
    let half = || (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (half() << 32) | half()
}

/// Numeric seeds are used as-is, anything else is folded with FNV-1a so words work as seeds too.
pub(crate) fn seed_from_str(seed: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    seed.parse().unwrap_or_else(|_| {
        seed.bytes()
            .fold(FNV_OFFSET, |hash, b| (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME))
    })
}
