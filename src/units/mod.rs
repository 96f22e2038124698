mod octas;

pub use octas::OctaNewtype;

/// Fractional digits of APT, and of most coins on Aptos and Movement.
pub const APT_DECIMALS: u32 = 8;

pub const OCTAS_PER_APT: u64 = 100_000_000;
