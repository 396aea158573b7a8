//! Seeded coherent noise
//!
//! A 4096-entry value lattice sampled with cosine interpolation over four
//! octaves. Output is in `[0, 1)` and is a pure function of the seed and
//! the input coordinates.

use std::f64::consts::PI;

const YWRAP_BITS: u32 = 4;
const YWRAP: i64 = 1 << YWRAP_BITS;
const ZWRAP_BITS: u32 = 8;
const ZWRAP: i64 = 1 << ZWRAP_BITS;
const LATTICE_MASK: i64 = 4095;
const LATTICE_LEN: usize = 4096;

const OCTAVES: usize = 4;
const AMP_FALLOFF: f64 = 0.5;

// Numerical Recipes LCG
const LCG_A: u64 = 1_664_525;
const LCG_C: u64 = 1_013_904_223;
const LCG_M: u64 = 1 << 32;

/// Seed used when none is configured
pub const DEFAULT_SEED: u32 = 0x5EED_0001;

/// Seeded 3D value-noise field
#[derive(Clone)]
pub struct NoiseField {
    seed: u32,
    lattice: Box<[f64; LATTICE_LEN]>,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        let mut lattice = Box::new([0.0; LATTICE_LEN]);
        let mut z = seed as u64;
        for slot in lattice.iter_mut() {
            z = (LCG_A * z + LCG_C) % LCG_M;
            *slot = z as f64 / LCG_M as f64;
        }
        Self { seed, lattice }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample the field. Negative coordinates are mirrored.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let (x, y, z) = (x.abs(), y.abs(), z.abs());

        let mut xi = x.floor() as i64;
        let mut yi = y.floor() as i64;
        let mut zi = z.floor() as i64;
        let mut xf = x - xi as f64;
        let mut yf = y - yi as f64;
        let mut zf = z - zi as f64;

        let mut r = 0.0;
        let mut ampl = 0.5;

        for _ in 0..OCTAVES {
            let mut of = xi
                .wrapping_add(yi.wrapping_shl(YWRAP_BITS))
                .wrapping_add(zi.wrapping_shl(ZWRAP_BITS));

            let rxf = scaled_cosine(xf);
            let ryf = scaled_cosine(yf);

            let mut n1 = self.at(of);
            n1 += rxf * (self.at(of.wrapping_add(1)) - n1);
            let mut n2 = self.at(of.wrapping_add(YWRAP));
            n2 += rxf * (self.at(of.wrapping_add(YWRAP + 1)) - n2);
            n1 += ryf * (n2 - n1);

            of = of.wrapping_add(ZWRAP);
            n2 = self.at(of);
            n2 += rxf * (self.at(of.wrapping_add(1)) - n2);
            let mut n3 = self.at(of.wrapping_add(YWRAP));
            n3 += rxf * (self.at(of.wrapping_add(YWRAP + 1)) - n3);
            n2 += ryf * (n3 - n2);

            n1 += scaled_cosine(zf) * (n2 - n1);

            r += n1 * ampl;
            ampl *= AMP_FALLOFF;

            xi = xi.wrapping_shl(1);
            xf *= 2.0;
            yi = yi.wrapping_shl(1);
            yf *= 2.0;
            zi = zi.wrapping_shl(1);
            zf *= 2.0;

            if xf >= 1.0 {
                xi = xi.wrapping_add(1);
                xf -= 1.0;
            }
            if yf >= 1.0 {
                yi = yi.wrapping_add(1);
                yf -= 1.0;
            }
            if zf >= 1.0 {
                zi = zi.wrapping_add(1);
                zf -= 1.0;
            }
        }

        r
    }

    #[inline]
    fn at(&self, offset: i64) -> f64 {
        self.lattice[(offset & LATTICE_MASK) as usize]
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}

#[inline]
fn scaled_cosine(i: f64) -> f64 {
    0.5 * (1.0 - (i * PI).cos())
}
