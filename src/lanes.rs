/*!
Four-wide escape-time evaluation.

Lanes diverge at different iteration counts, so the kernel carries an active mask
alongside the lane counters. A lane is active while its last `|z|²` was below the
escape radius and its counter is below the cap. Inactive lanes keep their `z` and
their counter frozen while the remaining lanes of the group keep iterating; the
group stops once no lane is active.

The arithmetic is ordered exactly like [`Complex::square`] followed by an add, and
without fused multiply-adds, so each lane reproduces [`crate::escape::evaluate`]
bit for bit.
*/

use wide::{f64x4, CmpGt, CmpLt};

use crate::{
    complex::Complex,
    escape::{Recurrence, ESCAPE_NORM_SQ},
};

pub const LANES: usize = 4;

pub fn evaluate_lanes(points: [Complex; LANES], recurrence: Recurrence, cap: u32) -> [u32; LANES] {
    let seeds = points.map(|point| recurrence.seed(point));

    let mut zr = f64x4::new(seeds.map(|(z, _)| z.real));
    let mut zi = f64x4::new(seeds.map(|(z, _)| z.imaginary));
    let cr = f64x4::new(seeds.map(|(_, c)| c.real));
    let ci = f64x4::new(seeds.map(|(_, c)| c.imaginary));

    let escape = f64x4::splat(ESCAPE_NORM_SQ);
    let two = f64x4::splat(2.0);
    let one = f64x4::splat(1.0);
    let limit = f64x4::splat(f64::from(cap));

    // Counters are exact in f64 for every u32 cap.
    let mut count = f64x4::ZERO;
    let mut active = limit.cmp_gt(count);

    while active.any() {
        let next_zr = zr * zr - zi * zi + cr;
        let next_zi = two * zr * zi + ci;
        zr = active.blend(next_zr, zr);
        zi = active.blend(next_zi, zi);

        let inside = (zr * zr + zi * zi).cmp_lt(escape);
        let advancing = active & inside;
        count = count + (advancing & one);
        active = advancing & count.cmp_lt(limit);
    }

    count.to_array().map(|lane| lane as u32)
}
