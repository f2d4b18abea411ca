//! Conversions between HEALPix pixel indices, face coordinates and positions.
//!
//! Every pixel lives on one of the 12 base faces, and is addressed inside of the face
//! by an (ix, iy) pair in [0, nside). Positions are expressed as z = cos(theta) and
//! the azimuth phi in radians.
//!
//! Reference: Gorski et al. 2005, ApJ 622, 759.
use std::f64::consts::FRAC_PI_2;

/// Ring number of the northern corner of each face, in units of nside.
const JRLL: [i64; 12] = [2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4];

/// Longitude index of the center of each face, in units of pi / 4.
const JPLL: [i64; 12] = [1, 3, 5, 7, 0, 2, 4, 6, 1, 3, 5, 7];

/// Position of a pixel inside of a base face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FacePixel {
    pub ix: i64,
    pub iy: i64,
    pub face: i64,
}

/// Spread the lower 32 bits of the value into the even bits of the output.
#[inline(always)]
fn spread_bits(v: i64) -> i64 {
    let mut v = v & 0xffff_ffff;
    v = (v | (v << 16)) & 0x0000_ffff_0000_ffff;
    v = (v | (v << 8)) & 0x00ff_00ff_00ff_00ff;
    v = (v | (v << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    v = (v | (v << 2)) & 0x3333_3333_3333_3333;
    (v | (v << 1)) & 0x5555_5555_5555_5555
}

/// Inverse of [`spread_bits`], collect the even bits.
#[inline(always)]
fn compress_bits(v: i64) -> i64 {
    let mut v = v & 0x5555_5555_5555_5555;
    v = (v | (v >> 1)) & 0x3333_3333_3333_3333;
    v = (v | (v >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    v = (v | (v >> 4)) & 0x00ff_00ff_00ff_00ff;
    v = (v | (v >> 8)) & 0x0000_ffff_0000_ffff;
    (v | (v >> 16)) & 0xffff_ffff
}

#[inline(always)]
fn isqrt(v: i64) -> i64 {
    let mut res = (v as f64).sqrt() as i64;
    while res * res > v {
        res -= 1;
    }
    while (res + 1) * (res + 1) <= v {
        res += 1;
    }
    res
}

#[inline(always)]
fn face_from_lines(ifp: i64, ifm: i64) -> i64 {
    if ifp == ifm {
        ifp | 4
    } else if ifp < ifm {
        ifp
    } else {
        ifm + 8
    }
}

pub(crate) fn xyf2nest(nside: i64, pix: FacePixel) -> i64 {
    pix.face * nside * nside + spread_bits(pix.ix) + (spread_bits(pix.iy) << 1)
}

pub(crate) fn nest2xyf(nside: i64, pix: i64) -> FacePixel {
    let npface = nside * nside;
    let ipf = pix & (npface - 1);
    FacePixel {
        ix: compress_bits(ipf),
        iy: compress_bits(ipf >> 1),
        face: pix / npface,
    }
}

pub(crate) fn xyf2ring(nside: i64, pix: FacePixel) -> i64 {
    let nl4 = 4 * nside;
    let ncap = 2 * nside * (nside - 1);
    let npix = 12 * nside * nside;
    let jr = JRLL[pix.face as usize] * nside - pix.ix - pix.iy - 1;

    let (nr, n_before, kshift) = if jr < nside {
        (jr, 2 * jr * (jr - 1), 0)
    } else if jr > 3 * nside {
        let nr = nl4 - jr;
        (nr, npix - 2 * (nr + 1) * nr, 0)
    } else {
        (nside, ncap + (jr - nside) * nl4, (jr - nside) & 1)
    };

    let mut jp = (JPLL[pix.face as usize] * nr + pix.ix - pix.iy + 1 + kshift) / 2;
    if jp > nl4 {
        jp -= nl4;
    } else if jp < 1 {
        jp += nl4;
    }
    n_before + jp - 1
}

pub(crate) fn ring2xyf(nside: i64, pix: i64) -> FacePixel {
    let nl2 = 2 * nside;
    let ncap = 2 * nside * (nside - 1);
    let npix = 12 * nside * nside;

    let (iring, iphi, kshift, nr, face) = if pix < ncap {
        let iring = (1 + isqrt(1 + 2 * pix)) >> 1;
        let iphi = (pix + 1) - 2 * iring * (iring - 1);
        (iring, iphi, 0, iring, (iphi - 1) / iring)
    } else if pix < npix - ncap {
        let ip = pix - ncap;
        let tmp = ip / (4 * nside);
        let iring = tmp + nside;
        let iphi = ip - tmp * 4 * nside + 1;
        let kshift = (iring + nside) & 1;
        let ire = tmp + 1;
        let irm = nl2 + 1 - tmp;
        let ifm = (iphi - (ire >> 1) + nside - 1) / nside;
        let ifp = (iphi - (irm >> 1) + nside - 1) / nside;
        (iring, iphi, kshift, nside, face_from_lines(ifp, ifm))
    } else {
        let ip = npix - pix;
        let nr = (1 + isqrt(2 * ip - 1)) >> 1;
        let iphi = 4 * nr + 1 - (ip - 2 * nr * (nr - 1));
        (2 * nl2 - nr, iphi, 0, nr, 8 + (iphi - 1) / nr)
    };

    let irt = iring - JRLL[face as usize] * nside + 1;
    let mut ipt = 2 * iphi - JPLL[face as usize] * nr - kshift - 1;
    if ipt >= nl2 {
        ipt -= 8 * nside;
    }
    FacePixel {
        ix: (ipt - irt) >> 1,
        iy: (-ipt - irt) >> 1,
        face,
    }
}

/// Find the face pixel containing a position.
///
/// `theta` is the colatitude in radians, which is used directly near the poles where
/// z = cos(theta) loses precision.
pub(crate) fn loc2xyf(nside: i64, theta: f64, phi: f64) -> FacePixel {
    let z = theta.cos();
    let za = z.abs();
    let mut tt = (phi / FRAC_PI_2).rem_euclid(4.0);
    if tt >= 4.0 {
        tt = 0.0;
    }
    let nsf = nside as f64;

    if za <= 2.0 / 3.0 {
        let temp1 = nsf * (0.5 + tt);
        let temp2 = nsf * z * 0.75;
        let jp = (temp1 - temp2).floor() as i64;
        let jm = (temp1 + temp2).floor() as i64;
        let face = face_from_lines(jp / nside, jm / nside);
        FacePixel {
            ix: jm & (nside - 1),
            iy: nside - (jp & (nside - 1)) - 1,
            face,
        }
    } else {
        let ntt = (tt.floor() as i64).min(3);
        let tp = tt - ntt as f64;
        // sqrt(3 (1 - |z|)) written with half angles
        let half = 0.5 * theta;
        let scale = if z >= 0.0 { half.sin() } else { half.cos() };
        let tmp = nsf * 6f64.sqrt() * scale.abs();
        let jp = ((tp * tmp).floor() as i64).min(nside - 1);
        let jm = (((1.0 - tp) * tmp).floor() as i64).min(nside - 1);
        if z >= 0.0 {
            FacePixel {
                ix: nside - jm - 1,
                iy: nside - jp - 1,
                face: ntt,
            }
        } else {
            FacePixel {
                ix: jp,
                iy: jm,
                face: ntt + 8,
            }
        }
    }
}

/// Position of a point given in continuous face coordinates.
///
/// `x` and `y` run from 0 to 1 across the face. Returns the colatitude and azimuth in
/// radians.
pub(crate) fn xyf2loc(x: f64, y: f64, face: i64) -> (f64, f64) {
    let jr = JRLL[face as usize] as f64 - x - y;
    let (nr, theta) = if jr < 1.0 {
        let tmp = jr * jr / 3.0;
        let sth = (tmp * (2.0 - tmp)).sqrt();
        (jr, sth.atan2(1.0 - tmp))
    } else if jr > 3.0 {
        let r = 4.0 - jr;
        let tmp = r * r / 3.0;
        let sth = (tmp * (2.0 - tmp)).sqrt();
        (r, sth.atan2(tmp - 1.0))
    } else {
        let z = (2.0 - jr) * 2.0 / 3.0;
        (1.0, ((1.0 - z) * (1.0 + z)).sqrt().atan2(z))
    };

    let mut tmp = JPLL[face as usize] as f64 * nr + x - y;
    if tmp < 0.0 {
        tmp += 8.0;
    }
    if tmp >= 8.0 {
        tmp -= 8.0;
    }
    let phi = if nr < 1e-15 {
        0.0
    } else {
        0.5 * FRAC_PI_2 * tmp / nr
    };
    (theta, phi)
}
