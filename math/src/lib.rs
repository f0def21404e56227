mod error;
pub use error::Error;

use num_traits::float::Float;

/// linear interpolation through the two sample points `(xp.0, fp.0)` and
/// `(xp.1, fp.1)`
///
/// This behaves like `numpy.interp` with two sample points: values below
/// `xp.0` return `left` and values above `xp.1` return `right`. Neither has to
/// match the ends of `fp`.
pub fn interp<A: Float>(x: A, xp: (A, A), fp: (A, A), left: A, right: A) -> A {
    if x < xp.0 {
        return left;
    }
    if x > xp.1 {
        return right;
    }

    let t = (x - xp.0) / (xp.1 - xp.0);
    fp.0 + t * (fp.1 - fp.0)
}

/// make sure `xp` can be used as the sample range of [interp]
pub fn check_range<A: Float + Into<f64>>(xp: (A, A)) -> Result<(), Error> {
    if xp.0 < xp.1 {
        Ok(())
    } else {
        Err(Error::EmptyRange(xp.0.into(), xp.1.into()))
    }
}

/// make sure the lower clamp bound is not above the upper one
pub fn check_clamp<A: Float + Into<f64>>(bounds: (A, A)) -> Result<(), Error> {
    if bounds.0 <= bounds.1 {
        Ok(())
    } else {
        Err(Error::InvertedClamp(bounds.0.into(), bounds.1.into()))
    }
}

/// polar to cartesian, angle in radians
pub fn polar_to_cartesian<A: Float>(r: A, angle: A) -> (A, A) {
    (r * angle.cos(), r * angle.sin())
}
