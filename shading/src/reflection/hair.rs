//! Hair Fiber Scattering
//!
//! Implements the hair scattering model of Chiang et al. 2016, "A Practical
//! and Controllable Hair and Fur Model for Production Path Tracing". The
//! local frame has the fiber running along +x; the fiber cross-section lies
//! in the yz-plane.

use super::*;

/// Number of explicitly modelled scattering lobes (R, TT, TRT). One more
/// lobe accounts for all higher order scattering.
pub const P_MAX: usize = 3;

const SQRT_PI_OVER_8: Float = 0.626657069;

/// Smallest longitudinal and azimuthal roughness. Zero roughness makes the
/// lobe variances vanish.
pub const MIN_BETA: Float = 0.01;

/// Absorption coefficients of eumelanin per unit concentration.
const EUMELANIN_SIGMA_A: [Float; 3] = [0.419, 0.697, 1.37];

/// Absorption coefficients of pheomelanin per unit concentration.
const PHEOMELANIN_SIGMA_A: [Float; 3] = [0.187, 0.4, 1.05];

/// BSDF for hair fibers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HairBxDF {
    /// Offset across the fiber width in [-1, 1].
    h: Float,

    /// γo = asin(h).
    gamma_o: Float,

    /// Index of refraction of the fiber interior.
    eta: Float,

    /// Absorption coefficient of the fiber interior.
    sigma_a: Spectrum,

    /// Longitudinal roughness.
    beta_m: Float,

    /// Azimuthal roughness.
    beta_n: Float,

    /// Longitudinal variance per lobe.
    v: [Float; P_MAX + 1],

    /// Azimuthal logistic scale factor.
    s: Float,

    /// sin(2^k α) for the cuticle scale tilts.
    sin_2k_alpha: [Float; 3],

    /// cos(2^k α) for the cuticle scale tilts.
    cos_2k_alpha: [Float; 3],
}

impl HairBxDF {
    /// Create a new instance of `HairBxDF`. Roughness below `MIN_BETA` is
    /// raised to it.
    ///
    /// * `h`       - Offset across the fiber width in [-1, 1].
    /// * `eta`     - Index of refraction of the fiber interior.
    /// * `sigma_a` - Absorption coefficient of the fiber interior.
    /// * `beta_m`  - Longitudinal roughness in [0, 1].
    /// * `beta_n`  - Azimuthal roughness in [0, 1].
    /// * `alpha`   - Angle of the cuticle scales in degrees.
    pub fn new(
        h: Float,
        eta: Float,
        sigma_a: Spectrum,
        beta_m: Float,
        beta_n: Float,
        alpha: Float,
    ) -> Self {
        debug_assert!((-1.0..=1.0).contains(&h));
        debug_assert!((0.0..=1.0).contains(&beta_m));
        debug_assert!((0.0..=1.0).contains(&beta_n));
        let beta_m = max(beta_m, MIN_BETA);
        let beta_n = max(beta_n, MIN_BETA);

        // Compute longitudinal variance from beta_m.
        let v0 = sqr(0.726 * beta_m + 0.812 * sqr(beta_m) + 3.7 * beta_m.powi(20));
        let v = [v0, 0.25 * v0, 4.0 * v0, 4.0 * v0];

        // Compute azimuthal logistic scale factor from beta_n.
        let s = SQRT_PI_OVER_8 * (0.265 * beta_n + 1.194 * sqr(beta_n) + 5.372 * beta_n.powi(22));
        debug_assert!(!s.is_nan());

        // Compute alpha terms for hair scales.
        let mut sin_2k_alpha = [0.0; 3];
        let mut cos_2k_alpha = [0.0; 3];
        sin_2k_alpha[0] = alpha.to_radians().sin();
        cos_2k_alpha[0] = safe_sqrt(1.0 - sqr(sin_2k_alpha[0]));
        for i in 1..3 {
            sin_2k_alpha[i] = 2.0 * cos_2k_alpha[i - 1] * sin_2k_alpha[i - 1];
            cos_2k_alpha[i] = sqr(cos_2k_alpha[i - 1]) - sqr(sin_2k_alpha[i - 1]);
        }

        Self {
            h,
            gamma_o: safe_asin(h),
            eta,
            sigma_a,
            beta_m,
            beta_n,
            v,
            s,
            sin_2k_alpha,
            cos_2k_alpha,
        }
    }

    /// Returns the offset across the fiber width.
    pub fn h(&self) -> Float {
        self.h
    }

    /// Returns the index of refraction.
    pub fn eta(&self) -> Float {
        self.eta
    }

    /// Returns the absorption coefficient.
    pub fn sigma_a(&self) -> Spectrum {
        self.sigma_a
    }

    /// Returns the longitudinal and azimuthal roughness.
    pub fn beta(&self) -> (Float, Float) {
        (self.beta_m, self.beta_n)
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        BxDFType::BSDF_GLOSSY | BxDFType::BSDF_REFLECTION | BxDFType::BSDF_TRANSMISSION
    }

    /// Returns the absorption coefficient for the given melanin
    /// concentrations.
    ///
    /// * `ce` - Eumelanin concentration.
    /// * `cp` - Pheomelanin concentration.
    pub fn sigma_a_from_concentration(ce: Float, cp: Float) -> Spectrum {
        Spectrum::from_rgb([
            ce * EUMELANIN_SIGMA_A[0] + cp * PHEOMELANIN_SIGMA_A[0],
            ce * EUMELANIN_SIGMA_A[1] + cp * PHEOMELANIN_SIGMA_A[1],
            ce * EUMELANIN_SIGMA_A[2] + cp * PHEOMELANIN_SIGMA_A[2],
        ])
    }

    /// Returns the absorption coefficient that produces approximately the
    /// given diffuse reflectance after multiple scattering.
    ///
    /// * `c`      - Desired colour.
    /// * `beta_n` - Azimuthal roughness.
    pub fn sigma_a_from_reflectance(c: &Spectrum, beta_n: Float) -> Spectrum {
        let denom = 5.969 - 0.215 * beta_n + 2.532 * sqr(beta_n) - 10.73 * beta_n.powi(3)
            + 5.574 * beta_n.powi(4)
            + 0.245 * beta_n.powi(5);
        c.map(|v| sqr(v.ln() / denom))
    }

    /// Returns sin(θo') and cos(θo') rotated for the cuticle tilt of lobe `p`.
    fn tilt(&self, p: usize, sin_theta_o: Float, cos_theta_o: Float) -> (Float, Float) {
        let (sin_op, cos_op) = match p {
            0 => (
                sin_theta_o * self.cos_2k_alpha[1] - cos_theta_o * self.sin_2k_alpha[1],
                cos_theta_o * self.cos_2k_alpha[1] + sin_theta_o * self.sin_2k_alpha[1],
            ),
            1 => (
                sin_theta_o * self.cos_2k_alpha[0] + cos_theta_o * self.sin_2k_alpha[0],
                cos_theta_o * self.cos_2k_alpha[0] - sin_theta_o * self.sin_2k_alpha[0],
            ),
            2 => (
                sin_theta_o * self.cos_2k_alpha[2] + cos_theta_o * self.sin_2k_alpha[2],
                cos_theta_o * self.cos_2k_alpha[2] - sin_theta_o * self.sin_2k_alpha[2],
            ),
            _ => (sin_theta_o, cos_theta_o),
        };

        // Handle out-of-range cos(θo) from scale adjustment.
        (sin_op, abs(cos_op))
    }

    /// Returns the transmittance through the fiber interior and γt for the
    /// outgoing direction.
    fn interior(&self, sin_theta_o: Float, cos_theta_o: Float) -> (Spectrum, Float) {
        // Compute cos(θt) for refracted ray.
        let sin_theta_t = sin_theta_o / self.eta;
        let cos_theta_t = safe_sqrt(1.0 - sqr(sin_theta_t));

        // Compute γt for refracted ray.
        let etap = (self.eta * self.eta - sqr(sin_theta_o)).sqrt() / cos_theta_o;
        let sin_gamma_t = self.h / etap;
        let cos_gamma_t = safe_sqrt(1.0 - sqr(sin_gamma_t));
        let gamma_t = safe_asin(sin_gamma_t);

        // Compute the transmittance of a single path through the cylinder.
        let t = (-self.sigma_a * (2.0 * cos_gamma_t / cos_theta_t)).exp();
        (t, gamma_t)
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        // Compute hair coordinate system terms related to wo.
        let sin_theta_o = wo.x;
        let cos_theta_o = safe_sqrt(1.0 - sqr(sin_theta_o));
        let phi_o = atan2(wo.z, wo.y);

        // Compute hair coordinate system terms related to wi.
        let sin_theta_i = wi.x;
        let cos_theta_i = safe_sqrt(1.0 - sqr(sin_theta_i));
        let phi_i = atan2(wi.z, wi.y);

        let (t, gamma_t) = self.interior(sin_theta_o, cos_theta_o);

        // Evaluate hair BSDF.
        let phi = phi_i - phi_o;
        let ap = ap(cos_theta_o, self.eta, self.h, t);
        let mut fsum = Spectrum::ZERO;
        for p in 0..P_MAX {
            let (sin_theta_op, cos_theta_op) = self.tilt(p, sin_theta_o, cos_theta_o);
            fsum += mp(cos_theta_i, cos_theta_op, sin_theta_i, sin_theta_op, self.v[p])
                * ap[p]
                * np(phi, p, self.s, self.gamma_o, gamma_t);
        }

        // Compute contribution of remaining terms after P_MAX.
        fsum += mp(cos_theta_i, cos_theta_o, sin_theta_i, sin_theta_o, self.v[P_MAX]) * ap[P_MAX]
            / TWO_PI;

        if abs_cos_theta(wi) > 0.0 {
            fsum /= abs_cos_theta(wi);
        }
        debug_assert!(!fsum.y().is_infinite() && !fsum.y().is_nan());
        fsum
    }

    /// Returns the discrete PDF used to choose among the lobes.
    ///
    /// * `cos_theta_o` - cos(θo).
    fn compute_ap_pdf(&self, cos_theta_o: Float) -> [Float; P_MAX + 1] {
        let sin_theta_o = safe_sqrt(1.0 - cos_theta_o * cos_theta_o);
        let (t, _) = self.interior(sin_theta_o, cos_theta_o);
        let ap = ap(cos_theta_o, self.eta, self.h, t);

        // Compute PDF from Ap terms.
        let sum_y: Float = ap.iter().map(|a| a.y()).sum();
        let mut ap_pdf = [0.0; P_MAX + 1];
        if sum_y > 0.0 {
            for (pdf, a) in ap_pdf.iter_mut().zip(ap.iter()) {
                *pdf = a.y() / sum_y;
            }
        }
        ap_pdf
    }

    /// Samples a lobe in proportion to its attenuation, then samples its
    /// longitudinal and azimuthal terms.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u2` - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u2: &Point2f) -> BxDFSample {
        // Compute hair coordinate system terms related to wo.
        let sin_theta_o = wo.x;
        let cos_theta_o = safe_sqrt(1.0 - sqr(sin_theta_o));
        let phi_o = atan2(wo.z, wo.y);

        // Derive four random samples from u2.
        let mut u = [demux_float(u2[0]), demux_float(u2[1])];

        // Determine which term p to sample for hair scattering.
        let ap_pdf = self.compute_ap_pdf(cos_theta_o);
        let mut p = 0;
        while p < P_MAX {
            if u[0][0] < ap_pdf[p] {
                break;
            }
            u[0][0] -= ap_pdf[p];
            p += 1;
        }

        // Rotate sin(θo) and cos(θo) to account for hair scale tilt.
        let (sin_theta_op, cos_theta_op) = self.tilt(p, sin_theta_o, cos_theta_o);

        // Sample Mp to compute θi.
        u[1][0] = max(u[1][0], 1e-5);
        let cos_theta = 1.0
            + self.v[p] * (u[1][0] + (1.0 - u[1][0]) * (-2.0 / self.v[p]).exp()).ln();
        let sin_theta = safe_sqrt(1.0 - sqr(cos_theta));
        let cos_phi = (TWO_PI * u[1][1]).cos();
        let sin_theta_i = -cos_theta * sin_theta_op + sin_theta * cos_phi * cos_theta_op;
        let cos_theta_i = safe_sqrt(1.0 - sqr(sin_theta_i));

        // Sample Np to compute Δφ.
        let etap = (self.eta * self.eta - sqr(sin_theta_o)).sqrt() / cos_theta_o;
        let sin_gamma_t = self.h / etap;
        let gamma_t = safe_asin(sin_gamma_t);
        let dphi = if p < P_MAX {
            phi(p, self.gamma_o, gamma_t) + sample_trimmed_logistic(u[0][1], self.s, -PI, PI)
        } else {
            TWO_PI * u[0][1]
        };

        // Compute wi from sampled hair scattering angles.
        let phi_i = phi_o + dphi;
        let wi = Vector3f::new(sin_theta_i, cos_theta_i * phi_i.cos(), cos_theta_i * phi_i.sin());

        // Compute PDF for sampled hair scattering direction wi.
        let mut pdf = 0.0;
        for (p, ap) in ap_pdf.iter().enumerate().take(P_MAX) {
            let (sin_theta_op, cos_theta_op) = self.tilt(p, sin_theta_o, cos_theta_o);
            pdf += mp(cos_theta_i, cos_theta_op, sin_theta_i, sin_theta_op, self.v[p])
                * ap
                * np(dphi, p, self.s, self.gamma_o, gamma_t);
        }
        pdf += mp(cos_theta_i, cos_theta_o, sin_theta_i, sin_theta_o, self.v[P_MAX])
            * ap_pdf[P_MAX]
            * INV_TWO_PI;

        BxDFSample::new(self.f(wo, &wi), pdf, wi, self.get_type())
    }

    /// Evaluates the PDF for the sampling method.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        // Compute hair coordinate system terms related to wo.
        let sin_theta_o = wo.x;
        let cos_theta_o = safe_sqrt(1.0 - sqr(sin_theta_o));
        let phi_o = atan2(wo.z, wo.y);

        // Compute hair coordinate system terms related to wi.
        let sin_theta_i = wi.x;
        let cos_theta_i = safe_sqrt(1.0 - sqr(sin_theta_i));
        let phi_i = atan2(wi.z, wi.y);

        // Compute γt for refracted ray.
        let etap = (self.eta * self.eta - sqr(sin_theta_o)).sqrt() / cos_theta_o;
        let sin_gamma_t = self.h / etap;
        let gamma_t = safe_asin(sin_gamma_t);

        let ap_pdf = self.compute_ap_pdf(cos_theta_o);

        // Compute PDF sum for hair scattering events.
        let phi = phi_i - phi_o;
        let mut pdf = 0.0;
        for (p, ap) in ap_pdf.iter().enumerate().take(P_MAX) {
            let (sin_theta_op, cos_theta_op) = self.tilt(p, sin_theta_o, cos_theta_o);
            pdf += mp(cos_theta_i, cos_theta_op, sin_theta_i, sin_theta_op, self.v[p])
                * ap
                * np(phi, p, self.s, self.gamma_o, gamma_t);
        }
        pdf += mp(cos_theta_i, cos_theta_o, sin_theta_i, sin_theta_o, self.v[P_MAX])
            * ap_pdf[P_MAX]
            * INV_TWO_PI;
        pdf
    }
}

impl fmt::Display for HairBxDF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HairBxDF {{ h: {}, gamma_o: {}, eta: {}, beta_m: {}, beta_n: {}, v[0]: {}, s: {}, \
             sigma_a: {} }}",
            self.h,
            self.gamma_o,
            self.eta,
            self.beta_m,
            self.beta_n,
            self.v[0],
            self.s,
            self.sigma_a
        )
    }
}

/// Modified Bessel function of the first kind of order zero.
///
/// * `x` - The value.
fn i0(x: Float) -> Float {
    let mut val = 0.0;
    let mut x2i = 1.0;
    let mut ifact: i64 = 1;
    let mut i4 = 1.0;

    // I0(x) ≈ Σ_{i=0}^{9} x^(2i) / (4^i (i!)²)
    for i in 0..10 {
        if i > 1 {
            ifact *= i;
        }
        val += x2i / (i4 * sqr(ifact as Float));
        x2i *= x * x;
        i4 *= 4.0;
    }
    val
}

/// Returns ln(I0(x)), switching to an asymptotic form for large `x`.
///
/// * `x` - The value.
fn log_i0(x: Float) -> Float {
    if x > 12.0 {
        x + 0.5 * (-(TWO_PI.ln()) + (1.0 / x).ln() + 1.0 / (8.0 * x))
    } else {
        i0(x).ln()
    }
}

/// Longitudinal scattering function.
fn mp(
    cos_theta_i: Float,
    cos_theta_o: Float,
    sin_theta_i: Float,
    sin_theta_o: Float,
    v: Float,
) -> Float {
    let a = cos_theta_i * cos_theta_o / v;
    let b = sin_theta_i * sin_theta_o / v;
    let mp = if v <= 0.1 {
        (log_i0(a) - b - 1.0 / v + 0.6931 + (1.0 / (2.0 * v)).ln()).exp()
    } else {
        (-b).exp() * i0(a) / ((1.0 / v).sinh() * 2.0 * v)
    };
    debug_assert!(!mp.is_infinite() && !mp.is_nan());
    mp
}

/// Attenuation of each lobe from Fresnel reflection and absorption.
fn ap(cos_theta_o: Float, eta: Float, h: Float, t: Spectrum) -> [Spectrum; P_MAX + 1] {
    let mut ap = [Spectrum::ZERO; P_MAX + 1];

    // Compute p=0 attenuation at initial cylinder intersection.
    let cos_gamma_o = safe_sqrt(1.0 - h * h);
    let cos_theta = cos_theta_o * cos_gamma_o;
    let f = fr_dielectric(cos_theta, 1.0, eta);
    ap[0] = Spectrum::new(f);

    // Compute p=1 attenuation term.
    ap[1] = sqr(1.0 - f) * t;

    // Compute attenuation terms up to p=P_MAX.
    for p in 2..P_MAX {
        ap[p] = ap[p - 1] * t * f;
    }

    // Compute attenuation term accounting for remaining orders of scattering.
    let denom = Spectrum::ONE - t * f;
    ap[P_MAX] = (ap[P_MAX - 1] * f * t / denom).clamp_default();
    ap
}

/// Returns the net azimuthal deflection of lobe `p`.
#[inline]
fn phi(p: usize, gamma_o: Float, gamma_t: Float) -> Float {
    let p = p as Float;
    2.0 * p * gamma_t - 2.0 * gamma_o + p * PI
}

#[inline]
fn logistic(x: Float, s: Float) -> Float {
    let x = abs(x);
    (-x / s).exp() / (s * sqr(1.0 + (-x / s).exp()))
}

#[inline]
fn logistic_cdf(x: Float, s: Float) -> Float {
    1.0 / (1.0 + (-x / s).exp())
}

/// Logistic distribution normalized over [a, b].
#[inline]
fn trimmed_logistic(x: Float, s: Float, a: Float, b: Float) -> Float {
    debug_assert!(a < b);
    logistic(x, s) / (logistic_cdf(b, s) - logistic_cdf(a, s))
}

/// Azimuthal scattering function.
fn np(phi_: Float, p: usize, s: Float, gamma_o: Float, gamma_t: Float) -> Float {
    let mut dphi = phi_ - phi(p, gamma_o, gamma_t);

    // Remap dphi to [-π, π].
    while dphi > PI {
        dphi -= TWO_PI;
    }
    while dphi < -PI {
        dphi += TWO_PI;
    }
    trimmed_logistic(dphi, s, -PI, PI)
}

/// Samples the trimmed logistic distribution by inverting its CDF.
fn sample_trimmed_logistic(u: Float, s: Float, a: Float, b: Float) -> Float {
    debug_assert!(a < b);
    let k = logistic_cdf(b, s) - logistic_cdf(a, s);
    let x = -s * (1.0 / (u * k + logistic_cdf(a, s)) - 1.0).ln();
    debug_assert!(!x.is_nan());
    clamp(x, a, b)
}

/// Keeps every other bit of `x`, packing them into the low 16 bits.
fn compact_1_by_1(x: u32) -> u32 {
    let mut x = x & 0x55555555;
    x = (x ^ (x >> 1)) & 0x33333333;
    x = (x ^ (x >> 2)) & 0x0f0f0f0f;
    x = (x ^ (x >> 4)) & 0x00ff00ff;
    x = (x ^ (x >> 8)) & 0x0000ffff;
    x
}

/// Splits one uniform sample into two by de-interleaving its bits.
///
/// * `f` - A value in [0, 1).
fn demux_float(f: Float) -> Point2f {
    debug_assert!((0.0..1.0).contains(&f));
    let v = (f as f64 * (1u64 << 32) as f64) as u64;
    debug_assert!(v < 0x100000000);
    let bits = [compact_1_by_1(v as u32), compact_1_by_1((v >> 1) as u32)];
    Point2f::new(
        bits[0] as Float / (1 << 16) as Float,
        bits[1] as Float / (1 << 16) as Float,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RNG;
    use float_cmp::*;

    fn uniform_sample_sphere(u: &Point2f) -> Vector3f {
        let z = 1.0 - 2.0 * u[0];
        let r = safe_sqrt(1.0 - z * z);
        let phi = TWO_PI * u[1];
        Vector3f::new(r * phi.cos(), r * phi.sin(), z)
    }

    #[test]
    fn bessel_i0() {
        assert!(approx_eq!(f32, i0(0.0), 1.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, i0(1.0), 1.266_065_9, epsilon = 1e-5));
        assert!(approx_eq!(f32, log_i0(2.0), i0(2.0).ln(), epsilon = 1e-6));
    }

    #[test]
    fn demux_splits_bits() {
        let p = demux_float(0.0);
        assert_eq!(p, Point2f::new(0.0, 0.0));
        let p = demux_float(0.75);
        assert!((0.0..1.0).contains(&p[0]) && (0.0..1.0).contains(&p[1]));
    }

    #[test]
    fn sigma_a_from_concentration_mixes_pigments() {
        let s = HairBxDF::sigma_a_from_concentration(1.0, 0.0);
        assert_eq!(s, Spectrum::from_rgb(EUMELANIN_SIGMA_A));
        let s = HairBxDF::sigma_a_from_concentration(0.0, 2.0);
        assert!(approx_eq!(f32, s[2], 2.1, epsilon = 1e-6));
    }

    #[test]
    fn white_furnace() {
        // A non-absorbing fiber scatters all incident light.
        let mut rng = RNG::new(41);
        let count = 200_000;
        let mut sum = Spectrum::ZERO;
        for _ in 0..count {
            let h = -1.0 + 2.0 * rng.uniform_float();
            let hair = HairBxDF::new(h, 1.55, Spectrum::ZERO, 0.5, 0.5, 0.0);
            let wo = uniform_sample_sphere(&rng.uniform_point2f());
            let wi = uniform_sample_sphere(&rng.uniform_point2f());
            sum += hair.f(&wo, &wi) * abs_cos_theta(&wi);
        }
        let avg = sum.y() * FOUR_PI / count as Float;
        assert!((0.95..=1.05).contains(&avg), "avg = {}", avg);
    }

    #[test]
    fn sample_pdf_is_consistent() {
        let mut rng = RNG::new(43);
        let hair = HairBxDF::new(-0.4, 1.55, Spectrum::new(0.5), 0.3, 0.3, 2.0);
        let wo = uniform_sample_sphere(&rng.uniform_point2f());
        for _ in 0..100 {
            let s = hair.sample_f(&wo, &rng.uniform_point2f());
            if s.pdf > 0.0 {
                let pdf = hair.pdf(&wo, &s.wi);
                assert!(abs(s.pdf - pdf) <= 1e-2 * max(1.0, pdf), "{} vs {}", s.pdf, pdf);
            }
        }
    }

    #[test]
    fn zero_roughness_stays_finite() {
        let mut rng = RNG::new(53);
        for &(beta_m, beta_n) in [(0.0, 0.3), (0.3, 0.0), (0.0, 0.0)].iter() {
            let hair = HairBxDF::new(0.2, 1.55, Spectrum::new(0.5), beta_m, beta_n, 2.0);
            assert_eq!(hair.beta(), (max(beta_m, MIN_BETA), max(beta_n, MIN_BETA)));
            for _ in 0..200 {
                let wo = uniform_sample_sphere(&rng.uniform_point2f());
                let wi = uniform_sample_sphere(&rng.uniform_point2f());
                let f = hair.f(&wo, &wi);
                assert!(!f.has_nans() && !f.y().is_infinite());
                assert!(hair.pdf(&wo, &wi).is_finite());
                let s = hair.sample_f(&wo, &rng.uniform_point2f());
                assert!(!s.f.has_nans() && s.pdf.is_finite());
            }
        }
    }

    #[test]
    fn pdf_integrates_to_one() {
        let mut rng = RNG::new(47);
        let hair = HairBxDF::new(0.1, 1.55, Spectrum::new(0.25), 0.5, 0.5, 2.0);
        let wo = uniform_sample_sphere(&rng.uniform_point2f());
        let count = 100_000;
        let mut sum = 0.0;
        for _ in 0..count {
            let wi = uniform_sample_sphere(&rng.uniform_point2f());
            sum += hair.pdf(&wo, &wi);
        }
        let integral = sum * FOUR_PI / count as Float;
        assert!(approx_eq!(f32, integral, 1.0, epsilon = 0.05), "integral = {}", integral);
    }
}
