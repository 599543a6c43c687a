//! BSDF

use super::*;
use crate::interaction::SurfaceInteraction;

/// Maximum number of BxDFs that can be stored in `BSDF`.
pub const MAX_BXDFS: usize = 8;

/// BSDF represents a collection of BRDFs and BTDFs sharing one shading frame.
/// It always holds at least one lobe.
#[derive(Clone, Debug)]
pub struct BSDF {
    /// The shading frame.
    frame: ShadingFrame,

    /// The `BxDFs` in the order they were added.
    bxdfs: Vec<BxDF>,

    /// Relative index of refraction over the surface boundary.
    eta: Float,
}

impl BSDF {
    /// Creates a new `BSDF`. Returns `None` if there are no lobes.
    ///
    /// * `si`    - The differential geometry at the point on a surface.
    /// * `eta`   - Optional relative index of refraction over the surface
    ///             boundary. If not provided, defaults to 1.0; used for
    ///             opaque surfaces.
    /// * `bxdfs` - The lobes.
    pub fn new(si: &SurfaceInteraction, eta: Option<Float>, bxdfs: Vec<BxDF>) -> Option<Self> {
        assert!(
            bxdfs.len() <= MAX_BXDFS,
            "BSDF maximum limit of {} BxDFs exceeded.",
            MAX_BXDFS
        );
        if bxdfs.is_empty() {
            return None;
        }
        Some(Self {
            frame: ShadingFrame::new(si),
            bxdfs,
            eta: eta.unwrap_or(1.0),
        })
    }

    /// Returns the shading frame.
    pub fn frame(&self) -> &ShadingFrame {
        &self.frame
    }

    /// Returns the lobes in the order they were added.
    pub fn bxdfs(&self) -> &[BxDF] {
        &self.bxdfs
    }

    /// Returns the relative index of refraction over the surface boundary.
    pub fn eta(&self) -> Float {
        self.eta
    }

    /// Returns the number of `BxDF`s that match the given type.
    ///
    /// * `bxdf_type` - The `BxDFType` to match (usually `BSDF_ALL`).
    pub fn num_components(&self, bxdf_type: BxDFType) -> usize {
        self.bxdfs
            .iter()
            .filter(|b| b.matches_flags(bxdf_type))
            .count()
    }

    /// Sums `f` over the matching lobes that are on the correct side of the
    /// geometric normal.
    fn sum_f(
        &self,
        wo_w: &Vector3f,
        wi_w: &Vector3f,
        wo: &Vector3f,
        wi: &Vector3f,
        bxdf_type: BxDFType,
    ) -> Spectrum {
        let reflect = wi_w.dot(&self.frame.ng) * wo_w.dot(&self.frame.ng) > 0.0;
        let side = if reflect {
            BxDFType::BSDF_REFLECTION
        } else {
            BxDFType::BSDF_TRANSMISSION
        };
        self.bxdfs
            .iter()
            .filter(|b| b.matches_flags(bxdf_type) && b.get_type().intersects(side))
            .fold(Spectrum::ZERO, |acc, b| acc + b.f(wo, wi))
    }

    /// Returns the BSDF evaluated for a pair of directions.
    ///
    /// * `wo_w`      - Outgoing direction in world-space.
    /// * `wi_w`      - Incident direction in world-space.
    /// * `bxdf_type` - The `BxDFType` to evaluate.
    pub fn f(&self, wo_w: &Vector3f, wi_w: &Vector3f, bxdf_type: BxDFType) -> Spectrum {
        let wi = self.frame.world_to_local(wi_w);
        let wo = self.frame.world_to_local(wo_w);
        if wo.z == 0.0 {
            return Spectrum::ZERO;
        }
        self.sum_f(wo_w, wi_w, &wo, &wi, bxdf_type)
    }

    /// Samples an incident direction by picking one of the matching lobes
    /// uniformly and sampling it.
    ///
    /// * `wo_w`      - Outgoing direction in world-space.
    /// * `u`         - The 2D uniform random values.
    /// * `bxdf_type` - The `BxDFType` to sample.
    pub fn sample_f(&self, wo_w: &Vector3f, u: &Point2f, bxdf_type: BxDFType) -> BxDFSample {
        // Choose which `BxDF` to sample.
        let matching_comps = self.num_components(bxdf_type);
        if matching_comps == 0 {
            return BxDFSample::default();
        }
        let comp = min(
            (u[0] * matching_comps as Float).floor() as usize,
            matching_comps - 1,
        );

        // Get BxDF for chosen component.
        let Some((index, bxdf)) = self
            .bxdfs
            .iter()
            .enumerate()
            .filter(|(_, b)| b.matches_flags(bxdf_type))
            .nth(comp)
        else {
            return BxDFSample::default();
        };

        // Remap BxDF sample `u` to `[0,1)^2`.
        let u_remapped = Point2f::new(
            min(u[0] * matching_comps as Float - comp as Float, ONE_MINUS_EPSILON),
            u[1],
        );

        // Sample chosen `BxDF`.
        let wo = self.frame.world_to_local(wo_w);
        if wo.z == 0.0 {
            return BxDFSample::from(bxdf.get_type());
        }
        let sample = bxdf.sample_f(&wo, &u_remapped);
        if sample.pdf == 0.0 {
            return BxDFSample::from(sample.bxdf_type);
        }
        let wi_w = self.frame.local_to_world(&sample.wi);
        let is_specular = bxdf.get_type().contains(BxDFType::BSDF_SPECULAR);

        // Compute overall PDF with all matching BxDFs.
        let mut pdf = sample.pdf;
        if !is_specular && matching_comps > 1 {
            pdf += self
                .bxdfs
                .iter()
                .enumerate()
                .filter(|(i, b)| *i != index && b.matches_flags(bxdf_type))
                .map(|(_, b)| b.pdf(&wo, &sample.wi))
                .sum::<Float>();
        }
        if matching_comps > 1 {
            pdf /= matching_comps as Float;
        }

        // Compute value of BSDF for sampled direction.
        let f = if is_specular {
            sample.f
        } else {
            self.sum_f(wo_w, &wi_w, &wo, &sample.wi, bxdf_type)
        };
        BxDFSample::new(f, pdf, wi_w, sample.bxdf_type)
    }

    /// Evaluates the PDF of `sample_f()` for a pair of directions.
    ///
    /// * `wo_w`      - Outgoing direction in world-space.
    /// * `wi_w`      - Incident direction in world-space.
    /// * `bxdf_type` - The `BxDFType` to evaluate.
    pub fn pdf(&self, wo_w: &Vector3f, wi_w: &Vector3f, bxdf_type: BxDFType) -> Float {
        let wo = self.frame.world_to_local(wo_w);
        let wi = self.frame.world_to_local(wi_w);
        if wo.z == 0.0 {
            return 0.0;
        }

        let (matching_comps, pdf) = self
            .bxdfs
            .iter()
            .filter(|b| b.matches_flags(bxdf_type))
            .fold((0, 0.0), |(n, pdf), b| (n + 1, pdf + b.pdf(&wo, &wi)));
        if matching_comps > 0 {
            pdf / matching_comps as Float
        } else {
            0.0
        }
    }

    /// Computes the hemispherical-directional reflectance function ρ.
    ///
    /// * `wo_w`      - Outgoing direction in world-space.
    /// * `u`         - Samples used by Monte Carlo algorithm.
    /// * `bxdf_type` - The `BxDFType` to evaluate.
    pub fn rho_hd(&self, wo_w: &Vector3f, u: &[Point2f], bxdf_type: BxDFType) -> Spectrum {
        let wo = self.frame.world_to_local(wo_w);
        self.bxdfs
            .iter()
            .filter(|b| b.matches_flags(bxdf_type))
            .fold(Spectrum::ZERO, |acc, b| acc + b.rho_hd(&wo, u))
    }

    /// Computes the hemispherical-hemispherical reflectance function ρ.
    ///
    /// * `u1`        - Samples used by Monte Carlo algorithm.
    /// * `u2`        - Samples used by Monte Carlo algorithm.
    /// * `bxdf_type` - The `BxDFType` to evaluate.
    pub fn rho_hh(&self, u1: &[Point2f], u2: &[Point2f], bxdf_type: BxDFType) -> Spectrum {
        self.bxdfs
            .iter()
            .filter(|b| b.matches_flags(bxdf_type))
            .fold(Spectrum::ZERO, |acc, b| acc + b.rho_hh(u1, u2))
    }
}

impl fmt::Display for BSDF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BSDF {{ eta: {}, nbxdfs: {}", self.eta, self.bxdfs.len())?;
        for (i, b) in self.bxdfs.iter().enumerate() {
            write!(f, ", bxdfs[{}]: {}", i, b)?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3f;
    use crate::rng::RNG;
    use float_cmp::*;

    fn si() -> SurfaceInteraction {
        SurfaceInteraction::new(
            Point3f::default(),
            Point2f::default(),
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
        )
    }

    fn glossy() -> BxDF {
        MicrofacetReflection::new(
            Spectrum::ONE,
            TrowbridgeReitzDistribution::new(0.2, 0.2, true).into(),
            FresnelDielectric::new(1.0, 1.5),
        )
        .into()
    }

    #[test]
    fn empty_is_none() {
        assert!(BSDF::new(&si(), None, vec![]).is_none());
    }

    #[test]
    fn keeps_lobe_order_and_eta() {
        let bsdf = BSDF::new(
            &si(),
            Some(1.5),
            vec![LambertianReflection::new(Spectrum::ONE).into(), glossy()],
        )
        .unwrap();
        assert_eq!(bsdf.eta(), 1.5);
        assert!(matches!(bsdf.bxdfs()[0], BxDF::LambertianReflection(_)));
        assert!(matches!(bsdf.bxdfs()[1], BxDF::MicrofacetReflection(_)));
        assert_eq!(bsdf.num_components(BxDFType::BSDF_ALL), 2);
        let diffuse = BxDFType::BSDF_REFLECTION | BxDFType::BSDF_DIFFUSE;
        assert_eq!(bsdf.num_components(diffuse), 1);
    }

    #[test]
    #[should_panic]
    fn too_many_lobes() {
        let lobes = vec![BxDF::from(LambertianReflection::new(Spectrum::ONE)); MAX_BXDFS + 1];
        let _ = BSDF::new(&si(), None, lobes);
    }

    #[test]
    fn f_respects_filter() {
        let bsdf = BSDF::new(
            &si(),
            None,
            vec![LambertianReflection::new(Spectrum::ONE).into(), glossy()],
        )
        .unwrap();
        let wo = Vector3f::new(0.0, 0.6, 0.8);
        let wi = Vector3f::new(0.0, -0.6, 0.8);
        let all = bsdf.f(&wo, &wi, BxDFType::BSDF_ALL);
        let diffuse = bsdf.f(&wo, &wi, BxDFType::BSDF_REFLECTION | BxDFType::BSDF_DIFFUSE);
        assert!(approx_eq!(f32, diffuse[0], INV_PI, epsilon = 1e-6));
        assert!(all[0] > diffuse[0]);

        // A reflection-only BSDF does not transmit.
        let below = Vector3f::new(0.0, -0.6, -0.8);
        assert!(bsdf.f(&wo, &below, BxDFType::BSDF_ALL).is_black());
    }

    #[test]
    fn sampling_agrees_with_pdf_and_f() {
        let bsdf = BSDF::new(
            &si(),
            None,
            vec![LambertianReflection::new(Spectrum::new(0.5)).into(), glossy()],
        )
        .unwrap();
        let mut rng = RNG::new(53);
        let wo = Vector3f::new(0.3, 0.2, 0.93).normalize();
        for _ in 0..200 {
            let s = bsdf.sample_f(&wo, &rng.uniform_point2f(), BxDFType::BSDF_ALL);
            if s.pdf > 0.0 {
                let pdf = bsdf.pdf(&wo, &s.wi, BxDFType::BSDF_ALL);
                assert!(abs(s.pdf - pdf) <= 1e-3 * max(1.0, pdf));
                let f = bsdf.f(&wo, &s.wi, BxDFType::BSDF_ALL);
                assert!(abs(s.f[0] - f[0]) <= 1e-3 * max(1.0, f[0]));
            }
        }
    }

    #[test]
    fn specular_sample_is_not_averaged() {
        let bsdf = BSDF::new(
            &si(),
            None,
            vec![
                LambertianReflection::new(Spectrum::new(0.5)).into(),
                SpecularReflection::new(Spectrum::ONE, FresnelConstant::new(Spectrum::ONE)).into(),
            ],
        )
        .unwrap();
        let wo = Vector3f::new(0.0, 0.6, 0.8);
        // Second half of [0, 1) selects the specular lobe.
        let s = bsdf.sample_f(&wo, &Point2f::new(0.75, 0.5), BxDFType::BSDF_ALL);
        assert!(s.bxdf_type.contains(BxDFType::BSDF_SPECULAR));
        assert_eq!(s.pdf, 0.5);
        assert!(approx_eq!(f32, s.wi.y, -0.6, epsilon = 1e-6));
        assert!(approx_eq!(f32, s.f[0], 1.0 / 0.8, epsilon = 1e-5));
    }
}
