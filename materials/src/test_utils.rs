//! Helpers shared by the material tests.

use shading::geometry::*;
use shading::interaction::SurfaceInteraction;
use shading::pbrt::*;
use shading::reflection::*;
use shading::spectrum::Spectrum;
use shading::texture::ArcTexture;
use textures::ConstantTexture;

/// Returns an interaction on the z = 0 plane facing +z with the given uv.
pub fn interaction(u: Float, v: Float) -> SurfaceInteraction {
    SurfaceInteraction::new(
        Point3f::new(0.0, 0.0, 0.0),
        Point2f::new(u, v),
        Vector3f::new(0.0, 0.0, 1.0),
        Vector3f::new(1.0, 0.0, 0.0),
        Vector3f::new(0.0, 1.0, 0.0),
    )
}

pub fn float_tex(v: Float) -> ArcTexture<Float> {
    ConstantTexture::arc(v)
}

pub fn spectrum_tex(v: Float) -> ArcTexture<Spectrum> {
    ConstantTexture::arc(Spectrum::new(v))
}

/// Returns the lobe types of a BSDF in order.
pub fn lobe_types(bsdf: &BSDF) -> Vec<BxDFType> {
    bsdf.bxdfs().iter().map(|b| b.get_type()).collect()
}

/// Evaluates, samples and queries the pdf of a BSDF over a spread of
/// directions and asserts every result is a number.
pub fn assert_total(bsdf: &BSDF) {
    let wo = Vector3f::new(0.3, 0.2, 0.9).normalize();
    let dirs = [
        Vector3f::new(-0.4, 0.1, 0.9),
        Vector3f::new(0.0, 0.0, 1.0),
        Vector3f::new(-0.3, -0.2, -0.9),
        Vector3f::new(0.5, -0.5, -0.7),
        Vector3f::new(0.9, 0.1, 0.05),
    ];
    for wi in dirs.iter().map(|d| d.normalize()) {
        let f = bsdf.f(&wo, &wi, BxDFType::BSDF_ALL);
        assert!(!f.has_nans(), "f({:?}) = {}", wi, f);
        let pdf = bsdf.pdf(&wo, &wi, BxDFType::BSDF_ALL);
        assert!(!pdf.is_nan(), "pdf({:?}) = {}", wi, pdf);
    }
    for &u in [0.05, 0.3, 0.5, 0.7, 0.95].iter() {
        let s = bsdf.sample_f(&wo, &Point2f::new(u, 1.0 - u), BxDFType::BSDF_ALL);
        assert!(!s.f.has_nans() && !s.pdf.is_nan(), "sample({}) = {} / {}", u, s.f, s.pdf);
    }
}
