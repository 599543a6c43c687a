//! BxDF Type

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Stores combinations of reflection models.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BxDFType: u8 {
        const BSDF_REFLECTION = 0b00001;
        const BSDF_TRANSMISSION = 0b00010;
        const BSDF_DIFFUSE = 0b00100;
        const BSDF_GLOSSY = 0b01000;
        const BSDF_SPECULAR = 0b10000;
        const BSDF_ALL = Self::BSDF_REFLECTION.bits()
            | Self::BSDF_TRANSMISSION.bits()
            | Self::BSDF_DIFFUSE.bits()
            | Self::BSDF_GLOSSY.bits()
            | Self::BSDF_SPECULAR.bits();
    }
}

impl fmt::Display for BxDFType {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(BxDFType, &str); 5] = [
            (BxDFType::BSDF_REFLECTION, "BSDF_REFLECTION"),
            (BxDFType::BSDF_TRANSMISSION, "BSDF_TRANSMISSION"),
            (BxDFType::BSDF_DIFFUSE, "BSDF_DIFFUSE"),
            (BxDFType::BSDF_GLOSSY, "BSDF_GLOSSY"),
            (BxDFType::BSDF_SPECULAR, "BSDF_SPECULAR"),
        ];
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        if names.is_empty() {
            write!(f, "BSDF_NONE")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}
