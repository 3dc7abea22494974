// mix-core/src/units.rs

use uom::si::f64::{Length as UomLength, MassDensity as UomMassDensity, Pressure as UomPressure};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;

/// Compressive strength (stored as a pressure).
pub type Strength = UomPressure;

/// Mass of a constituent per unit volume of concrete.
pub type Content = UomMassDensity;

#[inline]
pub fn mpa(v: f64) -> Strength {
    use uom::si::pressure::megapascal;
    Strength::new::<megapascal>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Content {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Content::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn in_mpa(v: Strength) -> f64 {
    use uom::si::pressure::megapascal;
    v.get::<megapascal>()
}

#[inline]
pub fn in_kg_per_m3(v: Content) -> f64 {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    v.get::<kilogram_per_cubic_meter>()
}

#[inline]
pub fn in_mm(v: Length) -> f64 {
    use uom::si::length::millimeter;
    v.get::<millimeter>()
}
