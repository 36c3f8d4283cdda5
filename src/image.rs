use crate::domain::*;
use crate::error::Result;

/// Map a 2D domain onto an RGB image, one pixel per cell.
/// Values are scaled from `[min, max]` onto the TURBO gradient.
pub fn heat_map(domain: &OwnedDomain<2>, min: f64, max: f64) -> image::RgbImage {
    let aabb = domain.aabb();
    let gradient = colorous::TURBO;
    let span = if max > min { max - min } else { 1.0 };
    let mut img = image::RgbImage::new(aabb.cols() as u32, aabb.rows() as u32);
    for c in aabb.coord_iter() {
        let t = ((domain.view(&c) - min) / span).clamp(0.0, 1.0);
        let color = gradient.eval_continuous(t);
        img.put_pixel(c[1] as u32, c[0] as u32, image::Rgb(color.as_array()));
    }
    img
}

pub fn image2d<F: AsRef<std::path::Path>>(
    domain: &OwnedDomain<2>,
    min: f64,
    max: f64,
    s: &F,
) -> Result<()> {
    heat_map(domain, min, max).save(s)?;
    Ok(())
}
