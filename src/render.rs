use image::{GrayImage, Luma};

use crate::builder::QrCode;

// Render
//------------------------------------------------------------------------------

// Pure consumers of the finished module grid; every lookup goes through
// get_module so the quiet zone needs no special casing.
impl QrCode {
    const QUIET_ZONE: usize = 4;

    /// Renders the symbol to a grayscale image at `module_sz` pixels per
    /// module with a four module quiet zone.
    pub fn to_image(&self, module_sz: u32) -> GrayImage {
        let qz_sz = Self::QUIET_ZONE as u32 * module_sz;
        let qr_sz = self.size() as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = GrayImage::new(total_sz, total_sz);
        for i in 0..total_sz {
            for j in 0..total_sz {
                let x = (j as i32 - qz_sz as i32).div_euclid(module_sz as i32);
                let y = (i as i32 - qz_sz as i32).div_euclid(module_sz as i32);
                let pixel = if self.get_module(x, y) { Luma([0]) } else { Luma([255]) };
                canvas.put_pixel(j, i, pixel);
            }
        }

        canvas
    }

    /// Renders the symbol as block-character art, `module_sz` characters per
    /// module, dark modules printed as spaces on a light background.
    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = Self::QUIET_ZONE * module_sz;
        let qr_sz = self.size() * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::with_capacity(total_sz * (total_sz + 1));
        for i in 0..total_sz {
            for j in 0..total_sz {
                let x = (j as i32 - qz_sz as i32).div_euclid(module_sz as i32);
                let y = (i as i32 - qz_sz as i32).div_euclid(module_sz as i32);
                canvas.push(if self.get_module(x, y) { ' ' } else { '█' });
            }
            canvas.push('\n');
        }

        canvas
    }

    /// Renders the symbol as an SVG document with `border` quiet-zone
    /// modules on each side.
    pub fn to_svg(&self, border: usize) -> String {
        let dim = self.size() + 2 * border;
        let mut path = String::new();
        for y in 0..self.size() {
            for x in 0..self.size() {
                if self.get_module(x as i32, y as i32) {
                    if !path.is_empty() {
                        path.push(' ');
                    }
                    path.push_str(&format!("M{},{}h1v1h-1z", x + border, y + border));
                }
            }
        }
        format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" ",
                "viewBox=\"0 0 {dim} {dim}\" stroke=\"none\">\n",
                "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n",
                "\t<path d=\"{path}\" fill=\"#000000\"/>\n",
                "</svg>\n"
            ),
            dim = dim,
            path = path
        )
    }
}
