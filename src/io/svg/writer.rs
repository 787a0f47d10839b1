//! SVG writing operations.

use std::io::Write;

use anyhow::{Context, Result};

/// String-based SVG writer; the map is embedded inline in the page.
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { std::io::Result::Ok(()) }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(())
    }
}

impl SvgStringWriter {
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }

    /// Write the opening <svg> tag. `bounds` is recorded as data attributes
    /// so a client script can map pointer positions back to lon/lat.
    pub(crate) fn write_header(&mut self, width: f64, height: f64, bounds: Option<&geo::Rect>) -> Result<()> {
        write!(self, r##"<svg xmlns="http://www.w3.org/2000/svg" class="atlas-map" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}""##)?;
        if let Some(bounds) = bounds {
            write!(self, r##" data-lon-min="{}" data-lon-max="{}" data-lat-min="{}" data-lat-max="{}""##,
                bounds.min().x,
                bounds.max().x,
                bounds.min().y,
                bounds.max().y,
            )?;
        }
        writeln!(self, ">")?;
        writeln!(self, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
        Ok(())
    }

    /// Write SVG styles for region paths.
    pub(crate) fn write_styles(&mut self) -> Result<()> {
        writeln!(self, r##"<defs>
<style>
    .region {{ vector-effect: non-scaling-stroke; fill-rule: evenodd; cursor: pointer; }}
    .region:hover {{ stroke-width: 2.5; }}
</style>
</defs>"##)?;
        Ok(())
    }

    /// Write the closing </svg> tag.
    pub(crate) fn write_footer(&mut self) -> Result<()> {
        writeln!(self, "</svg>")?;
        Ok(())
    }
}

/// XML declaration for standalone `.svg` files.
pub(crate) const XML_DECLARATION: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##;
