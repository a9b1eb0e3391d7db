use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes binary PPM (P6) images. Alpha is dropped.
#[derive(Debug)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, out: &mut W) -> std::io::Result<()> {
        // P6 means binary RGB, then width, height and max_colour
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", buffer.width(), buffer.height())?;
        writeln!(out, "255")?;
        out.write_all(&rgba_to_rgb(buffer.buffer()))?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        let mut file = BufWriter::new(File::create(filepath)?);

        self.write_to(buffer, &mut file)?;
        file.flush()?;

        debug!(
            "wrote {}x{} PPM to {}",
            buffer.width(),
            buffer.height(),
            filepath.display()
        );

        Ok(())
    }
}
