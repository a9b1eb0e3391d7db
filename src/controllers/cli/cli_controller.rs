use std::path::Path;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::render_error::RenderError;
use crate::core::actions::render::render_mandelbrot::render_mandelbrot;
use crate::core::actions::render::render_sierpinski::render_sierpinski;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::check_dimensions;
use crate::core::fractals::mandelbrot::mandelbrot_params::MandelbrotParams;
use crate::core::fractals::sierpinski::sierpinski_params::SierpinskiParams;

/// Renders into an owned buffer and hands the last image to a file presenter.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn render_mandelbrot(&mut self, params: &MandelbrotParams) -> Result<(), RenderError> {
        let viewport = params.viewport;
        viewport.validate()?;

        let mut buffer = PixelBuffer::new(viewport.width, viewport.height);
        render_mandelbrot(params, &mut buffer)?;

        self.buffer = Some(buffer);
        Ok(())
    }

    /// Sierpinski output starts from a white canvas so removed centres stay visible.
    pub fn render_sierpinski(&mut self, params: &SierpinskiParams) -> Result<(), RenderError> {
        check_dimensions(params.width, params.width)?;

        let mut buffer = PixelBuffer::filled(params.width, params.width, Colour::WHITE);
        render_sierpinski(params, &mut buffer)?;

        self.buffer = Some(buffer);
        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let Some(buffer) = &self.buffer else {
            return Err(std::io::Error::other("nothing has been rendered yet"));
        };

        self.presenter.present(buffer, filepath.as_ref())?;
        info!("saved to {}", filepath.as_ref().display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::presenters::file::ppm::PpmFilePresenter;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(PathBuf, u32, u32)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented.borrow_mut().push((
                filepath.as_ref().to_path_buf(),
                buffer.width(),
                buffer.height(),
            ));
            Ok(())
        }
    }

    fn small_mandelbrot() -> MandelbrotParams {
        let mut params = MandelbrotParams::default();
        params.viewport.width = 32;
        params.viewport.height = 24;
        params.viewport.scale = 3.5 / 32.0;
        params.max_iterations = 64;
        params
    }

    #[test]
    fn test_write_before_render_fails() {
        let recorder = RecordingPresenter::default();
        let controller = CliController::new(&recorder);

        assert!(controller.write("unused.ppm").is_err());
        assert!(recorder.presented.borrow().is_empty());
    }

    #[test]
    fn test_render_mandelbrot_then_write_presents_buffer() {
        let recorder = RecordingPresenter::default();
        let mut controller = CliController::new(&recorder);

        controller.render_mandelbrot(&small_mandelbrot()).unwrap();
        controller.write("out.ppm").unwrap();

        assert_eq!(
            recorder.presented.borrow().as_slice(),
            &[(PathBuf::from("out.ppm"), 32, 24)]
        );
    }

    #[test]
    fn test_render_sierpinski_uses_white_canvas() {
        let mut controller = CliController::new(PpmFilePresenter::new());

        controller
            .render_sierpinski(&SierpinskiParams::new(64, 1))
            .unwrap();

        let buffer = controller.buffer().unwrap();
        assert_eq!(buffer.width(), 64);
        assert_eq!(buffer.height(), 64);
        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Ok(Colour::WHITE));
        assert_eq!(buffer.pixel(Point { x: 32, y: 42 }), Ok(Colour::WHITE));
        assert_eq!(buffer.pixel(Point { x: 32, y: 21 }), Ok(Colour::BLACK));
    }

    #[test]
    fn test_oversized_render_is_rejected_before_allocating() {
        let mut controller = CliController::new(PpmFilePresenter::new());
        let mut params = small_mandelbrot();
        params.viewport.width = 100_000;
        params.viewport.height = 100_000;

        assert_eq!(
            controller.render_mandelbrot(&params),
            Err(RenderError::InvalidDimension {
                width: 100_000,
                height: 100_000
            })
        );
        assert!(controller.buffer().is_none());
    }

    #[test]
    fn test_write_ppm_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sierpinski.ppm");
        let mut controller = CliController::new(PpmFilePresenter::new());

        controller
            .render_sierpinski(&SierpinskiParams::new(16, 2))
            .unwrap();
        controller.write(&path).unwrap();

        assert!(std::fs::read(&path).unwrap().starts_with(b"P6\n16 16\n255\n"));
    }
}
