use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use fractal_canvas::{
    CliController, Complex, DEFAULT_CENTER, DEFAULT_DEPTH, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS,
    DEFAULT_REAL_SPAN, DEFAULT_SIERPINSKI_WIDTH, DEFAULT_WIDTH, ExecutionMode,
    MandelbrotColourMapKinds, MandelbrotParams, PpmFilePresenter, SierpinskiParams, SierpinskiStyle,
    Viewport,
};

/// Render Mandelbrot and Sierpinski fractals to binary PPM images.
///
/// Set RUST_LOG=debug for render parameters and timings.
#[derive(Parser, Debug)]
#[command(name = "fractal-canvas", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Escape-time render of the Mandelbrot set
    Mandelbrot(MandelbrotArgs),
    /// Recursive subdivision of a triangle into the Sierpinski gasket
    Sierpinski(SierpinskiArgs),
}

#[derive(Args, Debug)]
struct MandelbrotArgs {
    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Iteration budget per pixel
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    /// Plane units per pixel (defaults to 3.5 / width)
    #[arg(long)]
    scale: Option<f64>,

    /// Real part of the image centre
    #[arg(long, default_value_t = DEFAULT_CENTER.real, allow_negative_numbers = true)]
    center_x: f64,

    /// Imaginary part of the image centre
    #[arg(long, default_value_t = DEFAULT_CENTER.imag, allow_negative_numbers = true)]
    center_y: f64,

    #[arg(long, value_enum, default_value_t = ColourMapArg::Fire)]
    colour_map: ColourMapArg,

    /// Compute on the calling thread instead of the rayon pool
    #[arg(long)]
    serial: bool,

    #[arg(long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct SierpinskiArgs {
    /// Side of the square image in pixels
    #[arg(long, default_value_t = DEFAULT_SIERPINSKI_WIDTH)]
    width: u32,

    /// Subdivision depth
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Stroke triangle edges instead of filling them
    #[arg(long)]
    outline: bool,

    #[arg(long, default_value = "output/sierpinski.ppm")]
    output: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ColourMapArg {
    Fire,
    BlueWhite,
    Classic,
}

impl From<ColourMapArg> for MandelbrotColourMapKinds {
    fn from(arg: ColourMapArg) -> Self {
        match arg {
            ColourMapArg::Fire => Self::FireGradient,
            ColourMapArg::BlueWhite => Self::BlueWhiteGradient,
            ColourMapArg::Classic => Self::ClassicPalette,
        }
    }
}

impl SierpinskiArgs {
    fn params(&self) -> SierpinskiParams {
        let style = if self.outline {
            SierpinskiStyle::Outline
        } else {
            SierpinskiStyle::Filled
        };

        SierpinskiParams::new(self.width, self.depth).with_style(style)
    }
}

impl MandelbrotArgs {
    fn params(&self) -> Result<MandelbrotParams> {
        let center = Complex::new(self.center_x, self.center_y);
        let viewport = match self.scale {
            Some(scale) => Viewport::new(self.width, self.height, scale, center),
            None => Viewport::with_real_span(self.width, self.height, DEFAULT_REAL_SPAN, center),
        }
        .context("invalid viewport")?;

        let execution = if self.serial {
            ExecutionMode::Serial
        } else {
            ExecutionMode::Parallel
        };

        Ok(MandelbrotParams::new(viewport, self.max_iterations)
            .with_colour_map(self.colour_map.into())
            .with_execution(execution))
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut controller = CliController::new(PpmFilePresenter::new());

    let output = match cli.command {
        Command::Mandelbrot(args) => {
            let params = args.params()?;
            info!(
                "rendering mandelbrot {}x{} with {} iterations",
                args.width, args.height, args.max_iterations
            );
            controller
                .render_mandelbrot(&params)
                .context("mandelbrot render failed")?;
            args.output
        }
        Command::Sierpinski(args) => {
            info!(
                "rendering sierpinski {}x{} at depth {}",
                args.width, args.width, args.depth
            );
            controller
                .render_sierpinski(&args.params())
                .context("sierpinski render failed")?;
            args.output
        }
    };

    ensure_parent_dir(&output)?;
    controller
        .write(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Saved to {}", output.display());
    Ok(())
}
