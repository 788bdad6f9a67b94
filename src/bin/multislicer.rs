use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use multislicer::{
    Argb8, Argb16, Expansion, ImageMut, ImageRef, Pixel, Point, RenderStats, RenderThreading,
    SampleMode, SegmentTable, SliceParams,
};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "multislicer", version)]
struct Cli {
    /// Log render decisions at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply the slice effect to a PNG.
    Render(RenderArgs),
    /// Print the division points and segment table for an image size as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// JSON parameter file; flags below override its fields.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Slicing angle in degrees.
    #[arg(long, allow_hyphen_values = true)]
    angle: Option<f64>,

    /// Signed shift in pixels.
    #[arg(long, allow_hyphen_values = true)]
    shift: Option<f64>,

    /// Visible fraction of each slice, 0 to 1.
    #[arg(long)]
    width: Option<f64>,

    /// Number of slices.
    #[arg(long)]
    slices: Option<i64>,

    /// Layout seed.
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i32>,

    /// Anchor x in source pixels (default: image centre).
    #[arg(long, allow_hyphen_values = true)]
    anchor_x: Option<f64>,

    /// Anchor y in source pixels (default: image centre).
    #[arg(long, allow_hyphen_values = true)]
    anchor_y: Option<f64>,

    /// Resolution scale applied to the shift.
    #[arg(long)]
    scale: Option<f64>,

    /// Source sampling filter.
    #[arg(long, value_enum)]
    sample: Option<SampleChoice>,

    /// Paint division guides.
    #[arg(long)]
    guides: bool,

    /// Grow the output so shifted content is not clipped.
    #[arg(long)]
    expand: bool,

    /// Render through the 16-bit pixel path.
    #[arg(long)]
    deep: bool,

    /// Worker threads (default: one per core).
    #[arg(long)]
    threads: Option<usize>,

    /// Print the SHA-256 of the written RGBA bytes.
    #[arg(long)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Image width in pixels.
    #[arg(long)]
    width: u32,

    /// Image height in pixels.
    #[arg(long)]
    height: u32,

    /// Number of slices.
    #[arg(long, default_value_t = 10)]
    slices: i64,

    /// Layout seed.
    #[arg(long, default_value_t = 1234, allow_hyphen_values = true)]
    seed: i32,

    /// Visible fraction of each slice.
    #[arg(long, default_value_t = 1.0)]
    width_fraction: f64,

    /// Signed shift; only its sign affects the layout.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    shift: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SampleChoice {
    Nearest,
    Bilinear,
}

impl From<SampleChoice> for SampleMode {
    fn from(v: SampleChoice) -> Self {
        match v {
            SampleChoice::Nearest => SampleMode::Nearest,
            SampleChoice::Bilinear => SampleMode::Bilinear,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let params = load_params(&args)?;
    let input = image::open(&args.in_path)
        .with_context(|| format!("read image '{}'", args.in_path.display()))?
        .to_rgba8();
    let (width, height) = input.dimensions();

    let threading = RenderThreading {
        threads: args.threads,
        ..RenderThreading::default()
    };
    let expansion = if args.expand {
        Expansion::for_params(&params, width, height)
    } else {
        None
    };

    let (rgba, out_w, out_h, stats) = if args.deep {
        let src: Vec<Argb16> = input
            .as_raw()
            .chunks_exact(4)
            .map(|c| Argb16::from_rgba8([c[0], c[1], c[2], c[3]]))
            .collect();
        let (out, w, h, stats) = render_buffer(&src, width, height, &params, expansion, &threading)?;
        let rgba = out.iter().flat_map(|p| p.to_rgba8()).collect::<Vec<u8>>();
        (rgba, w, h, stats)
    } else {
        let src: Vec<Argb8> = input
            .as_raw()
            .chunks_exact(4)
            .map(|c| Argb8::from_rgba([c[0], c[1], c[2], c[3]]))
            .collect();
        let (out, w, h, stats) = render_buffer(&src, width, height, &params, expansion, &threading)?;
        let rgba = out.iter().flat_map(|p| p.to_rgba()).collect::<Vec<u8>>();
        (rgba, w, h, stats)
    };
    tracing::debug!(?stats, "render finished");

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &rgba,
        out_w,
        out_h,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    if args.digest {
        println!("{}", sha256_hex(&rgba));
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn render_buffer<P: Pixel>(
    src: &[P],
    width: u32,
    height: u32,
    params: &SliceParams,
    expansion: Option<Expansion>,
    threading: &RenderThreading,
) -> anyhow::Result<(Vec<P>, u32, u32, RenderStats)> {
    let src = ImageRef::packed(src, width, height)?;
    let (mut out, out_w, out_h, offset) = match expansion {
        Some(e) => (e.allocate::<P>()?, e.width, e.height, e.origin_offset()),
        None => (
            vec![P::TRANSPARENT; src.stride() * height as usize],
            width,
            height,
            multislicer::PixelOffset::ZERO,
        ),
    };
    let mut dst = ImageMut::packed(&mut out, out_w, out_h)?.with_origin_offset(offset);
    let stats = multislicer::render_with(&src, &mut dst, params, threading)
        .context("render slice effect")?;
    Ok((out, out_w, out_h, stats))
}

fn load_params(args: &RenderArgs) -> anyhow::Result<SliceParams> {
    let mut params = match &args.params {
        Some(path) => read_params(path)?,
        None => SliceParams::default(),
    };
    if let Some(v) = args.angle {
        params.angle_deg = v;
    }
    if let Some(v) = args.shift {
        params.shift = v;
    }
    if let Some(v) = args.width {
        params.width_fraction = v;
    }
    if let Some(v) = args.slices {
        params.slice_count = v;
    }
    if let Some(v) = args.seed {
        params.seed = v;
    }
    if let Some(v) = args.scale {
        params.resolution_scale = v;
    }
    if let Some(v) = args.sample {
        params.sample_mode = v.into();
    }
    if args.guides {
        params.guides = true;
    }
    match (args.anchor_x, args.anchor_y, params.anchor) {
        (None, None, _) => {}
        (Some(x), Some(y), _) => params.anchor = Some(Point::new(x, y)),
        (x, y, Some(prev)) => {
            params.anchor = Some(Point::new(x.unwrap_or(prev.x), y.unwrap_or(prev.y)))
        }
        (_, _, None) => anyhow::bail!("--anchor-x and --anchor-y must be given together"),
    }
    Ok(params)
}

fn read_params(path: &Path) -> anyhow::Result<SliceParams> {
    let f = File::open(path).with_context(|| format!("open params '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse params '{}'", path.display()))
}

#[derive(serde::Serialize)]
struct Layout {
    axis_length: f64,
    division_points: Vec<f64>,
    segments: SegmentTable,
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let params = SliceParams {
        slice_count: args.slices,
        seed: args.seed,
        width_fraction: args.width_fraction,
        shift: args.shift,
        ..SliceParams::default()
    }
    .resolve(args.width, args.height);

    let axis_length =
        multislicer::anchored_axis_length(args.width, args.height, params.anchor);
    let division_points =
        multislicer::division_points(params.slice_count, axis_length, params.seed)?;
    let segments = SegmentTable::build(
        &division_points,
        params.width_fraction,
        params.seed,
        params.shift_sign,
    )?;

    let layout = Layout {
        axis_length,
        division_points,
        segments,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&layout).context("serialize layout")?
    );
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
