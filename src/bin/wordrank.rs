use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use wordrank::{FrequencyRanker, Millis, Stopwords, SvgStyle, Visualization, VizConfig};

#[derive(Parser, Debug)]
#[command(name = "wordrank", version)]
struct Cli {
    /// Log reconciliation and animation events to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the top-ranked words of a text as JSON.
    Rank(RankArgs),
    /// Animate a sequence of texts and write one file per frame.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct RankArgs {
    /// Input text file (reads stdin when omitted).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Newline-separated stopword list replacing the built-in one.
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Print the full tally instead of the top five.
    #[arg(long, default_value_t = false)]
    all: bool,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Input text files, submitted in order.
    #[arg(long = "in", required = true)]
    in_paths: Vec<PathBuf>,

    /// Visualization config JSON (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Newline-separated stopword list replacing the built-in one.
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Output directory for frames.
    #[arg(long)]
    out_dir: PathBuf,

    /// Frame sampling rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Extra time to keep sampling after each text settles.
    #[arg(long, default_value_t = 0)]
    hold_ms: u64,

    /// Frame file format.
    #[arg(long, value_enum, default_value_t = FrameFormat::Svg)]
    format: FrameFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FrameFormat {
    Svg,
    Png,
    Json,
}

impl FrameFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Json => "json",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    match cli.cmd {
        Command::Rank(args) => cmd_rank(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn cmd_rank(args: RankArgs) -> anyhow::Result<()> {
    let text = match &args.in_path {
        Some(p) => read_text(p)?,
        None => std::io::read_to_string(std::io::stdin()).context("read stdin")?,
    };
    let ranker = load_ranker(args.stopwords.as_deref())?;

    let json = if args.all {
        serde_json::to_string_pretty(&ranker.word_counts(&text))?
    } else {
        serde_json::to_string_pretty(&ranker.rank(&text))?
    };
    println!("{json}");
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be > 0");

    let config = match &args.config {
        Some(p) => VizConfig::from_path(p)?,
        None => VizConfig::default(),
    };
    let ranker = load_ranker(args.stopwords.as_deref())?;
    let mut viz = Visualization::with_ranker(config, ranker)?;
    let style = SvgStyle::default();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut frame_idx = 0u64;
    for in_path in &args.in_paths {
        let text = read_text(in_path)?;
        let now = Millis::from_frame(frame_idx, args.fps);
        let list = viz.submit_text(&text, now);
        eprintln!(
            "{}: {}",
            in_path.display(),
            serde_json::to_string(&list).context("serialize ranked list")?
        );

        let until = viz.settles_at().saturating_add(Millis(args.hold_ms));
        loop {
            let now = Millis::from_frame(frame_idx, args.fps);
            let frame = viz.frame(now);
            let out = args
                .out_dir
                .join(format!("frame_{frame_idx:05}.{}", args.format.extension()));
            write_frame(&frame, &style, args.format, &out)?;
            frame_idx += 1;
            if now >= until {
                break;
            }
        }
    }

    eprintln!("wrote {frame_idx} frames to {}", args.out_dir.display());
    Ok(())
}

fn write_frame(
    frame: &wordrank::SceneFrame,
    style: &SvgStyle,
    format: FrameFormat,
    out: &Path,
) -> anyhow::Result<()> {
    match format {
        FrameFormat::Json => {
            let json = serde_json::to_vec_pretty(frame).context("serialize frame")?;
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
        }
        FrameFormat::Svg => {
            let svg = wordrank::frame_to_svg(frame, style);
            std::fs::write(out, svg).with_context(|| format!("write '{}'", out.display()))?;
        }
        FrameFormat::Png => {
            let svg = wordrank::frame_to_svg(frame, style);
            let px = wordrank::rasterize_svg(&svg)?;
            image::save_buffer_with_format(
                out,
                &px.to_straight_rgba8(),
                px.width,
                px.height,
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write png '{}'", out.display()))?;
        }
    }
    Ok(())
}

fn load_ranker(stopwords: Option<&Path>) -> anyhow::Result<FrequencyRanker> {
    let Some(path) = stopwords else {
        return Ok(FrequencyRanker::default());
    };
    let raw = read_text(path)?;
    Ok(FrequencyRanker::new(Stopwords::from_words(raw.lines())))
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))
}
