// ============================================================================
// DollarShop CLI: headless editing via command-line arguments
// ============================================================================
//
// Usage examples:
//   dollarshop -i photo.png --op grayscale -o gray.png
//   dollarshop -i photo.jpg --op colormap=viridis --op shrink -o out.jpg --quality 85
//   dollarshop -i "shots/*.jpg" --op sepia --output-dir processed/ --format tiff
//   dollarshop --search "mountain lake" --op width=800 -o lake.png
//   dollarshop -i a.png --brush-color red --brush-width 12 --op stroke=0,0,200,120
//
// Operations run in the order given, through the same session object a
// front end would drive.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use crate::io::{OPEN_EXTENSIONS, SaveFormat, SaveOptions, TiffCompression};
use crate::ops::EditOp;
use crate::ops::brush;
use crate::remote::PhotoSearchClient;
use crate::session::Session;
use crate::settings::AppSettings;

// ============================================================================
// CLI argument definition (clap Derive)
// ============================================================================

/// DollarShop headless image editor.
#[derive(Parser, Debug)]
#[command(
    name = "dollarshop",
    version,
    about = "DollarShop headless image editor",
    long_about = "Apply filters, resizes and brush strokes to image files, or to a\n\
                  random photo fetched by keyword, without a GUI. Loads anything the\n\
                  image crate decodes; saves PNG, JPEG, BMP and TIFF.\n\n\
                  Operations (--op, repeatable, applied in order):\n  \
                  grayscale | sepia | invert | colormap[=<name>]\n  \
                  resize=<W>x<H> | width=<W> | height=<H> | shrink | enlarge\n  \
                  stroke=<x0>,<y0>,<x1>,<y1> | clear-paint | revert"
)]
pub struct CliArgs {
    /// Input file(s). Glob patterns accepted (e.g. "*.png", "shots/*.jpg").
    #[arg(short, long, num_args = 1.., required_unless_present = "search", conflicts_with = "search")]
    pub input: Vec<String>,

    /// Fetch a random photo matching these keywords instead of reading a file.
    #[arg(short = 'S', long, value_name = "KEYWORDS")]
    pub search: Option<String>,

    /// Edit operation; repeat to chain several.
    #[arg(long = "op", value_name = "OP")]
    pub ops: Vec<EditOp>,

    /// Brush color for stroke operations: a palette name or "r,g,b".
    #[arg(long, value_name = "COLOR")]
    pub brush_color: Option<String>,

    /// Brush width in pixels.
    #[arg(long, value_name = "PX")]
    pub brush_width: Option<u32>,

    /// Output file path. Only valid for single-file input.
    /// For batch input use --output-dir instead.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing.
    /// Files are written here with the original stem and the target format's extension.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format: png, jpeg, bmp, tiff.
    /// Takes precedence over --output's extension, which is replaced when it names
    /// another format. When omitted, the format is inferred from --output's
    /// extension, defaulting to png.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// JPEG quality (1–100). Defaults to the saved setting.
    #[arg(short, long, value_name = "1-100")]
    pub quality: Option<u8>,

    /// TIFF compression mode: none, lzw, deflate. Defaults to the saved setting.
    #[arg(long, value_name = "MODE")]
    pub tiff_compression: Option<String>,

    /// Print per-file timing information and log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything a single job needs besides its input.
struct JobConfig<'a> {
    settings: &'a AppSettings,
    ops: &'a [EditOp],
    format: Option<SaveFormat>,
    options: SaveOptions,
}

// ============================================================================
// Public entry point
// ============================================================================

/// Run all CLI processing and return an OS exit code.
/// `0` = every job succeeded, `1` = one or more failed.
pub fn run(args: CliArgs, settings: AppSettings) -> ExitCode {
    let mut settings = settings;
    if let Some(c) = &args.brush_color {
        match brush::parse_color(c) {
            Some(color) => settings.brush_color = color,
            None => {
                eprintln!("error: invalid brush color '{}' (use a palette name or r,g,b).", c);
                return ExitCode::FAILURE;
            }
        }
    }
    if let Some(w) = args.brush_width {
        settings.brush_width = w.max(1);
    }

    let format = match parse_format(args.format.as_deref()) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut options = settings.save_options();
    if let Some(q) = args.quality {
        options.quality = q.clamp(1, 100);
    }
    if let Some(mode) = &args.tiff_compression {
        match TiffCompression::from_name(mode) {
            Some(c) => options.tiff_compression = c,
            None => {
                eprintln!("error: unknown TIFF compression '{}' (none, lzw, deflate).", mode);
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(dir) = &args.output_dir
        && let Err(e) = std::fs::create_dir_all(dir)
    {
        eprintln!("error: could not create output directory '{}': {}", dir.display(), e);
        return ExitCode::FAILURE;
    }

    let job = JobConfig {
        settings: &settings,
        ops: &args.ops,
        format,
        options,
    };

    if let Some(query) = &args.search {
        let output = search_output_path(query, args.output.as_deref(), args.output_dir.as_deref(), format);
        return match run_search(query, &output, &job) {
            Ok(written) => {
                println!("{}", written.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    // Resolve glob patterns / literal paths → concrete PathBufs
    let inputs = resolve_inputs(&args.input);
    if inputs.is_empty() {
        eprintln!("error: no input files matched the given pattern(s).");
        return ExitCode::FAILURE;
    }

    // Multiple inputs require --output-dir, not --output
    if inputs.len() > 1 && args.output.is_some() && args.output_dir.is_none() {
        eprintln!(
            "error: {} input files given but --output only accepts a single file path.\n\
             Use --output-dir to specify a destination directory for batch processing.",
            inputs.len()
        );
        return ExitCode::FAILURE;
    }

    let total = inputs.len();
    let multi = total > 1;
    let mut any_failure = false;

    for (idx, input_path) in inputs.iter().enumerate() {
        if multi || args.verbose {
            println!("[{}/{}] {}", idx + 1, total, input_path.display());
        }

        let file_start = Instant::now();

        let Some(output_path) = build_output_path(
            input_path,
            args.output.as_deref(),
            args.output_dir.as_deref(),
            format.unwrap_or_default(),
        ) else {
            eprintln!("  error: cannot determine output path for '{}'.", input_path.display());
            any_failure = true;
            continue;
        };

        match run_one(input_path, &output_path, &job) {
            Ok(written) => {
                if args.verbose || multi {
                    println!(
                        "  → {} ({:.0}ms)",
                        written.display(),
                        file_start.elapsed().as_secs_f64() * 1000.0
                    );
                }
            }
            Err(e) => {
                eprintln!("  error: {}", e);
                any_failure = true;
            }
        }
    }

    if any_failure { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

// ============================================================================
// Per-job processing pipeline
// ============================================================================

fn run_one(input: &Path, output: &Path, job: &JobConfig) -> Result<PathBuf, String> {
    let mut session = Session::new(job.settings);
    session
        .open_file(input)
        .map_err(|e| format!("load failed: {}", e))?;
    edit_and_save(&mut session, output, job)
}

fn run_search(query: &str, output: &Path, job: &JobConfig) -> Result<PathBuf, String> {
    let mut session = Session::new(job.settings);
    let client = PhotoSearchClient::from_settings(job.settings).map_err(|e| e.to_string())?;
    let worker = session.begin_fetch(client, query).map_err(|e| e.to_string())?;
    session
        .accept_fetch(worker.wait())
        .map_err(|e| format!("fetch failed: {}", e))?;
    println!("{}", session.status());
    edit_and_save(&mut session, output, job)
}

fn edit_and_save(session: &mut Session, output: &Path, job: &JobConfig) -> Result<PathBuf, String> {
    for op in job.ops {
        session
            .apply_op(op)
            .map_err(|e| format!("{} failed: {}", op, e))?;
    }
    session
        .save(output, job.format, job.options)
        .map_err(|e| format!("save failed: {}", e))
}

// ============================================================================
// Helpers
// ============================================================================

/// Expand inputs into a deduplicated, ordered list of files. A literal
/// file is taken as is, a directory contributes the images directly inside
/// it (sorted), anything else is treated as a glob pattern.
fn resolve_inputs(patterns: &[String]) -> Vec<PathBuf> {
    let mut result: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let as_path = Path::new(pattern);
        let matched: Vec<PathBuf> = if as_path.is_dir() {
            images_in(as_path)
        } else if as_path.exists() {
            vec![as_path.to_path_buf()]
        } else {
            match glob::glob(pattern) {
                Ok(entries) => entries.flatten().filter(|p| p.is_file()).collect(),
                Err(e) => {
                    eprintln!("warning: invalid glob '{}': {}", pattern, e);
                    continue;
                }
            }
        };

        if matched.is_empty() {
            eprintln!("warning: '{}' matched no image files.", pattern);
        }
        for path in matched {
            if !result.contains(&path) {
                result.push(path);
            }
        }
    }

    result
}

/// Files directly inside `dir` with an extension from [`OPEN_EXTENSIONS`].
fn images_in(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_open_extension(p))
        .collect();
    files.sort();
    files
}

fn has_open_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| OPEN_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

/// The `--format` value, if one was given.
fn parse_format(format_arg: Option<&str>) -> Result<Option<SaveFormat>, String> {
    let Some(f) = format_arg else {
        return Ok(None);
    };
    SaveFormat::from_extension(f).map(Some).ok_or_else(|| {
        let known: Vec<&str> = SaveFormat::all().iter().map(|f| f.extension()).collect();
        format!("unknown output format '{}' ({}).", f, known.join(", "))
    })
}

/// `--output` verbatim, else `<stem>.<ext>` in `--output-dir`, else in `beside`.
fn output_path_for(
    stem: &str,
    output: Option<&Path>,
    output_dir: Option<&Path>,
    beside: &Path,
    format: SaveFormat,
) -> PathBuf {
    if let Some(out) = output {
        return out.to_path_buf();
    }
    output_dir
        .unwrap_or(beside)
        .join(format!("{}.{}", stem, format.extension()))
}

/// Output path for one input file, next to the input unless told otherwise.
/// A derived path that would land on the input gets `_out` appended to the
/// stem; an explicit `--output` is trusted as given.
fn build_output_path(
    input: &Path,
    output: Option<&Path>,
    output_dir: Option<&Path>,
    format: SaveFormat,
) -> Option<PathBuf> {
    let stem = input.file_stem()?.to_string_lossy().into_owned();
    let beside = input.parent().unwrap_or(Path::new("."));
    let target = output_path_for(&stem, output, output_dir, beside, format);
    if output.is_none() && target == input {
        return Some(output_path_for(&format!("{}_out", stem), None, output_dir, beside, format));
    }
    Some(target)
}

/// Output path for a fetched photo, named after the search keywords.
fn search_output_path(
    query: &str,
    output: Option<&Path>,
    output_dir: Option<&Path>,
    format: Option<SaveFormat>,
) -> PathBuf {
    let stem: String = query
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let stem = if stem.is_empty() { "photo".to_string() } else { stem };
    output_path_for(&stem, output, output_dir, Path::new(""), format.unwrap_or_default())
}
