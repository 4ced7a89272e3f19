//! pdf-features CLI - style inference for pdftohtml token streams

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use pdf_features::{
    render, DocumentState, HyperlinkType, JsonFormat, ParseOptions, PdfFeatures, PdfLabels,
    PdfToken, ScriptType, TokenType,
};

#[derive(Parser)]
#[command(name = "pdf-features")]
#[command(version)]
#[command(
    about = "Infer headings, scripts, lists and links from PDF layout",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write Markdown, HTML and JSON into a directory
    Convert {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Render as Markdown
    #[command(alias = "md")]
    Markdown {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render as HTML
    Html {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Dump tokens, styles and baselines as JSON
    Json {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document baselines and style statistics
    Info {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Render a document from a labeled-data tree
    Labeled {
        /// Root of the labeled-data tree
        #[arg(value_name = "ROOT")]
        root: PathBuf,

        /// Dataset name
        #[arg(value_name = "DATASET")]
        dataset: String,

        /// PDF directory name under ROOT/pdfs
        #[arg(value_name = "PDF")]
        pdf: String,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Process pages sequentially
        #[arg(long)]
        sequential: bool,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct InputArgs {
    /// Input PDF, or pdftohtml XML when the extension is .xml
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Ground-truth labels (labels.json) to type tokens with
    #[arg(long, value_name = "FILE")]
    labels: Option<PathBuf>,

    /// Dataset name recorded on the document
    #[arg(long)]
    dataset: Option<String>,

    /// Skip the style pass
    #[arg(long)]
    no_styles: bool,

    /// Process pages sequentially
    #[arg(long)]
    sequential: bool,

    /// pdftohtml executable
    #[arg(long, env = "PDFTOHTML", default_value = "pdftohtml")]
    pdftohtml: PathBuf,

    /// Keep the pdftohtml XML at this path
    #[arg(long, value_name = "FILE")]
    keep_xml: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Html,
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert { input, output } => cmd_convert(&input, output.as_deref()),
        Commands::Markdown { input, output } => {
            cmd_render(&input, output.as_deref(), OutputFormat::Markdown, false)
        }
        Commands::Html { input, output } => {
            cmd_render(&input, output.as_deref(), OutputFormat::Html, false)
        }
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_render(&input, output.as_deref(), OutputFormat::Json, compact),
        Commands::Info { input } => cmd_info(&input),
        Commands::Labeled {
            root,
            dataset,
            pdf,
            format,
            sequential,
        } => cmd_labeled(&root, &dataset, &pdf, format, sequential),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn load(args: &InputArgs) -> CliResult<PdfFeatures> {
    let mut options = ParseOptions::new()
        .with_parallel(!args.sequential)
        .with_pdftohtml(&args.pdftohtml);
    if let Some(dataset) = &args.dataset {
        options = options.with_dataset(dataset.as_str());
    }
    if let Some(path) = &args.keep_xml {
        options = options.with_xml_path(path);
    }

    let is_xml = args
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
    let mut doc = if is_xml {
        PdfFeatures::from_poppler_xml_file(&args.input, options)?
    } else {
        PdfFeatures::from_pdf_path(&args.input, options)?
    };

    log::debug!(
        "Loaded {} tokens from {}",
        doc.token_count(),
        args.input.display()
    );
    if doc.is_empty() {
        eprintln!(
            "{} no text found in {}",
            "Warning:".yellow().bold(),
            args.input.display()
        );
    }

    if let Some(path) = &args.labels {
        let labels = PdfLabels::load(path)?;
        doc.set_token_types(&labels);
    }
    if !args.no_styles {
        doc.set_token_styles();
    }

    Ok(doc)
}

fn render_as(doc: &PdfFeatures, format: OutputFormat, compact: bool) -> CliResult<String> {
    let text = match format {
        OutputFormat::Markdown => render::to_markdown(doc)?,
        OutputFormat::Html => render::to_html(doc)?,
        OutputFormat::Json => {
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            render::to_json(doc, json_format)?
        }
    };
    Ok(text)
}

fn write_output(text: &str, output: Option<&Path>) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn cmd_convert(input: &InputArgs, output: Option<&Path>) -> CliResult<()> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_features", stem))
    });
    fs::create_dir_all(&output_dir)?;

    let doc = load(input)?;

    fs::write(output_dir.join("extract.md"), render::to_markdown(&doc)?)?;
    fs::write(output_dir.join("extract.html"), render::to_html(&doc)?)?;
    fs::write(
        output_dir.join("features.json"),
        render::to_json(&doc, JsonFormat::Pretty)?,
    )?;

    println!("\n{}", "Output files:".green().bold());
    println!("  {} extract.md", "├─".dimmed());
    println!("  {} extract.html", "├─".dimmed());
    println!("  {} features.json", "└─".dimmed());

    Ok(())
}

fn cmd_render(
    input: &InputArgs,
    output: Option<&Path>,
    format: OutputFormat,
    compact: bool,
) -> CliResult<()> {
    let doc = load(input)?;
    let text = render_as(&doc, format, compact)?;
    write_output(&text, output)
}

fn cmd_labeled(
    root: &Path,
    dataset: &str,
    pdf: &str,
    format: OutputFormat,
    sequential: bool,
) -> CliResult<()> {
    let options = ParseOptions::new().with_parallel(!sequential);
    let mut doc = PdfFeatures::from_labeled_data(root, dataset, pdf, options)?;
    if doc.state != DocumentState::Typed {
        eprintln!("{} no labels applied to {}", "Warning:".yellow().bold(), pdf);
    }
    doc.set_token_styles();

    let text = render_as(&doc, format, false)?;
    write_output(&text, None)
}

fn cmd_info(input: &InputArgs) -> CliResult<()> {
    let doc = load(input)?;
    let modes = &doc.pdf_modes;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.input.display());
    println!("{}: {}", "Dataset".bold(), doc.file_type);
    println!("{}: {}", "Pages".bold(), doc.pages.len());
    println!("{}: {}", "Fonts".bold(), doc.fonts.len());
    println!("{}: {}", "Tokens".bold(), doc.token_count());
    println!("{}: {:?}", "State".bold(), doc.state);

    println!();
    println!("{}", "Baselines".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Line spacing".bold(), modes.lines_space_mode);
    println!("{}: {}", "Right margin".bold(), modes.right_space_mode);
    match modes.font_size_mode {
        Some(size) => println!("{}: {}", "Font size".bold(), size),
        None => println!("{}: -", "Font size".bold()),
    }
    println!("{}: {}", "Text height".bold(), modes.common_text_height);

    println!();
    println!("{}", "Styles".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let tokens: Vec<_> = doc.loop_tokens().map(|(_, token)| token).collect();
    let count = |f: &dyn Fn(&PdfToken) -> bool| tokens.iter().filter(|t| f(t)).count();

    println!(
        "{}: {}",
        "Headings".bold(),
        count(&|t| t.token_style.title_type.level().is_some())
    );
    println!(
        "{}: {}",
        "Scripts".bold(),
        count(&|t| t.token_style.script_type != ScriptType::Regular)
    );
    println!(
        "{}: {}",
        "List items".bold(),
        count(&|t| t.token_style.list_level.depth().is_some())
    );
    println!(
        "{}: {}",
        "Links".bold(),
        count(&|t| t.token_style.hyperlink_style.link_type != HyperlinkType::NoLink)
    );

    if input.labels.is_some() {
        println!();
        println!("{}", "Token Types".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for token_type in TokenType::ALL {
            let n = count(&|t| t.token_type == token_type);
            if n > 0 {
                println!("{}: {}", format!("{:?}", token_type).bold(), n);
            }
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdf-features".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Style inference for pdftohtml token streams");
    println!();
    println!("License: MIT");
}
