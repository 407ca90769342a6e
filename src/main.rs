// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use page_scan::utils::logging::{format_heading, format_info, format_success, format_warning};
use page_scan::{
    CaseSensitivity, Config, ExtractedPages, JsonExporter, PageKeywordScanner, PageRange,
    PageSource, PdfDocument, Query, ScanReport, Validator, load_page_texts, load_text_pages,
    slice_chars,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "page_scan")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Find keyword sections in PDF page text", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an excerpt from the first page containing every keyword
    Find {
        /// PDF to scan (defaults to document.path from config)
        pdf: Option<PathBuf>,

        /// Scan pre-extracted text instead of a PDF, pages split by form feeds ("-" for stdin)
        #[arg(long, value_name = "FILE", conflicts_with = "pdf")]
        text: Option<PathBuf>,

        /// Required keyword, repeatable; the first one anchors the excerpt
        #[arg(short, long = "keyword", value_name = "TEXT")]
        keywords: Vec<String>,

        /// Look up keywords for a classification section number
        #[arg(long, value_name = "NUM", conflicts_with = "keywords")]
        section: Option<u32>,

        /// First zero-based page index to scan
        #[arg(long)]
        start: Option<usize>,

        /// Zero-based page index to stop before
        #[arg(long)]
        end: Option<usize>,

        #[arg(short = 'n', long, value_name = "CHARS")]
        max_chars: Option<usize>,

        #[arg(short = 'i', long)]
        ignore_case: bool,

        #[arg(long)]
        json: bool,

        #[arg(short, long)]
        pretty: bool,

        #[arg(long, conflicts_with = "pretty")]
        compact: bool,

        /// Write the JSON report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print a character slice of one page
    Slice {
        pdf: Option<PathBuf>,

        /// One-based page number
        #[arg(long)]
        page: usize,

        #[arg(long, default_value_t = 0)]
        from: usize,

        #[arg(long)]
        to: Option<usize>,
    },

    /// Show page count and fingerprint of a PDF
    Info { pdf: Option<PathBuf> },

    /// Print the classification section table
    Sections {
        #[arg(long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    page_scan::utils::logging::init_logger(cli.color, cli.verbose);
    page_scan::utils::logging::configure_color(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Find {
            pdf,
            text,
            keywords,
            section,
            start,
            end,
            max_chars,
            ignore_case,
            json,
            pretty,
            compact,
            output,
        } => {
            let request = FindRequest {
                pdf,
                text,
                keywords,
                section,
                start,
                end,
                max_chars,
                ignore_case,
                json: json || config.output.json,
                pretty: config.output.resolve_pretty(pretty, compact),
                output,
            };
            cmd_find(&config, request)?;
        }
        Commands::Slice {
            pdf,
            page,
            from,
            to,
        } => {
            cmd_slice(&config, pdf, page, from, to)?;
        }
        Commands::Info { pdf } => {
            cmd_info(&config, pdf)?;
        }
        Commands::Sections { category } => {
            cmd_sections(&config, category.as_deref())?;
        }
    }

    Ok(())
}

struct FindRequest {
    pdf: Option<PathBuf>,
    text: Option<PathBuf>,
    keywords: Vec<String>,
    section: Option<u32>,
    start: Option<usize>,
    end: Option<usize>,
    max_chars: Option<usize>,
    ignore_case: bool,
    json: bool,
    pretty: bool,
    output: Option<PathBuf>,
}

fn resolve_pdf(config: &Config, pdf: Option<PathBuf>) -> Result<PathBuf> {
    let path = match pdf.or_else(|| config.document.path.clone()) {
        Some(path) => path,
        None => bail!("No PDF given and document.path is not configured"),
    };

    Validator::validate_file_path(&path)?;
    if let Err(e) = Validator::validate_pdf_extension(&path) {
        warn!("{}", e);
    }

    Ok(path)
}

fn build_query(config: &Config, request: &FindRequest) -> Result<Query> {
    let mut query_config = config.query.clone();
    if let Some(max_chars) = request.max_chars {
        query_config.excerpt_length = max_chars;
    }
    if request.ignore_case {
        query_config.case_sensitivity = CaseSensitivity::Insensitive;
    }

    let query = if let Some(number) = request.section {
        config
            .classification
            .table()?
            .query_for(number, query_config.excerpt_length)?
            .with_case_sensitivity(query_config.case_sensitivity)
    } else {
        if !request.keywords.is_empty() {
            query_config.keywords = request.keywords.clone();
        }
        query_config.to_query()?
    };

    Ok(query)
}

fn load_pages(config: &Config, request: &FindRequest) -> Result<ExtractedPages> {
    let options = config.document.extract_options();

    if let Some(text) = &request.text {
        let content = if text.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        } else {
            std::fs::read_to_string(text)
                .with_context(|| format!("Failed to read {}", text.display()))?
        };
        return Ok(load_text_pages(text, &content, &options)?);
    }

    let path = resolve_pdf(config, request.pdf.clone())?;
    load_page_texts(&path, &options)
        .with_context(|| format!("Failed to extract text from {}", path.display()))
}

fn cmd_find(config: &Config, request: FindRequest) -> Result<()> {
    let start_time = Instant::now();
    let query = build_query(config, &request).context("Invalid query")?;
    let scanner = PageKeywordScanner::new(&query)?;

    let extracted = load_pages(config, &request)?;
    info!(
        "Searching {} for {:?} ({:?})",
        extracted.source.display(),
        query.keywords(),
        query.case_sensitivity()
    );

    let (result, range) = match (request.start, request.end) {
        (None, None) => (scanner.find_first_match(&extracted.pages), None),
        (start, end) => {
            let start = start.unwrap_or(0);
            let end = end.unwrap_or(extracted.page_count());
            let result = scanner
                .scan_range(&extracted.pages, start, end)
                .context("Invalid page range")?;
            (result, Some(PageRange { start, end }))
        }
    };

    info!(
        "Scan finished in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    if request.json || request.output.is_some() {
        let report = ScanReport::new(
            &extracted.source,
            &extracted.fingerprint,
            extracted.page_count(),
            range,
            query,
            result,
        );
        let exporter = JsonExporter::new(request.pretty);

        if report.found() {
            info!("Match recorded in report");
        } else {
            warn!("No page contains all of {:?}", report.query.keywords());
        }

        match &request.output {
            Some(output) => exporter.write(&report, output)?,
            None => println!("{}", exporter.render(&report)?),
        }
        return Ok(());
    }

    match result {
        Some(found) => {
            info!(
                "Excerpt of {} chars at byte offset {}",
                found.excerpt_chars(),
                found.offset
            );
            println!(
                "{}\n",
                format_success(&format!("FOUND ON PAGE {}", found.page_number()))
            );
            println!("{}", found.excerpt);
        }
        None => {
            println!(
                "{}",
                format_warning(&format!("No page contains all of {:?}", query.keywords()))
            );
        }
    }

    Ok(())
}

fn cmd_slice(
    config: &Config,
    pdf: Option<PathBuf>,
    page: usize,
    from: usize,
    to: Option<usize>,
) -> Result<()> {
    let path = resolve_pdf(config, pdf)?;
    let text = read_single_page(&path, page, config.document.normalize_whitespace)?;

    let end = to.map(|t| t.to_string()).unwrap_or_default();
    println!("{}\n", format_heading(&format!("### PAGE {} [{}:{}] ###", page, from, end)));
    println!("{}", slice_chars(&text, from, to));

    Ok(())
}

fn read_single_page(path: &Path, page: usize, normalize: bool) -> Result<String> {
    let document = PdfDocument::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    Validator::validate_page_number(page, document.page_count())?;

    let text = document.page_text(page - 1)?;
    if normalize {
        Ok(page_scan::TextNormalizer::new().normalize(&text))
    } else {
        Ok(text)
    }
}

fn cmd_info(config: &Config, pdf: Option<PathBuf>) -> Result<()> {
    let path = resolve_pdf(config, pdf)?;
    let document = PdfDocument::open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    println!("{}", format_info(&format!("Document: {}", document.path().display())));
    println!("{}", format_info(&format!("Pages: {}", document.page_count())));
    println!("{}", format_info(&format!("SHA-256: {}", document.fingerprint())));

    Ok(())
}

fn cmd_sections(config: &Config, category: Option<&str>) -> Result<()> {
    let table = config.classification.table()?;

    let categories: Vec<&str> = match category {
        Some(name) => {
            if table.in_category(name).is_empty() {
                bail!("Unknown category: {}", name);
            }
            vec![name]
        }
        None => table.categories(),
    };

    for name in categories {
        println!("\n{}", format_heading(&format!("{}:", name.to_uppercase())));
        for entry in table.in_category(name) {
            println!("- Section {}: {}", entry.number, entry.label);
        }
    }

    Ok(())
}
