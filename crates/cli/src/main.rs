//! CLI tool for building lecture decks from scraped articles.

mod config;
mod guard;
mod input;
mod remote;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::BuildArgs;
use deck_core::{
    compose_deck, extract_slides_from_article, LogicalSlide, OfflineQrRenderer,
    PresentationRequest, QrRenderer, SlideGenerator, Template, TextGenerator,
};
use deck_pptx::{DeckReader, DeckSummary, PresentationAssembler};
use guard::CircuitBreaker;
use input::{load_input, DeckInput};
use remote::{GeminiClient, HttpQrRenderer};
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Build PowerPoint lecture decks from article JSON.
#[derive(Parser, Debug)]
#[command(name = "deck-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a .pptx deck from one or more input files
    Build(BuildArgs),

    /// Print the slides of an existing .pptx file
    Inspect {
        /// PowerPoint file to inspect
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available templates
    Templates,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match &cli.command {
        Command::Build(args) => build(args, cli.verbose),
        Command::Inspect { file, json } => inspect(file, *json),
        Command::Templates => {
            for template in Template::ALL {
                println!("{:<10} {:<10} {}", template.id(), template.name(), template.description());
            }
            Ok(())
        }
    }
}

/// Build a deck from every input file and write it to disk.
fn build(args: &BuildArgs, verbose: bool) -> Result<()> {
    let generator = if args.ai {
        let client = GeminiClient::new(&args.remote).context("--ai needs a Gemini API key")?;
        Some(SlideGenerator::new(CircuitBreaker::new(
            client,
            args.remote.breaker_threshold,
            args.remote.breaker_cooldown(),
        )))
    } else {
        None
    };

    let mut groups = Vec::with_capacity(args.inputs.len());
    for input_path in &args.inputs {
        if verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        let slides = slides_for_input(input_path, generator.as_ref())?;
        if verbose {
            eprintln!("  Found {} logical slides", slides.len());
        }
        groups.push(slides);
    }

    let slides = compose_deck(&groups, args.quiz_link.as_deref());
    let mut request = PresentationRequest::new(&args.title, args.template, slides);
    if let Some(subtitle) = &args.subtitle {
        request = request.with_subtitle(subtitle);
    }

    let qr: Box<dyn QrRenderer> = if args.remote.offline {
        Box::new(OfflineQrRenderer)
    } else {
        Box::new(HttpQrRenderer::new(&args.remote)?)
    };

    let bytes = PresentationAssembler::new()
        .assemble(&request, qr.as_ref())
        .context("Failed to assemble presentation")?;

    let output_path = get_output_path(args.output.as_deref(), &request.suggested_filename())?;
    write_output(&output_path, &bytes)?;
    if verbose {
        eprintln!("Written to: {}", output_path.display());
    }

    Ok(())
}

fn slides_for_input<G: TextGenerator>(
    path: &Path,
    generator: Option<&SlideGenerator<G>>,
) -> Result<Vec<LogicalSlide>> {
    let slides = match load_input(path)? {
        DeckInput::Slides(slides) => slides,
        DeckInput::Article(article) => match generator {
            Some(generator) => {
                log::debug!("Generating slides for {} with AI", path.display());
                generator.generate_slides(&article.to_prompt_text(), article.title.as_deref())
            }
            None => extract_slides_from_article(&article),
        },
    };
    Ok(slides)
}

/// Print a slide-by-slide summary of a .pptx file.
fn inspect(path: &Path, json: bool) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let summary = DeckReader::new()
        .read(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_summary(&summary));
    }
    Ok(())
}

fn format_summary(summary: &DeckSummary) -> String {
    let mut out = format!(
        "{} slides, {:.3} x {:.3} in, {} images\n",
        summary.slide_count(),
        summary.width,
        summary.height,
        summary.media
    );
    for slide in &summary.slides {
        out.push_str(&format!("\nSlide {}", slide.number));
        if slide.pictures > 0 {
            out.push_str(&format!(" [{} picture(s)]", slide.pictures));
        }
        out.push('\n');
        for text in &slide.texts {
            out.push_str(&format!("  {}\n", text));
        }
    }
    out
}

/// Determine where the deck is written.
fn get_output_path(output: Option<&Path>, filename: &str) -> Result<PathBuf> {
    let output_path = match output {
        Some(dir) if dir.is_dir() => dir.join(filename),
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            path.to_path_buf()
        }
        None => PathBuf::from(filename),
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content)
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{ContentBlock, Error};

    struct Canned(&'static str);

    impl TextGenerator for Canned {
        fn complete(&self, _prompt: &str) -> deck_core::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Down;

    impl TextGenerator for Down {
        fn complete(&self, _prompt: &str) -> deck_core::Result<String> {
            Err(Error::GenerationError("offline".to_string()))
        }
    }

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("deck-gen-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_output_path_defaults_to_suggested_name() {
        let path = get_output_path(None, "weekly.pptx").unwrap();
        assert_eq!(path, PathBuf::from("weekly.pptx"));
    }

    #[test]
    fn test_output_path_inside_directory() {
        let dir = std::env::temp_dir();
        let path = get_output_path(Some(dir.as_path()), "weekly.pptx").unwrap();
        assert_eq!(path, dir.join("weekly.pptx"));
    }

    #[test]
    fn test_output_path_explicit_file() {
        let path = get_output_path(Some(Path::new("deck.pptx")), "weekly.pptx").unwrap();
        assert_eq!(path, PathBuf::from("deck.pptx"));
    }

    #[test]
    fn test_article_uses_extractor_without_ai() {
        let path = write_temp(
            "article.json",
            r#"{"title": "Cells", "sections": [{"heading": "Overview", "content": "Cells are the basic unit of life. They divide to grow."}]}"#,
        );
        let slides = slides_for_input::<Canned>(&path, None).unwrap();
        fs::remove_file(&path).ok();

        assert!(!slides.is_empty());
    }

    #[test]
    fn test_article_uses_generator_with_ai() {
        let path = write_temp("ai-article.json", r#"{"title": "Cells"}"#);
        let generator = SlideGenerator::new(Canned(
            r#"[{"title": "Generated", "blocks": [{"type": "bullet", "text": "Point"}], "keywords": []}]"#,
        ));
        let slides = slides_for_input(&path, Some(&generator)).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title, "Generated");
    }

    #[test]
    fn test_generator_failure_falls_back() {
        let path = write_temp("down-article.json", r#"{"title": "Cells"}"#);
        let generator = SlideGenerator::new(CircuitBreaker::new(
            Down,
            1,
            std::time::Duration::from_secs(60),
        ));
        let slides = slides_for_input(&path, Some(&generator)).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title, "Cells");
    }

    #[test]
    fn test_summary_lists_slides() {
        let request = PresentationRequest::new(
            "Weekly",
            Template::Minimal,
            vec![LogicalSlide::new("Topic").with_block(ContentBlock::bullet("Point"))],
        );
        let bytes = PresentationAssembler::new()
            .assemble(&request, &OfflineQrRenderer)
            .unwrap();
        let summary = DeckReader::new().read_bytes(&bytes).unwrap();
        let text = format_summary(&summary);

        assert!(text.starts_with("2 slides, 10.000 x 5.625 in, 0 images"));
        assert!(text.contains("Slide 2\n  Topic\n"));
        assert!(text.contains("  Point\n"));
    }
}
