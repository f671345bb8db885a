use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use dotenvy::dotenv;
use log::{error, warn};

use cards::{parse_flashcards, pdf, table};
use llm::{Generator, LlmConfig, OllamaClient};

/// Turn course material into a summary and Q/A flashcards.
#[derive(Parser)]
#[command(name = "flashgen", version)]
struct Args {
    /// Course material as a UTF-8 text file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// How many flashcards to ask for.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(3..=10))]
    count: u8,

    /// Write the raw flashcard text here, byte-for-byte.
    #[arg(long)]
    txt: Option<PathBuf>,

    /// Write the flashcards as CSV here.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the flashcards as a PDF here.
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Unicode-capable TTF font used for the PDF export.
    #[arg(long, default_value = "fonts/DejaVuSans.ttf")]
    font: PathBuf,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    let bytes = match path {
        Some(p) => {
            std::fs::read(p).with_context(|| format!("failed to read {}", p.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    String::from_utf8(bytes)
        .map_err(|_| anyhow::anyhow!("input is not valid UTF-8; provide a UTF-8 encoded text file"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let text = read_input(args.input.as_ref())?;
    if text.trim().is_empty() {
        bail!("no course material provided");
    }

    let client = OllamaClient::new(&LlmConfig::from_env())?;
    let generator = Generator::new(client);
    let set = generator
        .run(&text, args.count as usize)
        .await
        .context("summarization failed; no flashcards were generated")?;

    println!("Summary");
    println!("-------");
    println!("{}\n", set.summary);

    // The summary above stays valid output even when this stage failed.
    let blob = match set.flashcards {
        Ok(blob) => blob,
        Err(e) => bail!("flashcard generation failed: {e}"),
    };

    let records = parse_flashcards(&blob);
    if records.len() != args.count as usize {
        warn!(
            "the model produced {} flashcards instead of the requested {}",
            records.len(),
            args.count
        );
    }

    println!("Flashcards");
    println!("----------");
    for (idx, card) in records.iter().enumerate() {
        println!("Flashcard {}:", idx + 1);
        println!("Q: {}", card.question);
        println!("A: {}\n", card.answer);
    }

    // Each export stands alone; a failed one must not stop the rest.
    let mut failed = false;

    if let Some(path) = &args.txt {
        if let Err(e) = std::fs::write(path, &blob) {
            error!("txt export to {} failed: {e}", path.display());
            failed = true;
        }
    }

    if let Some(path) = &args.csv {
        match table::to_csv(&records) {
            Ok(csv) => {
                if let Err(e) = std::fs::write(path, csv) {
                    error!("csv export to {} failed: {e}", path.display());
                    failed = true;
                }
            }
            Err(e) => {
                error!("csv export failed: {e}");
                failed = true;
            }
        }
    }

    if let Some(path) = &args.pdf {
        match pdf::render(&records, &args.font) {
            Ok(bytes) => {
                if let Err(e) = std::fs::write(path, bytes) {
                    error!("pdf export to {} failed: {e}", path.display());
                    failed = true;
                }
            }
            Err(e) => {
                error!("pdf export failed: {e}");
                failed = true;
            }
        }
    }

    if failed {
        bail!("one or more exports failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::read_input;

    #[test]
    fn rejects_non_utf8_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();
        let err = read_input(Some(&file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn reads_utf8_files_unchanged() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("mitochondria ✓".as_bytes()).unwrap();
        let text = read_input(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(text, "mitochondria ✓");
    }
}
