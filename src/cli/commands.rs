//! CLI command definitions and handlers

use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::client::MyMemoryClient;
use crate::core::models::{ContactEmail, TranslationRequest};

/// Commands for MyMemory Translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a single text
    Translate {
        /// Text to translate
        text: String,

        #[command(flatten)]
        options: RequestOptions,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Translate every non-empty line of a file
    Batch {
        /// Input file, one text per line
        #[arg(short, long)]
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: RequestOptions,
    },
}

/// Per-request parameters shared by all commands
#[derive(Args, Debug, Clone)]
pub struct RequestOptions {
    /// Source language code
    #[arg(short, long)]
    pub src: String,

    /// Destination language code
    #[arg(short, long)]
    pub dest: String,

    /// MyMemory API key
    #[arg(long, env = "MYMEMORY_API_KEY")]
    pub key: Option<String>,

    /// Contact email for higher limits, "gen" for a generated one
    #[arg(long, env = "MYMEMORY_EMAIL")]
    pub email: Option<String>,

    /// MIME type of the input
    #[arg(long)]
    pub mime_type: Option<String>,

    /// Request timeout in milliseconds (0 = client default)
    #[arg(long, default_value_t = 0)]
    pub timeout_ms: u64,
}

impl RequestOptions {
    /// Request template carrying these options and `text`
    pub fn to_request(&self, text: impl Into<String>) -> TranslationRequest {
        let mut request = TranslationRequest::new(text, self.src.clone(), self.dest.clone())
            .with_timeout(Duration::from_millis(self.timeout_ms));

        if let Some(key) = self.key.as_deref().filter(|k| !k.is_empty()) {
            request = request.with_api_key(key);
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            request = request.with_email(ContactEmail::from(email));
        }
        if let Some(mime_type) = &self.mime_type {
            request = request.with_mime_type(mime_type.clone());
        }

        request
    }
}

/// Handle single text translation command
pub async fn handle_translate(
    client: &MyMemoryClient,
    text: String,
    options: RequestOptions,
    json: bool,
) -> anyhow::Result<()> {
    use tracing::info;

    let request = options.to_request(text);
    info!("Translating {} bytes {}|{}", request.text.len(), options.src, options.dest);

    let result = client.translate(&request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.text);
    }

    Ok(())
}

/// Handle file batch translation command
pub async fn handle_batch(
    client: &MyMemoryClient,
    file: PathBuf,
    output: Option<PathBuf>,
    options: RequestOptions,
) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;
    use tracing::info;

    let start_time = Instant::now();

    info!("Starting batch translation");
    info!("Input: {}", file.display());

    let content = tokio::fs::read_to_string(&file).await?;
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();

    if lines.is_empty() {
        anyhow::bail!("No text found in {}", file.display());
    }

    // Create progress bar
    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
        .progress_chars("=>-"));

    let template = options.to_request(String::new());
    let mut translated = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        pb.set_message(format!("Line {}", index + 1));

        match client.translate(&template.with_text(*line)).await {
            Ok(result) => {
                translated.push(result.text);
                pb.inc(1);
            }
            Err(e) => {
                pb.abandon_with_message(format!("Failed at line {}", index + 1));
                return Err(e.into());
            }
        }
    }

    pb.finish_with_message("Completed");

    let rendered = translated.join("\n");
    match &output {
        Some(path) => {
            tokio::fs::write(path, format!("{}\n", rendered)).await?;
            info!("Output: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    let duration = start_time.elapsed();
    info!("Completed: {} lines in {:?}", translated.len(), duration);

    Ok(())
}
