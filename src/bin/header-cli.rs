use clap::{Parser, Subcommand};
use serde_json::json;

use header_lab::analysis::{analyze_request, analyze_response, explain_header, HeaderFields};

#[derive(Parser)]
#[command(name = "header-cli")]
#[command(about = "Explain and grade HTTP headers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explain a single header value
    Explain { name: String, value: String },
    /// Fetch a URL and grade its response headers
    Inspect {
        url: String,
        /// Only print attention/alert entries
        #[arg(long)]
        findings: bool,
    },
    /// Classify "Name: value" pairs as request headers
    Request {
        #[arg(required = true)]
        headers: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Explain { name, value } => {
            println!("{}: {}", name.to_lowercase(), explain_header(&name, &value));
        }
        Commands::Inspect { url, findings } => {
            let res = reqwest::get(&url).await?;
            let status = res.status();
            let report = analyze_response(&HeaderFields::from_header_map(res.headers()));

            if findings {
                let entries: Vec<_> = report
                    .findings()
                    .map(|(category, entry)| json!({ "category": category, "entry": entry }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                let output = json!({
                    "url": url,
                    "status": status.as_u16(),
                    "responseReport": report,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Commands::Request { headers } => {
            let mut fields = Vec::with_capacity(headers.len());
            for raw in &headers {
                let (name, value) = raw
                    .split_once(':')
                    .ok_or_else(|| format!("expected 'Name: value', got '{}'", raw))?;
                fields.push((name.trim().to_string(), value.trim().to_string()));
            }
            let fields: HeaderFields = fields.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&analyze_request(&fields))?);
        }
    }

    Ok(())
}
