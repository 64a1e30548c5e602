//! Interactive line-oriented interface.
//!
//! Generic over the reader and writer so the loop can be driven from tests
//! as well as from stdin/stdout.

use crate::analyzer::{DetectionResult, LanguageAnalyzer};
use crate::language::LanguageRegistry;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

const BANNER: &str =
    "\n===== Language Detector =====\nEnter text to detect its language (or 'q' to quit)\n";
const PROMPT: &str = "\nEnter text: ";

/// Run the prompt loop until the user enters "q" (any case) or input ends.
pub async fn run<R, W>(analyzer: &LanguageAnalyzer, input: R, output: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    output.write_all(BANNER.as_bytes()).await?;

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("Console input closed");
            break;
        };

        if is_quit(&line) {
            output.write_all(b"Goodbye!\n").await?;
            break;
        }

        let result = analyzer.analyze(&line).await;
        output.write_all(format_result(&result).as_bytes()).await?;
    }

    output.flush().await
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("q")
}

/// Render a result the way the console shows it.
pub fn format_result(result: &DetectionResult) -> String {
    if !result.success() {
        return format!("\nError: {}\n", result.error().unwrap_or_default());
    }

    let code = result.language_code().unwrap_or_default();
    let mut rendered = format!(
        "\nDetected Language: {} ({})\n",
        result.language_name().unwrap_or_default(),
        code
    );

    if !LanguageRegistry::get().is_canonical(code) {
        if let Some(translated) = result.translated_text() {
            rendered.push_str(&format!("Translation: {}\n", translated));
        }
    }

    rendered
}
