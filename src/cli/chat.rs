use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

use crate::chat::{GREETING, HttpTransport, TranscriptController};
use crate::core::AppConfig;

/// Prints each update's new suffix so the reply appears as it streams.
async fn print_updates(mut rx: mpsc::UnboundedReceiver<String>) {
    let mut printed = String::new();
    while let Some(content) = rx.recv().await {
        if let Some(suffix) = content.strip_prefix(printed.as_str()) {
            print!("{}", suffix);
        } else {
            print!("\n{}", content);
        }
        let _ = std::io::stdout().flush();
        printed = content;
    }
}

pub async fn run(config: &AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let transport = HttpTransport::new(
        &config.chat_url,
        &config.chat_api_key,
        Duration::from_secs(config.chat_timeout_secs),
    )?;
    let mut controller = TranscriptController::new(transport);
    println!("{}", GREETING);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let (tx, rx) = mpsc::unbounded_channel::<String>();
                let printer = tokio::spawn(print_updates(rx));
                let reply = controller.send(&line, &tx).await;
                drop(tx);
                printer.await?;

                let Some(reply) = reply else {
                    continue;
                };
                println!();
                if let Some(notice) = reply.notice {
                    println!("{}", notice);
                }
                let _ = rl.add_history_entry(line.as_str());
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
