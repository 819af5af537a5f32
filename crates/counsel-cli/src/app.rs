use anyhow::{Context, Result};
use chrono::Local;
use counsel_core::{Reply, Session, Settings};
use std::io::{BufRead, Write};

const ASSISTANT: &str = "Legal Assistant";
const GREETING: &str = "Welcome to the Legal Consultation service! How can I assist you today?";

fn build_session(settings: &Settings) -> Result<Session> {
    let client = settings
        .build_client()
        .context("failed to build Gemini client")?;
    Ok(Session::new(Box::new(client)))
}

/// Submit one prompt, print the formatted reply, exit.
pub async fn run_single_prompt(settings: &Settings, prompt: &str) -> Result<()> {
    let session = build_session(settings)?;
    let reply = session.submit(prompt).await;
    println!("{reply}");
    Ok(())
}

/// Interactive chat loop over stdin/stdout.
pub async fn run_chat(settings: &Settings) -> Result<()> {
    let session = build_session(settings)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    print_message(ASSISTANT, GREETING);
    println!("Commands: /reset clears the conversation, /quit exits.");
    println!();

    loop {
        print!("You> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        // Empty input never reaches the session.
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset().await;
                print_message(ASSISTANT, "Conversation cleared. How can I assist you?");
            }
            _ => {
                let reply = session.submit(input).await;
                print_reply(&reply);
            }
        }
    }

    Ok(())
}

fn print_message(sender: &str, text: &str) {
    println!("{} [{}]: {}", sender, Local::now().format("%H:%M"), text);
}

fn print_reply(reply: &Reply) {
    println!("{} [{}]:", ASSISTANT, Local::now().format("%H:%M"));
    println!("{reply}");
    println!();
}
