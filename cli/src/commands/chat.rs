//! # FaqRS Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `faqrs chat` runs a simple line-based conversation loop on the terminal:
//! the bot greets the user, then answers every line typed until the user
//! says `bye` (or `exit` / `quit`) or closes stdin.
//!
//! Every line is answered independently. Nothing from earlier lines is
//! remembered, and nothing is written to disk.
//!
//! ## Examples
//!
//! ```bash
//! faqrs chat
//! faqrs chat --name "Shop Bot"
//! printf 'store hours\nbye\n' | faqrs chat
//! ```
//!
use crate::common::assistant::Assistant;
use crate::core::config::Overrides;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use faqrs_engine::Resolver;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Words that end the conversation (compared case-insensitively).
const EXIT_WORDS: &[&str] = &["bye", "exit", "quit"];

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Name shown in front of every answer. Overrides `chat.bot_name`.
    #[arg(long)]
    pub name: Option<String>,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads the assistant and runs the conversation loop on stdin/stdout.
pub fn handle_chat(args: ChatArgs, overrides: &Overrides) -> Result<()> {
    info!("Handling chat command...");
    let assistant = Assistant::load(overrides)?;
    let chat = &assistant.config().chat;
    let bot_name = args.name.as_deref().unwrap_or(&chat.bot_name);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_chat(
        &assistant.resolver(),
        bot_name,
        &chat.greeting,
        stdin.lock(),
        stdout.lock(),
    )
}

/// Runs the conversation loop over arbitrary input and output streams.
///
/// Blank lines are skipped and lines that are not valid UTF-8 are decoded
/// lossily. Returns when an exit word is read or the input reaches end of file.
pub fn run_chat<R: BufRead, W: Write>(
    resolver: &Resolver<'_>,
    bot_name: &str,
    greeting: &str,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "{}: {}", bot_name, greeting)?;
    writeln!(output, "(Type 'bye' to quit.)")?;

    let mut line = Vec::new();
    loop {
        write!(output, "You: ")?;
        output.flush().context("Failed to flush stdout")?;

        line.clear();
        let read = input
            .read_until(b'\n', &mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            debug!("Input closed, ending chat.");
            writeln!(output)?;
            break;
        }

        // Invalid UTF-8 is replaced rather than ending the session.
        let text = String::from_utf8_lossy(&line);
        let message = text.trim();
        if message.is_empty() {
            continue;
        }
        if is_exit_word(message) {
            writeln!(output, "{}: Goodbye!", bot_name)?;
            break;
        }

        let answer = resolver.resolve(message);
        writeln!(output, "{}: {}", bot_name, answer)?;
    }
    Ok(())
}

fn is_exit_word(message: &str) -> bool {
    EXIT_WORDS.iter().any(|w| message.eq_ignore_ascii_case(w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqrs_engine::{FaqIndex, KnowledgeBase, ResolverConfig, DEFAULT_FALLBACK_MESSAGE};
    use std::io::Cursor;

    fn chat_transcript(input: &str) -> String {
        chat_transcript_bytes(input.as_bytes())
    }

    fn chat_transcript_bytes(input: &[u8]) -> String {
        let index = FaqIndex::build(KnowledgeBase::sample());
        let resolver = Resolver::new(&index, ResolverConfig::default());
        let mut output = Vec::new();
        run_chat(&resolver, "Bot", "Hi there.", Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_greets_answers_and_says_goodbye() {
        let transcript = chat_transcript("what are your store hours?\nBYE\nnever read\n");
        assert!(transcript.starts_with("Bot: Hi there.\n"));
        assert!(transcript.contains("Bot: We are open from 9 AM to 9 PM every day.\n"));
        assert!(transcript.contains("Bot: Goodbye!\n"));
        assert!(!transcript.contains("never read"));
    }

    #[test]
    fn test_skips_blank_lines() {
        let transcript = chat_transcript("\n   \nbye\n");
        assert_eq!(transcript.matches("Bot:").count(), 2); // greeting + goodbye
    }

    #[test]
    fn test_unknown_question_gets_fallback() {
        let transcript = chat_transcript("xyz qwerty\nquit\n");
        assert!(transcript.contains(&format!("Bot: {}", DEFAULT_FALLBACK_MESSAGE)));
    }

    #[test]
    fn test_ends_on_eof() {
        let transcript = chat_transcript("hello");
        assert!(transcript.contains("Bot: Hello! You can ask anything.\n"));
        assert!(!transcript.contains("Goodbye"));
    }

    #[test]
    fn test_invalid_utf8_line_is_still_answered() {
        let mut input = b"store hours \xff\xfe\n".to_vec();
        input.extend_from_slice(b"bye\n");
        let transcript = chat_transcript_bytes(&input);
        assert!(transcript.contains("Bot: We are open from 9 AM to 9 PM every day.\n"));
        assert!(transcript.contains("Bot: Goodbye!\n"));
    }

    #[test]
    fn test_exit_words() {
        assert!(is_exit_word("bye"));
        assert!(is_exit_word("Exit"));
        assert!(is_exit_word("QUIT"));
        assert!(!is_exit_word("goodbye"));
    }

    #[test]
    fn test_parses_name_flag() {
        let args = ChatArgs::try_parse_from(["chat", "--name", "Shop Bot"]).unwrap();
        assert_eq!(args.name.as_deref(), Some("Shop Bot"));
    }
}
