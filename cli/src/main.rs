use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use conversation::config::{DEFAULT_COACH_API_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use conversation::{
    CoachConfig, ConversationState, HttpCoachClient, Ignored, Locale, Message, Role, Submitted, submit,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] conversation::ConfigError),
    #[error("coach client init failed: {0}")]
    Client(#[from] conversation::CoachError),
    #[error("nothing sent: {0:?}")]
    NotSent(Ignored),
    #[error("coach unavailable ({0})")]
    CoachUnavailable(&'static str),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "coach-cli", about = "Job-Navigator cover letter coach from the terminal")]
struct Cli {
    #[arg(long, env = "COACH_API_URL", default_value = DEFAULT_COACH_API_URL)]
    api_url: String,

    #[arg(long, env = "COACH_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[arg(long, default_value = "ko", help = "Fixed message language: ko or en")]
    locale: Locale,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send one message and print the coach's reply.
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Interactive session. End a line with `\` to continue the message on the next line.
    Chat,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = CoachConfig::new(&cli.api_url)?.with_request_timeout(cli.timeout_secs);
    let client = HttpCoachClient::new(&config)?;
    let mut state = ConversationState::with_locale(cli.locale);

    match cli.command {
        Command::Ask { text } => run_ask(&mut state, &client, &text.join(" ")).await,
        Command::Chat => run_chat(&mut state, &client).await,
    }
}

async fn run_ask(state: &mut ConversationState, client: &HttpCoachClient, text: &str) -> Result<(), CliError> {
    state.set_draft(text);
    match submit(state, client).await {
        Submitted::Ignored(reason) => Err(CliError::NotSent(reason)),
        Submitted::Answered => {
            print_last(state);
            Ok(())
        }
        Submitted::FellBack(kind) => {
            print_last(state);
            Err(CliError::CoachUnavailable(kind.code()))
        }
    }
}

async fn run_chat(state: &mut ConversationState, client: &HttpCoachClient) -> Result<(), CliError> {
    print_last(state);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut prompt = PROMPT;

    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim() == "/quit" {
            break;
        }

        match push_line(state.draft_input(), &line) {
            Draft::Continue(text) => {
                state.set_draft(text);
                prompt = CONTINUATION_PROMPT;
                continue;
            }
            Draft::Ready(text) => {
                state.set_draft(text);
                prompt = PROMPT;
            }
        }

        let Ok(submission) = state.begin_submit() else {
            state.set_draft("");
            continue;
        };
        eprintln!("{}", state.strings().pending);
        let outcome = client.coach(submission.text()).await;
        state.settle(submission, outcome);
        print_last(state);
    }

    Ok(())
}

const PROMPT: &str = "> ";
const CONTINUATION_PROMPT: &str = ". ";

/// Draft after feeding one terminal line.
#[derive(Debug, PartialEq, Eq)]
enum Draft {
    /// Line ended in `\`: keep composing.
    Continue(String),
    /// Plain Enter: submit this text.
    Ready(String),
}

fn push_line(draft: &str, line: &str) -> Draft {
    match line.strip_suffix('\\') {
        Some(head) => Draft::Continue(format!("{draft}{head}\n")),
        None => Draft::Ready(format!("{draft}{line}")),
    }
}

fn print_last(state: &ConversationState) {
    if let Some(message) = state.last_message() {
        println!("{}", render_message(message));
    }
}

fn render_message(message: &Message) -> String {
    let label = match message.role {
        Role::Assistant => "coach",
        Role::User => "you",
    };
    format!("{label}: {}", message.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_line_plain_enter_is_ready() {
        assert_eq!(push_line("", "Review my resume intro"), Draft::Ready("Review my resume intro".into()));
    }

    #[test]
    fn push_line_backslash_continues_with_newline() {
        assert_eq!(push_line("", "first line\\"), Draft::Continue("first line\n".into()));
    }

    #[test]
    fn push_line_appends_to_existing_draft() {
        assert_eq!(push_line("first line\n", "second line"), Draft::Ready("first line\nsecond line".into()));
    }

    #[test]
    fn render_message_labels_roles() {
        assert_eq!(render_message(&Message::assistant("hi")), "coach: hi");
        assert_eq!(render_message(&Message::user("hello")), "you: hello");
    }

    #[test]
    fn cli_parses_ask_with_overrides() {
        let cli = Cli::try_parse_from([
            "coach-cli",
            "--api-url",
            "http://127.0.0.1:8000/api/coach",
            "--locale",
            "en",
            "ask",
            "Review",
            "my",
            "intro",
        ])
        .unwrap();
        assert_eq!(cli.api_url, "http://127.0.0.1:8000/api/coach");
        assert_eq!(cli.locale, Locale::En);
        let Command::Ask { text } = cli.command else { panic!("expected ask") };
        assert_eq!(text.join(" "), "Review my intro");
    }

    #[test]
    fn cli_rejects_unknown_locale() {
        assert!(Cli::try_parse_from(["coach-cli", "--locale", "fr", "chat"]).is_err());
    }

    #[test]
    fn cli_requires_text_for_ask() {
        assert!(Cli::try_parse_from(["coach-cli", "ask"]).is_err());
    }
}
