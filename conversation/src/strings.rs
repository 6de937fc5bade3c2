//! Fixed user-facing strings.
//!
//! The Korean table is the widget's native copy; the English table carries the
//! same meaning for non-Korean deployments. Failure detail never appears here:
//! every error kind surfaces to the user as `fallback`.

#[cfg(test)]
#[path = "strings_test.rs"]
mod strings_test;

use std::str::FromStr;

/// Text shown by the widget chrome and seeded into the conversation.
#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    /// Seeded assistant greeting describing the coaching purpose.
    pub greeting: &'static str,
    /// Assistant message appended when a submission fails for any reason.
    pub fallback: &'static str,
    /// Panel header title.
    pub title: &'static str,
    /// Input placeholder.
    pub placeholder: &'static str,
    /// Indicator shown while a submission is in flight.
    pub pending: &'static str,
}

impl Strings {
    pub const KO: Strings = Strings {
        greeting: "안녕하세요! AI 자소서 코치입니다. 자소서 내용이나 면접 고민을 입력해주시면 분석해 드립니다.",
        fallback: "죄송합니다. 서버 연결에 문제가 발생했습니다. 잠시 후 다시 시도해주세요.",
        title: "Job-Navigator",
        placeholder: "내용을 입력하세요...",
        pending: "AI가 분석 중입니다...",
    };

    pub const EN: Strings = Strings {
        greeting: "Hello! I'm your AI cover letter coach. Share a draft or an interview concern and I'll review it for you.",
        fallback: "Sorry, there was a problem connecting to the server. Please try again in a moment.",
        title: "Job-Navigator",
        placeholder: "Type your message...",
        pending: "The AI is reviewing...",
    };
}

/// Selects one of the built-in [`Strings`] tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    #[must_use]
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Ko => &Strings::KO,
            Self::En => &Strings::EN,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Self::Ko),
            "en" => Ok(Self::En),
            other => Err(format!("unknown locale '{other}' (expected 'ko' or 'en')")),
        }
    }
}
