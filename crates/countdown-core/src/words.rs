use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use futures_util::TryStreamExt;
use reqwest::Url;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_util::io::StreamReader;

use crate::error::WordListError;

pub type WordReader = Box<dyn AsyncBufRead + Unpin + Send>;

/// Source of newline-separated words
#[async_trait::async_trait]
pub trait WordSource: Send + Sync {
    /// Open a fresh line stream over the words
    async fn open(&self) -> Result<WordLines, WordListError>;

    /// Human readable location, for logs
    fn describe(&self) -> String;
}

/// Lines of a word source. Bytes that are not UTF-8 are replaced, so one
/// bad line does not end the read.
pub struct WordLines {
    reader: WordReader,
    buf: Vec<u8>,
}

impl WordLines {
    pub fn new(reader: WordReader) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next line without its line ending, `None` at the end of input
    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&self.buf);
        if let Cow::Owned(_) = line {
            tracing::warn!("Replaced invalid UTF-8 in word list line {:?}", line.trim_end());
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordList {
    File(PathBuf),
    Remote(Url),
    Inline(Arc<[String]>),
}

impl WordList {
    /// `http`-prefixed locators are URLs, anything else is a file path
    pub fn parse(locator: &str) -> Result<Self, WordListError> {
        if locator.starts_with("http") {
            let url = Url::parse(locator).map_err(|_| WordListError::InvalidUrl(locator.to_string()))?;
            Ok(WordList::Remote(url))
        } else {
            Ok(WordList::File(PathBuf::from(locator)))
        }
    }

    pub fn inline<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordList::Inline(words.into_iter().map(Into::into).collect())
    }

    /// Read every non-empty line
    pub async fn collect(&self) -> Result<Vec<String>, WordListError> {
        let mut lines = self.open().await?;
        let mut words = Vec::new();
        while let Some(line) = lines.next_line().await? {
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        tracing::debug!("Read {} words from {}", words.len(), self);
        Ok(words)
    }

    async fn reader(&self) -> Result<WordReader, WordListError> {
        match self {
            WordList::File(path) => {
                let file = tokio::fs::File::open(path).await?;
                Ok(Box::new(BufReader::new(file)))
            }
            WordList::Remote(url) => {
                let response = reqwest::get(url.clone()).await?.error_for_status()?;
                let stream = Box::pin(response.bytes_stream().map_err(std::io::Error::other));
                Ok(Box::new(StreamReader::new(stream)))
            }
            WordList::Inline(words) => {
                let joined = words.join("\n");
                Ok(Box::new(std::io::Cursor::new(joined.into_bytes())))
            }
        }
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordList::File(path) => write!(f, "{}", path.display()),
            WordList::Remote(url) => write!(f, "{url}"),
            WordList::Inline(words) => write!(f, "<{} inline words>", words.len()),
        }
    }
}

#[async_trait::async_trait]
impl WordSource for WordList {
    async fn open(&self) -> Result<WordLines, WordListError> {
        tracing::debug!("Opening word list {}", self);
        Ok(WordLines::new(self.reader().await?))
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locator() {
        assert_eq!(
            WordList::parse("/usr/share/dict/words").unwrap(),
            WordList::File(PathBuf::from("/usr/share/dict/words"))
        );
        assert!(matches!(
            WordList::parse("https://example.com/words.txt").unwrap(),
            WordList::Remote(_)
        ));
        assert!(matches!(
            WordList::parse("http://"),
            Err(WordListError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_inline_collect_skips_blank_lines() {
        let words = WordList::inline(["bird", "", "  wren "]).collect().await.unwrap();
        assert_eq!(words, vec!["bird", "wren"]);
    }

    #[tokio::test]
    async fn test_file_lines() {
        let path = std::env::temp_dir().join(format!("countdown-words-{}.txt", std::process::id()));
        tokio::fs::write(&path, "bird\r\ndrib\n\nspecific\n").await.unwrap();

        let list = WordList::File(path.clone());
        let words = list.collect().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(words, vec!["bird", "drib", "specific"]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_replaced() {
        let path =
            std::env::temp_dir().join(format!("countdown-latin1-{}.txt", std::process::id()));
        tokio::fs::write(&path, b"specific\ncaf\xe9\nspice\n").await.unwrap();

        let words = WordList::File(path.clone()).collect().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(words, vec!["specific", "caf\u{FFFD}", "spice"]);
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        let mut lines = WordList::inline(["bird", "wren"]).open().await.unwrap();
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("bird"));
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("wren"));
        assert_eq!(lines.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let list = WordList::File(PathBuf::from("/nonexistent/words"));
        assert!(matches!(list.collect().await, Err(WordListError::Io(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(WordList::inline(["a", "b"]).describe(), "<2 inline words>");
    }
}
