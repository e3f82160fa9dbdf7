use std::fmt;
use std::path::Path;
use std::sync::Mutex;

use rand::Rng;
use stringtools_codec::{HtmlEntityCodec, MarkupCodec, PercentUriCodec, UriCodec};
use stringtools_config::{ToolkitConfig, load_config};
use stringtools_error::{Result, codec_unavailable};
use stringtools_logging::{LogCollector, LogEntry, LogLevel, LoggingConfig};
use stringtools_random::RandomStringOptions;

const CONFIG: &str = "config";
const CODEC: &str = "codec";

/// Configured entry point for the text helpers.
///
/// Holds the defaults from a [`ToolkitConfig`], the markup and URI codecs
/// the caller installed, and a log of what happened along the way. Codec
/// operations fail with `codec_unavailable` until a codec is installed;
/// [`Toolkit::standard`] installs the bundled ones.
///
/// ```
/// use stringtools::{Toolkit, ToolkitConfig};
///
/// let toolkit = Toolkit::standard();
/// assert_eq!(toolkit.encode_markup_entities("a < b").unwrap(), "a &lt; b");
///
/// let bare = Toolkit::new(ToolkitConfig::default());
/// assert!(bare.encode_uri("a b").unwrap_err().is_codec_unavailable());
/// ```
pub struct Toolkit {
    config: ToolkitConfig,
    markup: Option<Box<dyn MarkupCodec>>,
    uri: Option<Box<dyn UriCodec>>,
    log: Mutex<LogCollector>,
}

impl fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolkit")
            .field("config", &self.config)
            .field("markup", &self.markup.is_some())
            .field("uri", &self.uri.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new(ToolkitConfig::default())
    }
}

impl Toolkit {
    /// A toolkit with no codecs installed.
    pub fn new(config: ToolkitConfig) -> Self {
        Self {
            config,
            markup: None,
            uri: None,
            log: Mutex::new(LogCollector::new()),
        }
    }

    /// Default config with [`HtmlEntityCodec`] and [`PercentUriCodec`].
    pub fn standard() -> Self {
        Self::new(ToolkitConfig::default())
            .with_markup_codec(HtmlEntityCodec)
            .with_uri_codec(PercentUriCodec)
    }

    /// Loads the config from a YAML or JSON file and installs the bundled
    /// codecs.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = load_config(path)?;
        let toolkit = Self::new(config)
            .with_markup_codec(HtmlEntityCodec)
            .with_uri_codec(PercentUriCodec);
        toolkit.record(LogLevel::Info, CONFIG, format!("loaded config from {}", path.display()));
        Ok(toolkit)
    }

    pub fn with_markup_codec(mut self, codec: impl MarkupCodec + 'static) -> Self {
        self.markup = Some(Box::new(codec));
        self
    }

    pub fn with_uri_codec(mut self, codec: impl UriCodec + 'static) -> Self {
        self.uri = Some(Box::new(codec));
        self
    }

    /// Replaces the log filter. Entries already collected are dropped.
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.log = Mutex::new(LogCollector::with_config(config));
        self
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Snapshot of the retained entries, oldest first. The log keeps at
    /// most `LoggingConfig::max_entries` of them.
    pub fn log_entries(&self) -> Vec<LogEntry> {
        self.log
            .lock()
            .map(|log| log.entries().iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Removes and returns the retained entries.
    pub fn take_log(&self) -> Vec<LogEntry> {
        self.log.lock().map(|mut log| log.drain()).unwrap_or_default()
    }

    pub fn clear_log(&self) {
        if let Ok(mut log) = self.log.lock() {
            log.clear();
        }
    }

    /// The log rendered in its configured format, one entry per line.
    pub fn render_log(&self) -> String {
        self.log.lock().map(|log| log.render()).unwrap_or_default()
    }

    fn record(&self, level: LogLevel, component: &str, message: impl Into<String>) {
        if let Ok(mut log) = self.log.lock() {
            log.log(level, component, message);
        }
    }

    fn markup_codec(&self) -> Result<&dyn MarkupCodec> {
        self.markup.as_deref().ok_or_else(|| {
            self.record(LogLevel::Warn, CODEC, "markup codec requested but none installed");
            codec_unavailable("markup")
        })
    }

    fn uri_codec(&self) -> Result<&dyn UriCodec> {
        self.uri.as_deref().ok_or_else(|| {
            self.record(LogLevel::Warn, CODEC, "uri codec requested but none installed");
            codec_unavailable("uri")
        })
    }

    pub fn encode_markup_entities(&self, input: &str) -> Result<String> {
        Ok(self.markup_codec()?.encode_entities(input))
    }

    pub fn decode_markup_entities(&self, input: &str) -> Result<String> {
        Ok(self.markup_codec()?.decode_entities(input))
    }

    pub fn strip_tags(&self, input: &str) -> Result<String> {
        Ok(self.markup_codec()?.strip_tags(input))
    }

    pub fn encode_uri(&self, input: &str) -> Result<String> {
        Ok(self.uri_codec()?.encode(input))
    }

    pub fn decode_uri(&self, input: &str) -> Result<String> {
        self.uri_codec()?.decode(input).inspect_err(|e| {
            self.record(LogLevel::Warn, CODEC, format!("uri decode failed: {e}"));
        })
    }

    /// Title case using the configured stop words.
    pub fn heading_case(&self, input: &str) -> String {
        stringtools_case::heading_case(input, false, &self.config.stop_words())
    }

    pub fn uri_slug(&self, input: &str) -> String {
        stringtools_filter::uri_slug(input, &self.config.slug_delimiter)
    }

    pub fn truncate_characters(&self, input: &str, length: usize) -> String {
        stringtools_whitespace::truncate_characters(
            input,
            length,
            &self.config.truncate_clamp,
            self.config.trim_before_truncate,
        )
    }

    pub fn truncate_words(&self, input: &str, word_count: usize) -> String {
        stringtools_whitespace::truncate_words(input, word_count, &self.config.truncate_clamp)
    }

    pub fn nl2br(&self, input: &str) -> String {
        stringtools_whitespace::nl2br(input, self.config.xhtml_line_breaks)
    }

    /// The random string settings from the config.
    pub fn random_string_options(&self) -> RandomStringOptions {
        RandomStringOptions {
            length: self.config.random_string_length,
            include_special: self.config.include_special_characters,
            special_characters: self.config.special_characters.clone(),
            special_odds: self.config.special_character_odds,
        }
    }

    /// Not cryptographically secure.
    pub fn random_string_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        stringtools_random::random_string_with(rng, &self.random_string_options())
    }

    /// Not cryptographically secure.
    pub fn random_string(&self) -> String {
        self.random_string_with(&mut rand::rng())
    }
}
