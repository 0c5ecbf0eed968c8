//! Cross-cutting, shared constants.
//!
//! These are the defaults behind [`PipelineConfig`](crate::pipeline::PipelineConfig) and
//! [`Config`](crate::config::Config). Nothing in the pipeline reads them directly; they are
//! copied into configuration data at construction time so callers can override any of them.

/// Number of candidates requested from the retriever.
pub const DEFAULT_TOP_K: usize = 100;

/// Score ratio of the broad operating point (generous citation set).
pub const BROAD_RATIO: f32 = 0.7;
/// Result cap of the broad operating point.
pub const BROAD_CAP: usize = 30;

/// Score ratio of the precise operating point (minimal citation set).
pub const PRECISE_RATIO: f32 = 0.6;
/// Result cap of the precise operating point.
pub const PRECISE_CAP: usize = 3;

pub const LITERAL_TERM_WEIGHT: f32 = 2.0;
pub const REVERSED_TERM_WEIGHT: f32 = 2.0;
pub const LOOSE_TERM_WEIGHT: f32 = 0.5;
pub const BIGRAM_WEIGHT: f32 = 5.0;
pub const REVERSED_BIGRAM_WEIGHT: f32 = 5.0;

/// Tokens must be longer than this (in characters) to earn the loose-substring bonus.
pub const LOOSE_TERM_MIN_CHARS: usize = 3;

/// Tokens must be longer than this (in characters) before an inseparable prefix is stripped.
pub const PREFIX_STRIP_MIN_CHARS: usize = 4;

/// Search text sent to the retriever for broad questions ("court ruling").
pub const BROAD_ANCHOR_TERM: &str = "פסק דין";

/// Identity key for fragments with neither a display name nor a filename.
pub const UNKNOWN_DOCUMENT_KEY: &str = "unknown";

/// Citation label for fragments with neither a display name nor a filename.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// URL prefix under which source files are served.
pub const DEFAULT_FILE_SERVING_PREFIX: &str = "http://localhost:8005/api/files";

/// Characters trimmed from both ends of every question token.
pub const TOKEN_TRIM_CHARS: &[char] = &['.', ',', '?', '"', '\''];

/// One-letter inseparable prefixes ("in", "the", "to", "from", "that", "like").
pub const INSEPARABLE_PREFIXES: &[char] = &['ב', 'ה', 'ל', 'מ', 'ש', 'כ'];

pub const DEFAULT_STOPWORDS: &[&str] = &[
    "של", "את", "על", "כי", "זה", "או", "כל", "הוא", "היא", "גם", "בין", "רק", "אך", "אין", "יש",
    "מה", "מי", "איך", "כיצד", "מתי", "איפה", "למה", "מדוע", "האם", "היה", "היתה", "היו", "תהיה",
    "יהיה", "פסק", "דין", "בית", "משפט", "החלטה", "תביעה", "נתבעת", "תובעת", "נגד", "בפני", "ב",
    "בעמ", "בע\"מ",
];

/// Phrases marking a question about the corpus as a whole.
pub const DEFAULT_BROAD_MARKERS: &[&str] = &[
    "איזה פסקי",
    "אילו פסקי",
    "מה פסק",
    "כמה פסקי",
    "רשימה",
    "פסקי דין אתה",
    "פסק הדין האחרון",
    "מבחינת התאריך",
    "מה יש במאגר",
    "מה במאגר",
    "איזה מסמכים",
];

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

pub const GENERATION_TEMPERATURE: f32 = 0.1;
pub const GENERATION_MAX_TOKENS: u32 = 512;
pub const OLLAMA_NUM_CTX: u32 = 2048;
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 45;
