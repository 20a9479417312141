/*!
 * Text processing pipeline.
 *
 * - `decoder`: raw bytes to text through an ordered encoding fallback
 * - `detection`: dominant language and ranked hypotheses
 * - `direction`: page-turn direction of a language tag
 * - `pagination`: grapheme-counted, line-aware page splitting
 * - `tokenizer`: word resolution at a character offset
 */

pub mod decoder;
pub mod detection;
pub mod direction;
pub mod pagination;
pub mod tokenizer;

pub use decoder::{DecodedText, TextEncoding, decode};
pub use detection::{LanguageDetector, LanguageHypothesis};
pub use direction::{PAGE_TURN_OVERRIDES, ReadingDirection};
pub use pagination::{Paginator, paginate};
pub use tokenizer::{Token, resolve_token};
