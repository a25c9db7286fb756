pub mod highlight;
pub mod minimap;
pub mod pages;
pub mod scheduler;
pub mod tokenizer;

pub use self::highlight::{Highlight, highlight};
pub use self::minimap::{ContextWord, MinimapEntry};
pub use self::pages::{Page, PageCursor, PageIndex};
pub use self::scheduler::{PlaybackState, Scheduler, TickHandle, TickOutcome};
pub use self::tokenizer::{Token, TokenIndex, tokenize};
