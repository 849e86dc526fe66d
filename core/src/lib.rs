pub mod action;
pub mod config;
pub mod encoding;
pub mod error;
pub mod host;
pub mod natural;
pub mod persist;
pub mod resolver;
pub mod root;
pub mod store;
pub mod updater;


pub use action::{localize_selection, lookup, resolve_store_path, Outcome};
pub use config::{DuplicatePolicy, LocalizerConfig, MatchMode};
pub use error::LocalizeError;
pub use host::{EditorHost, InputPrompt, ReplacementSink, SelectionProvider};
pub use natural::{natural_cmp, sort_naturally};
pub use persist::{PersistError, PersistOutcome};
pub use resolver::find_key;
pub use root::find_root;
pub use store::{Entry, Store};
pub use updater::add_and_persist;
