//! Static configuration for the clinic intake agent
//!
//! Everything the receptionist says, and every dialect phrase table the
//! extractors match against, lives here as data. Swapping the clinic or the
//! locale is a config change, not a code change. Each config type carries
//! full built-in defaults and can optionally be overridden from YAML.

mod clinic;
mod error;
mod lexicon;
mod replies;

pub use clinic::ClinicProfile;
pub use error::ConfigError;
pub use lexicon::{FaqGroup, FaqTopic, Lexicon};
pub use replies::{render, ReplySet};
